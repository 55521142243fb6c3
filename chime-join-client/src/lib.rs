/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Join request service for hosted conferencing meetings.
//!
//! Exchanges a meeting title and attendee name with a join backend for
//! session credentials, decodes the answer into typed records from
//! [`chime_join_types`], and reshapes them into the descriptors a
//! conferencing session is initialized with.
//!
//! # Example
//!
//! ```no_run
//! use chime_join_client::{JoinConfig, JoinRequestService};
//!
//! # async fn example() -> Result<(), chime_join_client::JoinError> {
//! let service = JoinRequestService::new(JoinConfig::default());
//!
//! // Empty override: use the configured base URL.
//! let session = service.join_session("standup", "Alice", "", "").await?;
//! println!("signaling at {}", session.urls.signaling_url);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod join;
pub mod pending;

pub use chime_join_types;
pub use config::JoinConfig;
pub use decode::decode_join_response;
pub use error::{DecodeError, DecodeErrorKind, JoinError};
pub use join::{to_attendee_descriptor, to_meeting_descriptor};
pub use pending::PendingJoin;

use reqwest::Client;
use url::Url;

/// Performs join handshakes against a join backend.
///
/// The service holds no per-join state: every call is an independent
/// round trip, and concurrent calls with identical arguments produce
/// independent joins.
#[derive(Debug, Clone)]
pub struct JoinRequestService {
    config: JoinConfig,
    http: Client,
}

impl JoinRequestService {
    pub fn new(config: JoinConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Use a preconfigured HTTP client, e.g. one with a proxy or custom TLS roots.
    pub fn with_http_client(config: JoinConfig, http: Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &JoinConfig {
        &self.config
    }

    /// Resolve the join URL for an optional endpoint override.
    ///
    /// An empty override selects the configured base URL. A missing
    /// trailing `/` is added before the `join` segment, and the result is
    /// percent-encoded by URL parsing.
    pub fn join_url(&self, endpoint_override: &str) -> Result<Url, JoinError> {
        let base = if endpoint_override.is_empty() {
            self.config.base_url.as_str()
        } else {
            endpoint_override
        };
        let raw = if base.ends_with('/') {
            format!("{base}join")
        } else {
            format!("{base}/join")
        };
        Url::parse(&raw).map_err(|e| JoinError::InvalidEndpoint(format!("{raw}: {e}")))
    }
}
