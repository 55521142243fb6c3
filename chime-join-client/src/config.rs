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

//! Join service configuration.

use std::env;

/// Base URL used when neither the environment nor the caller overrides it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Media region requested when none is configured.
pub const DEFAULT_REGION: &str = "ap-northeast-1";

/// Configuration for a [`JoinRequestService`](crate::JoinRequestService).
///
/// Passed in at construction so that each service (and each test) carries
/// its own endpoint and region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinConfig {
    /// Join backend base URL; the `join` path segment is appended to it.
    pub base_url: String,
    /// Media routing region sent with every join request.
    pub region: String,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

impl JoinConfig {
    /// Load configuration from environment variables.
    ///
    /// # Optional
    /// - `CHIME_JOIN_BASE_URL` (default: [`DEFAULT_BASE_URL`])
    /// - `CHIME_JOIN_REGION` (default: [`DEFAULT_REGION`])
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let base_url = lookup("CHIME_JOIN_BASE_URL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let region = match lookup("CHIME_JOIN_REGION") {
            None => DEFAULT_REGION.to_string(),
            Some(s) if s.is_empty() => DEFAULT_REGION.to_string(),
            Some(s) if s.trim().is_empty() => {
                return Err("CHIME_JOIN_REGION must not be blank".to_string())
            }
            Some(s) => s.trim().to_string(),
        };
        Ok(Self { base_url, region })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }
}
