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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use anyhow::Context;
use chime_join_client::{JoinConfig, JoinRequestService};
use tracing::{error, info};

use crate::cli_args::Join;

/// Apply command-line overrides on top of the environment configuration.
pub fn resolve_config(join: &Join, base: JoinConfig) -> JoinConfig {
    match &join.region {
        Some(region) if !region.is_empty() => base.with_region(region),
        _ => base,
    }
}

/// Run one join and render the outcome as pretty JSON.
pub async fn join(join: Join, config: JoinConfig) -> anyhow::Result<String> {
    let service = JoinRequestService::new(resolve_config(&join, config));
    info!(
        "Joining meeting '{}' as '{}' (region {})",
        join.meeting_id,
        join.attendee_name,
        service.config().region
    );

    let rendered = if join.raw {
        let response = service
            .submit_join(
                &join.meeting_id,
                &join.attendee_name,
                &join.endpoint.endpoint,
                &join.primary_external_meeting_id,
            )
            .await
            .inspect_err(|e| error!("Join failed: {e}"))?;
        serde_json::to_string_pretty(&response)
    } else {
        let session = service
            .join_session(
                &join.meeting_id,
                &join.attendee_name,
                &join.endpoint.endpoint,
                &join.primary_external_meeting_id,
            )
            .await
            .inspect_err(|e| error!("Join failed: {e}"))?;
        serde_json::to_string_pretty(&session)
    };
    rendered.context("failed to render join result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli_args::Endpoint;

    fn args(region: Option<&str>) -> Join {
        Join {
            meeting_id: "standup".to_string(),
            attendee_name: "Alice".to_string(),
            endpoint: Endpoint {
                endpoint: String::new(),
            },
            region: region.map(str::to_string),
            primary_external_meeting_id: String::new(),
            raw: false,
        }
    }

    #[test]
    fn region_flag_overrides_environment() {
        let config = resolve_config(&args(Some("us-east-1")), JoinConfig::default());
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn missing_region_flag_keeps_environment() {
        let base = JoinConfig::default().with_region("eu-west-2");
        assert_eq!(resolve_config(&args(None), base.clone()), base);
        assert_eq!(resolve_config(&args(Some("")), base.clone()), base);
    }

    #[tokio::test]
    async fn unreachable_backend_is_an_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let config = JoinConfig::default().with_base_url(&format!("http://{addr}"));
        assert!(join(args(None), config).await.is_err());
    }
}
