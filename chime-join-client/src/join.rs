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

//! The join handshake: `POST {base}join`.

use chime_join_types::{
    AttendeeDescriptor, JoinMeetingResponse, JoinRequest, MeetingDescriptor, SessionConfiguration,
};
use log::{debug, error, info, warn};
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::decode::decode_join_response;
use crate::error::JoinError;
use crate::pending::PendingJoin;
use crate::JoinRequestService;

impl JoinRequestService {
    /// Perform one join handshake.
    ///
    /// Calls `POST {base}join` with body
    /// `{ "title", "attendeeName", "region", "ns_es": false }`, plus
    /// `primaryExternalMeetingId` when one is given.
    ///
    /// - Transport failures and non-success statuses resolve to
    ///   [`JoinError::NoResponse`] without a decode attempt.
    /// - A body that does not match the schema resolves to
    ///   [`JoinError::Decode`].
    ///
    /// No retries, no caching, and no timeout beyond the HTTP client's own.
    pub async fn submit_join(
        &self,
        meeting_id: &str,
        attendee_name: &str,
        endpoint_override: &str,
        primary_external_meeting_id: &str,
    ) -> Result<JoinMeetingResponse, JoinError> {
        let url = self.join_url(endpoint_override).map_err(|e| {
            error!("Cannot build join URL: {e}");
            e
        })?;
        let body = JoinRequest::new(meeting_id, attendee_name, &self.config.region)
            .with_primary_external_meeting_id(primary_external_meeting_id);
        debug!(
            "POST {url} title={meeting_id} region={} primary={:?}",
            body.region, body.primary_external_meeting_id
        );

        let response = self
            .http
            .post(url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Join request to {url} failed: {e}");
                JoinError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(
                "Join endpoint {url} answered {status}: {}",
                truncate_for_log(&text)
            );
            return Err(JoinError::NoResponse(format!("HTTP {status}")));
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!("Failed to read join response body from {url}: {e}");
            JoinError::from(e)
        })?;

        let joined = decode_join_response(&bytes).map_err(|e| {
            error!(
                "Failed to decode join response ({}) at '{}': {}",
                e.kind, e.path, e.message
            );
            JoinError::Decode(e)
        })?;
        info!(
            "Joined meeting {} as attendee {}",
            joined.join_info.meeting.meeting_id, joined.join_info.attendee.attendee_id
        );
        Ok(joined)
    }

    /// Join and assemble the session-initialization input in one step.
    pub async fn join_session(
        &self,
        meeting_id: &str,
        attendee_name: &str,
        endpoint_override: &str,
        primary_external_meeting_id: &str,
    ) -> Result<SessionConfiguration, JoinError> {
        let response = self
            .submit_join(
                meeting_id,
                attendee_name,
                endpoint_override,
                primary_external_meeting_id,
            )
            .await?;
        Ok(SessionConfiguration::new(
            to_meeting_descriptor(&response),
            to_attendee_descriptor(&response),
        ))
    }

    /// Run [`submit_join`](Self::submit_join) on `runtime` and hand back a
    /// [`PendingJoin`] the caller can resolve from its own context.
    ///
    /// The result is delivered once, after the request has fully finished.
    pub fn spawn_join(
        &self,
        runtime: &Handle,
        meeting_id: &str,
        attendee_name: &str,
        endpoint_override: &str,
        primary_external_meeting_id: &str,
    ) -> PendingJoin {
        let (tx, rx) = oneshot::channel();
        let service = self.clone();
        let meeting_id = meeting_id.to_string();
        let attendee_name = attendee_name.to_string();
        let endpoint_override = endpoint_override.to_string();
        let primary = primary_external_meeting_id.to_string();
        runtime.spawn(async move {
            let result = service
                .submit_join(&meeting_id, &attendee_name, &endpoint_override, &primary)
                .await;
            if tx.send(result).is_err() {
                debug!("Join for {meeting_id} finished after the caller gave up");
            }
        });
        PendingJoin::new(rx)
    }
}

/// Longest error body excerpt written to the log.
const MAX_LOGGED_BODY: usize = 512;

fn truncate_for_log(text: &str) -> String {
    if text.len() <= MAX_LOGGED_BODY {
        return text.to_string();
    }
    let mut end = MAX_LOGGED_BODY;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes total)", &text[..end], text.len())
}

/// Project the meeting half of a join response.
pub fn to_meeting_descriptor(response: &JoinMeetingResponse) -> MeetingDescriptor {
    MeetingDescriptor::from_response(response)
}

/// Project the attendee half of a join response.
pub fn to_attendee_descriptor(response: &JoinMeetingResponse) -> AttendeeDescriptor {
    AttendeeDescriptor::from_response(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_error_body_is_logged_whole() {
        assert_eq!(truncate_for_log("Internal Server Error"), "Internal Server Error");
    }

    #[test]
    fn long_error_body_is_truncated() {
        let body = "x".repeat(4096);
        let logged = truncate_for_log(&body);
        assert!(logged.starts_with(&"x".repeat(MAX_LOGGED_BODY)));
        assert!(logged.ends_with("(4096 bytes total)"));
        assert!(logged.len() < body.len());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 'é' is two bytes, so byte 512 falls inside a character.
        let body = format!("a{}", "é".repeat(600));
        let logged = truncate_for_log(&body);
        assert!(logged.starts_with('a'));
        assert!(logged.contains("bytes total"));
    }
}
