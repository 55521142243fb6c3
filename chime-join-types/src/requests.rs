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

//! Request body for the join endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST {base}join`.
///
/// Built fresh for every join attempt and never persisted.
///
/// ```json
/// { "title": "standup", "attendeeName": "Alice", "region": "ap-northeast-1", "ns_es": false }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    /// Meeting title. The backend creates the meeting on first join.
    pub title: String,

    /// Display name of the joining attendee, forwarded as-is.
    pub attendee_name: String,

    /// Media routing region for the conferencing SDK.
    pub region: String,

    /// Echo reduction / noise suppression toggle.
    #[serde(rename = "ns_es", default)]
    pub noise_suppression: bool,

    /// External id of the primary meeting when joining a replica meeting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_external_meeting_id: Option<String>,
}

impl JoinRequest {
    pub fn new(title: &str, attendee_name: &str, region: &str) -> Self {
        Self {
            title: title.to_string(),
            attendee_name: attendee_name.to_string(),
            region: region.to_string(),
            noise_suppression: false,
            primary_external_meeting_id: None,
        }
    }

    /// Link this join to a primary meeting. An empty id leaves the request unlinked.
    pub fn with_primary_external_meeting_id(mut self, id: &str) -> Self {
        self.primary_external_meeting_id = Some(id.to_string()).filter(|s| !s.is_empty());
        self
    }
}
