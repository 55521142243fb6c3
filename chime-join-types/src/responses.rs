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

//! Response types for the join endpoint.
//!
//! The join backend answers with a nested envelope:
//!
//! ```json
//! {
//!   "joinInfo": {
//!     "meeting": {
//!       "meetingId": "M1",
//!       "externalMeetingId": "E1",
//!       "mediaPlacement": { "audioHostUrl": "a", "signalingUrl": "s", "eventIngestionUrl": "e" },
//!       "mediaRegion": "ap-northeast-1"
//!     },
//!     "attendee": { "attendeeId": "A1", "externalUserId": "U1", "joinToken": "T1" }
//!   }
//! }
//! ```
//!
//! These types are decoded only. Unknown keys are ignored and optional keys
//! may be absent or `null`.

use serde::{Deserialize, Serialize};

/// Top-level body returned by `POST {base}join`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JoinMeetingResponse {
    pub join_info: JoinInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JoinInfo {
    pub meeting: Meeting,
    pub attendee: Attendee,
}

/// Meeting record as issued by the conferencing service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub meeting_id: String,
    #[serde(default)]
    pub external_meeting_id: Option<String>,
    pub media_placement: MediaPlacement,
    #[serde(default)]
    pub meeting_features: Option<MeetingFeaturesInfo>,
    pub media_region: String,
    /// Set when this meeting is a replica of another meeting.
    #[serde(default)]
    pub primary_meeting_id: Option<String>,
}

/// Transport URLs the session attaches to.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MediaPlacement {
    pub audio_host_url: String,
    #[serde(default)]
    pub audio_fallback_url: Option<String>,
    pub signaling_url: String,
    #[serde(default)]
    pub turn_control_url: Option<String>,
    pub event_ingestion_url: String,
}

/// Optional per-meeting media limits.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct MeetingFeaturesInfo {
    #[serde(default)]
    pub video: Option<ResolutionHint>,
    #[serde(default)]
    pub content: Option<ResolutionHint>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionHint {
    /// One of `"None"`, `"HD"`, `"FHD"`, `"UHD"` when present.
    #[serde(default)]
    pub max_resolution: Option<String>,
}

/// Attendee credentials for the joining participant.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub attendee_id: String,
    pub external_user_id: String,
    pub join_token: String,
}
