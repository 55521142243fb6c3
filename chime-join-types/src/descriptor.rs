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

//! Locally-owned projections of a [`JoinMeetingResponse`].
//!
//! Descriptors carry only what the session initializer needs. Every field is
//! either copied from the decoded response or replaced by a fixed default
//! when the wire field is optional and absent:
//!
//! | field                        | default when absent |
//! |------------------------------|---------------------|
//! | `audio_fallback_url`         | `""`                |
//! | `turn_control_url`           | `""`                |
//! | `video_max_resolution`       | [`VideoResolution::Hd`]  |
//! | `content_max_resolution`     | [`VideoResolution::Fhd`] |
//!
//! Both projections are pure: they borrow the response and hold no state
//! between calls.

use serde::{Deserialize, Serialize};

use crate::responses::{JoinMeetingResponse, MeetingFeaturesInfo, ResolutionHint};

/// Upper bound on the resolution a participant may send.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoResolution {
    Disabled,
    Hd,
    Fhd,
    Uhd,
}

impl VideoResolution {
    /// Camera video limit for a wire hint. Only `"None"` and `"FHD"` change the default.
    pub fn for_video(hint: Option<&str>) -> Self {
        match hint {
            Some("None") => VideoResolution::Disabled,
            Some("FHD") => VideoResolution::Fhd,
            _ => VideoResolution::Hd,
        }
    }

    /// Content share limit for a wire hint. Only `"None"` and `"UHD"` change the default.
    pub fn for_content(hint: Option<&str>) -> Self {
        match hint {
            Some("None") => VideoResolution::Disabled,
            Some("UHD") => VideoResolution::Uhd,
            _ => VideoResolution::Fhd,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingFeatures {
    pub video_max_resolution: VideoResolution,
    pub content_max_resolution: VideoResolution,
}

impl Default for MeetingFeatures {
    fn default() -> Self {
        Self {
            video_max_resolution: VideoResolution::Hd,
            content_max_resolution: VideoResolution::Fhd,
        }
    }
}

impl MeetingFeatures {
    fn from_info(info: Option<&MeetingFeaturesInfo>) -> Self {
        fn hint(r: Option<&ResolutionHint>) -> Option<&str> {
            r.and_then(|r| r.max_resolution.as_deref())
        }
        Self {
            video_max_resolution: VideoResolution::for_video(hint(
                info.and_then(|i| i.video.as_ref()),
            )),
            content_max_resolution: VideoResolution::for_content(hint(
                info.and_then(|i| i.content.as_ref()),
            )),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MediaPlacementDescriptor {
    pub audio_fallback_url: String,
    pub audio_host_url: String,
    pub signaling_url: String,
    pub turn_control_url: String,
    pub event_ingestion_url: String,
}

/// Meeting half of the session-initialization input.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDescriptor {
    pub meeting_id: String,
    pub external_meeting_id: Option<String>,
    pub media_placement: MediaPlacementDescriptor,
    pub meeting_features: MeetingFeatures,
    pub media_region: String,
    pub primary_meeting_id: Option<String>,
}

impl MeetingDescriptor {
    pub fn from_response(response: &JoinMeetingResponse) -> Self {
        let meeting = &response.join_info.meeting;
        let placement = &meeting.media_placement;
        Self {
            meeting_id: meeting.meeting_id.clone(),
            external_meeting_id: meeting.external_meeting_id.clone(),
            media_placement: MediaPlacementDescriptor {
                audio_fallback_url: placement.audio_fallback_url.clone().unwrap_or_default(),
                audio_host_url: placement.audio_host_url.clone(),
                signaling_url: placement.signaling_url.clone(),
                turn_control_url: placement.turn_control_url.clone().unwrap_or_default(),
                event_ingestion_url: placement.event_ingestion_url.clone(),
            },
            meeting_features: MeetingFeatures::from_info(meeting.meeting_features.as_ref()),
            media_region: meeting.media_region.clone(),
            primary_meeting_id: meeting.primary_meeting_id.clone(),
        }
    }
}

impl From<&JoinMeetingResponse> for MeetingDescriptor {
    fn from(response: &JoinMeetingResponse) -> Self {
        Self::from_response(response)
    }
}

/// Attendee half of the session-initialization input.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeDescriptor {
    pub attendee_id: String,
    pub external_user_id: String,
    pub join_token: String,
}

impl AttendeeDescriptor {
    pub fn from_response(response: &JoinMeetingResponse) -> Self {
        let attendee = &response.join_info.attendee;
        Self {
            attendee_id: attendee.attendee_id.clone(),
            external_user_id: attendee.external_user_id.clone(),
            join_token: attendee.join_token.clone(),
        }
    }
}

impl From<&JoinMeetingResponse> for AttendeeDescriptor {
    fn from(response: &JoinMeetingResponse) -> Self {
        Self::from_response(response)
    }
}
