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

//! Session-initialization input assembled from the two descriptors.

use serde::{Deserialize, Serialize};

use crate::descriptor::{AttendeeDescriptor, MeetingDescriptor, MeetingFeatures};

/// Attendee credentials presented to the signaling channel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionCredentials {
    pub attendee_id: String,
    pub external_user_id: String,
    pub join_token: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUrls {
    pub audio_fallback_url: String,
    pub audio_host_url: String,
    pub signaling_url: String,
    pub turn_control_url: String,
    pub event_ingestion_url: String,
}

/// Everything a conferencing session needs to start.
///
/// Built once per join and handed to the session; the descriptors it is
/// made from are consumed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfiguration {
    pub meeting_id: String,
    pub external_meeting_id: Option<String>,
    pub credentials: SessionCredentials,
    pub urls: SessionUrls,
    pub meeting_features: MeetingFeatures,
    pub media_region: String,
    pub primary_meeting_id: Option<String>,
}

impl SessionConfiguration {
    pub fn new(meeting: MeetingDescriptor, attendee: AttendeeDescriptor) -> Self {
        let placement = meeting.media_placement;
        Self {
            meeting_id: meeting.meeting_id,
            external_meeting_id: meeting.external_meeting_id,
            credentials: SessionCredentials {
                attendee_id: attendee.attendee_id,
                external_user_id: attendee.external_user_id,
                join_token: attendee.join_token,
            },
            urls: SessionUrls {
                audio_fallback_url: placement.audio_fallback_url,
                audio_host_url: placement.audio_host_url,
                signaling_url: placement.signaling_url,
                turn_control_url: placement.turn_control_url,
                event_ingestion_url: placement.event_ingestion_url,
            },
            meeting_features: meeting.meeting_features,
            media_region: meeting.media_region,
            primary_meeting_id: meeting.primary_meeting_id,
        }
    }
}
