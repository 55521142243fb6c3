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

//! Shared types for the meeting join endpoint.
//!
//! This crate defines the contract between the join backend and the
//! conferencing session: the request body sent to `POST {base}join`, the
//! response decoded from it, and the descriptors the session initializer
//! consumes. It is intentionally transport-agnostic, no HTTP client here.

pub mod descriptor;
pub mod requests;
pub mod responses;
pub mod session;

pub use descriptor::{
    AttendeeDescriptor, MediaPlacementDescriptor, MeetingDescriptor, MeetingFeatures,
    VideoResolution,
};
pub use requests::JoinRequest;
pub use responses::JoinMeetingResponse;
pub use session::SessionConfiguration;
