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

//! Error types for the join request service.

use std::fmt;

use thiserror::Error;

/// Errors returned by [`JoinRequestService`](crate::JoinRequestService) methods.
///
/// Every variant ends the join attempt. Nothing is retried.
#[derive(Debug, Error)]
pub enum JoinError {
    /// No usable response body: the request failed in transport or the
    /// server answered with a non-success status.
    #[error("No response from join endpoint: {0}")]
    NoResponse(String),

    /// A body was received but did not match the join response schema.
    #[error("Failed to decode join response: {0}")]
    Decode(#[from] DecodeError),

    /// The base URL (default or override) does not form a valid URL.
    #[error("Invalid join endpoint: {0}")]
    InvalidEndpoint(String),

    /// The task running the join was dropped before it resolved.
    #[error("Join was cancelled before completion")]
    Cancelled,

    /// The result of a [`PendingJoin`](crate::PendingJoin) was already handed out.
    #[error("Join result was already taken")]
    AlreadyTaken,
}

impl From<reqwest::Error> for JoinError {
    fn from(err: reqwest::Error) -> Self {
        JoinError::NoResponse(err.to_string())
    }
}

/// Why a response body failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    /// Not valid JSON, or truncated.
    CorruptedData,
    /// A required key is absent.
    MissingKey,
    /// A required key is present but `null`.
    MissingValue,
    /// A value has the wrong JSON type or an unacceptable value.
    TypeMismatch,
    Other,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DecodeErrorKind::CorruptedData => "corrupted data",
            DecodeErrorKind::MissingKey => "missing key",
            DecodeErrorKind::MissingValue => "missing value",
            DecodeErrorKind::TypeMismatch => "type mismatch",
            DecodeErrorKind::Other => "decoding error",
        };
        f.write_str(name)
    }
}

/// A classified decode failure with the offending field path.
///
/// `path` is dotted from the document root, e.g. `joinInfo.attendee.joinToken`.
/// It is empty when the failure is not tied to a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at '{path}': {message}")]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    pub path: String,
    pub message: String,
}
