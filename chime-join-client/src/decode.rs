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

//! Strict decoding of join response bodies.

use chime_join_types::JoinMeetingResponse;
use serde_json::error::Category;

use crate::error::{DecodeError, DecodeErrorKind};

/// Decode a join response body in a single typed pass.
///
/// Either the whole document matches [`JoinMeetingResponse`] or a
/// [`DecodeError`] is returned; there is no partial result.
pub fn decode_join_response(body: &[u8]) -> Result<JoinMeetingResponse, DecodeError> {
    let mut de = serde_json::Deserializer::from_slice(body);
    let response: JoinMeetingResponse =
        serde_path_to_error::deserialize(&mut de).map_err(|err| {
            let path = path_string(err.path());
            classify(err.into_inner(), path)
        })?;
    // Reject trailing garbage after the document.
    de.end().map_err(|err| classify(err, String::new()))?;
    Ok(response)
}

fn path_string(path: &serde_path_to_error::Path) -> String {
    if path.iter().next().is_none() {
        String::new()
    } else {
        path.to_string()
    }
}

fn classify(err: serde_json::Error, path: String) -> DecodeError {
    let message = err.to_string();
    let (kind, path) = match err.classify() {
        Category::Syntax | Category::Eof => (DecodeErrorKind::CorruptedData, path),
        Category::Io => (DecodeErrorKind::Other, path),
        Category::Data => {
            if let Some(field) = missing_field(&message) {
                (DecodeErrorKind::MissingKey, join_path(&path, field))
            } else if message.starts_with("invalid type: null")
                || message.starts_with("invalid type: unit value")
            {
                (DecodeErrorKind::MissingValue, path)
            } else if message.starts_with("invalid type")
                || message.starts_with("invalid value")
                || message.starts_with("invalid length")
            {
                (DecodeErrorKind::TypeMismatch, path)
            } else {
                (DecodeErrorKind::Other, path)
            }
        }
    };
    DecodeError {
        kind,
        path,
        message,
    }
}

/// Extract `name` from serde's "missing field `name`" message.
fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{parent}.{field}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn valid() -> Value {
        json!({
            "joinInfo": {
                "meeting": {
                    "meetingId": "M1",
                    "externalMeetingId": "E1",
                    "mediaPlacement": {
                        "audioHostUrl": "a",
                        "signalingUrl": "s",
                        "eventIngestionUrl": "e"
                    },
                    "mediaRegion": "ap-northeast-1"
                },
                "attendee": { "attendeeId": "A1", "externalUserId": "U1", "joinToken": "T1" }
            }
        })
    }

    fn decode(value: &Value) -> Result<JoinMeetingResponse, DecodeError> {
        decode_join_response(value.to_string().as_bytes())
    }

    #[test]
    fn decodes_valid_body() {
        let response = decode(&valid()).expect("should decode");
        assert_eq!(response.join_info.meeting.meeting_id, "M1");
        assert_eq!(response.join_info.attendee.attendee_id, "A1");
    }

    #[test]
    fn missing_join_token_is_missing_key() {
        let mut body = valid();
        body["joinInfo"]["attendee"]
            .as_object_mut()
            .unwrap()
            .remove("joinToken");
        let err = decode(&body).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingKey);
        assert_eq!(err.path, "joinInfo.attendee.joinToken");
    }

    #[test]
    fn missing_top_level_key() {
        let err = decode_join_response(b"{}").unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingKey);
        assert_eq!(err.path, "joinInfo");
    }

    #[test]
    fn null_required_value_is_missing_value() {
        let mut body = valid();
        body["joinInfo"]["meeting"]["mediaPlacement"]["signalingUrl"] = Value::Null;
        let err = decode(&body).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingValue);
        assert_eq!(err.path, "joinInfo.meeting.mediaPlacement.signalingUrl");
    }

    #[test]
    fn wrong_type_is_type_mismatch() {
        let mut body = valid();
        body["joinInfo"]["meeting"]["meetingId"] = json!(42);
        let err = decode(&body).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::TypeMismatch);
        assert_eq!(err.path, "joinInfo.meeting.meetingId");
    }

    #[test]
    fn malformed_json_is_corrupted() {
        let err = decode_join_response(br#"{"joinInfo": {"meeting": "#).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::CorruptedData);

        let err = decode_join_response(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::CorruptedData);
    }

    #[test]
    fn empty_body_is_corrupted() {
        let err = decode_join_response(b"").unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::CorruptedData);
    }

    #[test]
    fn trailing_garbage_is_corrupted() {
        let mut bytes = valid().to_string().into_bytes();
        bytes.extend_from_slice(b" }");
        let err = decode_join_response(&bytes).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::CorruptedData);
    }

    #[test]
    fn non_object_root_is_type_mismatch() {
        let err = decode_join_response(br#""joined""#).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::TypeMismatch);
        assert_eq!(err.path, "");
    }
}
