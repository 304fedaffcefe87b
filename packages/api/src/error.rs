//! Turning failed HTTP exchanges into [`SourceError`]s.

use records::SourceError;
use serde_json::Value;
use thiserror::Error;

/// Longest plain-text error body shown to the user.
const MAX_MESSAGE_CHARS: usize = 200;

/// Problems with the client's own configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid API base URL {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },
    #[error("unknown search mode {0:?}")]
    SearchMode(String),
}

/// Pick the most useful message out of an error response body.
///
/// Servers answer with a bare JSON string (`"Not found"`), an object carrying
/// `message` or `error`, or plain text. Anything else falls back to the
/// status' reason phrase.
pub fn server_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::String(s)) if !s.trim().is_empty() => return s,
            Ok(Value::Object(map)) => {
                for key in ["message", "error", "msg"] {
                    if let Some(Value::String(s)) = map.get(key) {
                        return s.clone();
                    }
                }
            }
            Ok(_) => {}
            Err(_) if !body.starts_with('<') => {
                return body.chars().take(MAX_MESSAGE_CHARS).collect();
            }
            Err(_) => {}
        }
    }
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map_or_else(|| format!("HTTP {status}"), str::to_string)
}

pub(crate) fn status_error(status: u16, body: &str) -> SourceError {
    SourceError::Status {
        status,
        message: server_message(status, body),
    }
}

pub(crate) fn request_error(err: reqwest::Error) -> SourceError {
    if err.is_decode() {
        SourceError::Decode(err.to_string())
    } else {
        SourceError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_string_body() {
        assert_eq!(server_message(404, "\"Not found\""), "Not found");
    }

    #[test]
    fn test_json_object_body() {
        assert_eq!(
            server_message(400, r#"{"message":"email taken"}"#),
            "email taken"
        );
        assert_eq!(server_message(500, r#"{"error":"boom"}"#), "boom");
    }

    #[test]
    fn test_plain_text_body_is_truncated() {
        assert_eq!(server_message(502, "upstream down\n"), "upstream down");
        let long = "x".repeat(500);
        assert_eq!(server_message(500, &long).len(), MAX_MESSAGE_CHARS);
    }

    #[test]
    fn test_falls_back_to_reason_phrase() {
        assert_eq!(server_message(404, ""), "Not Found");
        assert_eq!(server_message(503, "<html>busy</html>"), "Service Unavailable");
        assert_eq!(server_message(500, "{}"), "Internal Server Error");
        assert_eq!(server_message(599, ""), "HTTP 599");
    }

    #[test]
    fn test_status_error_shape() {
        let err = status_error(404, "\"Not found\"");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Not found (404)");
    }
}
