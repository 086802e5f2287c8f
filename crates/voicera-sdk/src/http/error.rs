/*
[INPUT]:  Error sources (transport failures, HTTP error responses, bad configuration)
[OUTPUT]: A single structured error type carrying message, status code and body
[POS]:    Error handling layer - unified error type for every client operation
[UPDATE]: When adding error classification helpers or changing message formats
*/

use reqwest::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;

/// Message used when an error response carries no `message` field
pub const DEFAULT_ERROR_MESSAGE: &str = "API request failed";

/// Error returned by every Voicera API operation.
///
/// `status_code` is `0` for failures that never produced an HTTP response
/// (DNS, refused connections, timeouts, TLS, invalid configuration).
/// Otherwise it is the status the server answered with and `data` holds the
/// parsed JSON error body.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status_code: u16,
    pub data: Map<String, Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status_code: u16, data: Map<String, Value>) -> Self {
        Self {
            message: message.into(),
            status_code,
            data,
        }
    }

    /// Transport-level failure, no response received
    pub fn network(cause: impl std::fmt::Display) -> Self {
        Self::new(format!("Network error: {cause}"), 0, Map::new())
    }

    /// Request could not be assembled (bad body, bad MIME type)
    pub fn invalid_request(cause: impl std::fmt::Display) -> Self {
        Self::new(format!("Invalid request: {cause}"), 0, Map::new())
    }

    /// Local file for an upload could not be opened
    pub fn file(path: impl std::fmt::Display, cause: impl std::fmt::Display) -> Self {
        Self::new(format!("File error: {path}: {cause}"), 0, Map::new())
    }

    /// Client could not be constructed from the given configuration
    pub fn config(cause: impl std::fmt::Display) -> Self {
        Self::new(format!("Configuration error: {cause}"), 0, Map::new())
    }

    /// Response arrived but its body could not be interpreted
    pub fn invalid_response(status: StatusCode, cause: impl std::fmt::Display) -> Self {
        Self::new(
            format!("Invalid response: {cause}"),
            status.as_u16(),
            Map::new(),
        )
    }

    /// Build an error from a >= 400 response body.
    ///
    /// The body is parsed as a JSON object when possible; anything else
    /// degrades to an empty `data` map and the default message.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let data = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };

        let message = data
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ERROR_MESSAGE)
            .to_string();

        Self::new(message, status.as_u16(), data)
    }

    /// The status code as a typed value, `None` for network failures
    pub fn status(&self) -> Option<StatusCode> {
        if self.status_code == 0 {
            return None;
        }
        StatusCode::from_u16(self.status_code).ok()
    }

    pub fn is_network_error(&self) -> bool {
        self.status_code == 0
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code == StatusCode::UNAUTHORIZED.as_u16()
    }

    pub fn is_forbidden(&self) -> bool {
        self.status_code == StatusCode::FORBIDDEN.as_u16()
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == StatusCode::NOT_FOUND.as_u16()
    }

    /// Check if the caller should consult the rate-limit endpoint
    pub fn is_rate_limited(&self) -> bool {
        self.status_code == StatusCode::TOO_MANY_REQUESTS.as_u16()
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    /// The `error` string some platform routes (OAuth) report instead of `message`
    pub fn server_error(&self) -> Option<&str> {
        self.data.get("error").and_then(Value::as_str)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::network(error_chain(&err))
    }
}

/// Render an error with all of its sources, `outer: inner: root`
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !rendered.contains(&cause_text) {
            rendered.push_str(": ");
            rendered.push_str(&cause_text);
        }
        source = cause.source();
    }
    rendered
}

/// Result type alias for Voicera operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_response_uses_message_field() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, br#"{"message":"not found"}"#);
        assert_eq!(err.status_code, 404);
        assert_eq!(err.message, "not found");
        assert_eq!(Value::Object(err.data.clone()), json!({"message": "not found"}));
        assert!(err.is_not_found());
        assert!(err.is_client_error());
    }

    #[test]
    fn test_from_response_default_message() {
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, br#"{"error":"Unsupported grant type"}"#);
        assert_eq!(err.message, DEFAULT_ERROR_MESSAGE);
        assert_eq!(err.server_error(), Some("Unsupported grant type"));
    }

    #[test]
    fn test_from_response_malformed_body() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert_eq!(err.status_code, 502);
        assert_eq!(err.message, DEFAULT_ERROR_MESSAGE);
        assert!(err.data.is_empty());
        assert!(err.is_server_error());
    }

    #[test]
    fn test_from_response_non_object_body() {
        let err = ApiError::from_response(StatusCode::CONFLICT, br#"["conflict"]"#);
        assert_eq!(err.message, DEFAULT_ERROR_MESSAGE);
        assert!(err.data.is_empty());
    }

    #[test]
    fn test_network_error() {
        let err = ApiError::network("connection refused");
        assert_eq!(err.status_code, 0);
        assert_eq!(err.to_string(), "Network error: connection refused");
        assert!(err.is_network_error());
        assert!(err.status().is_none());
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "operation timed out");
        let outer = ApiError::file("/tmp/x", &io);
        assert_eq!(outer.message, "File error: /tmp/x: operation timed out");
        assert_eq!(error_chain(&io), "operation timed out");
    }

    #[test]
    fn test_rate_limited() {
        let err = ApiError::from_response(StatusCode::TOO_MANY_REQUESTS, b"");
        assert!(err.is_rate_limited());
        assert_eq!(err.status(), Some(StatusCode::TOO_MANY_REQUESTS));
    }
}
