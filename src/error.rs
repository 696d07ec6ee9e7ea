//! Client error types.

use serde_json::Value;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("session expired")]
    Unauthorized,

    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Text to show in a view. The backend's own message wins when there is
    /// one; everything else collapses to the view's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Checks `{"error": ..}`, then `{"detail": ..}`, then the first field of a
/// validation map like `{"name": ["This field is required."]}`, in the
/// order the server sent the fields.
pub fn extract_server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    for key in ["error", "detail"] {
        if let Some(text) = object.get(key).and_then(Value::as_str) {
            return Some(text.to_string());
        }
    }

    object.iter().find_map(|(field, messages)| {
        let first = match messages {
            Value::String(s) => Some(s.as_str()),
            Value::Array(items) => items.first().and_then(Value::as_str),
            _ => None,
        }?;
        if field == "non_field_errors" {
            Some(first.to_string())
        } else {
            Some(format!("{}: {}", field, first))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_key() {
        assert_eq!(
            extract_server_message(r#"{"error": "Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
    }

    #[test]
    fn test_extract_detail_key() {
        assert_eq!(
            extract_server_message(r#"{"detail": "Invalid token."}"#).as_deref(),
            Some("Invalid token.")
        );
    }

    #[test]
    fn test_extract_field_errors() {
        assert_eq!(
            extract_server_message(r#"{"name": ["This field is required."]}"#).as_deref(),
            Some("name: This field is required.")
        );
        assert_eq!(
            extract_server_message(r#"{"non_field_errors": ["Bad pair."]}"#).as_deref(),
            Some("Bad pair.")
        );
    }

    #[test]
    fn test_extract_first_field_in_response_order() {
        let body = r#"{"username": ["A user with that username already exists."], "email": ["Enter a valid email address."]}"#;
        assert_eq!(
            extract_server_message(body).as_deref(),
            Some("username: A user with that username already exists.")
        );
    }

    #[test]
    fn test_extract_nothing_useful() {
        assert_eq!(extract_server_message("<html>502</html>"), None);
        assert_eq!(extract_server_message("[]"), None);
        assert_eq!(extract_server_message(r#"{"count": 3}"#), None);
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Server { status: 400, message: "Username already exists".into() };
        assert_eq!(err.user_message("Registration failed. Please try again."), "Username already exists");

        let empty = ApiError::Server { status: 500, message: String::new() };
        assert_eq!(empty.user_message("Login failed. Please try again."), "Login failed. Please try again.");

        assert_eq!(ApiError::Timeout.user_message("Failed"), "Failed");
        assert_eq!(ApiError::Network("offline".into()).user_message("Failed"), "Failed");
    }

    #[test]
    fn test_status() {
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::Server { status: 403, message: String::new() }.status(), Some(403));
        assert_eq!(ApiError::Timeout.status(), None);
    }
}
