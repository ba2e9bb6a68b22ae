use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error envelope returned by the API collaborators.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ErrorResponse {
    /// The main error message.
    pub message: String,

    /// Optional additional details about the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_displays_message() {
        let error = ErrorResponse::new("statistics unavailable");
        assert_eq!(error.to_string(), "statistics unavailable");
    }

    #[test]
    fn error_response_deserializes_without_details() {
        let error: ErrorResponse = serde_json::from_str(r#"{"message": "nope"}"#).unwrap();
        assert_eq!(error.message, "nope");
        assert_eq!(error.details, None);
    }
}
