//! Client error type.

use thiserror::Error;

/// Errors surfaced to callers of [`crate::BearerClient`].
///
/// `Clone` so a single refresh outcome can be handed to every parked waiter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("could not encode request: {0}")]
    Encode(String),

    /// The endpoint could not be joined onto the base URL.
    #[error("invalid endpoint: {0}")]
    InvalidUrl(String),

    /// Token refresh failed; the session has been discarded.
    #[error("session expired")]
    SessionExpired,
}

impl ClientError {
    /// HTTP status for server-side rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Server message when there is one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ClientError::Api { status: 409, message: "Phone already registered".into() };
        assert_eq!(err.user_message("Registration failed"), "Phone already registered");
        assert_eq!(err.status(), Some(409));

        let err = ClientError::Network("connection reset".into());
        assert_eq!(err.user_message("Registration failed"), "Registration failed");
        assert_eq!(err.status(), None);
    }
}
