//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, timeout or request building error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Credentials rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Request body failed server-side validation
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            422 => Self::UnprocessableEntity(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::UnprocessableEntity(_) => Some(422),
            Self::ServerError { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status() {
        let cases = [
            (StatusCode::BAD_REQUEST, Some(400)),
            (StatusCode::UNAUTHORIZED, Some(401)),
            (StatusCode::FORBIDDEN, Some(403)),
            (StatusCode::NOT_FOUND, Some(404)),
            (StatusCode::UNPROCESSABLE_ENTITY, Some(422)),
            (StatusCode::BAD_GATEWAY, Some(502)),
        ];

        for (status, expected) in cases {
            let error = ClientError::from_status(status, "boom".to_string());
            assert_eq!(error.status(), expected);
        }
    }

    #[test]
    fn test_unauthorized_is_authentication_failure() {
        let error = ClientError::from_status(StatusCode::UNAUTHORIZED, "nope".to_string());
        assert!(matches!(error, ClientError::AuthenticationFailed(ref m) if m == "nope"));
    }
}
