//! Error model shared by the Toggl and Jira client operations.

pub use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a remote call: a non-success HTTP status (404 gets its own variant so callers can
/// tell a missing issue from a broken request), rejected credentials, transport problems or a
/// body that could not be decoded.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http {status}: {message}")]
    Http {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("authentication error: {0}")]
    Authentication(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl ApiError {
    /// Constructs an HTTP error variant with optional API-specific code.
    pub fn http(status: StatusCode, code: Option<String>, message: impl Into<String>) -> Self {
        ApiError::Http {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<reqwest::Error> for ApiError {
    /// Converts reqwest errors into semantic ApiError variants.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else if err.is_status() {
            match err.status() {
                Some(StatusCode::NOT_FOUND) => ApiError::NotFound(err.to_string()),
                Some(status) => ApiError::http(status, None, err.to_string()),
                None => ApiError::Other(err.to_string()),
            }
        } else if err.is_connect() {
            ApiError::Network(err.to_string())
        } else if err.is_decode() {
            ApiError::Serialization(err.to_string())
        } else {
            ApiError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use reqwest::StatusCode;

    #[test]
    fn only_not_found_variant_reports_not_found() {
        assert!(ApiError::NotFound("issue PROJ-1".into()).is_not_found());
        assert!(!ApiError::http(StatusCode::BAD_REQUEST, None, "bad").is_not_found());
        assert!(!ApiError::Network("refused".into()).is_not_found());
    }

    #[test]
    fn http_error_display_includes_status_and_message() {
        let err = ApiError::http(StatusCode::BAD_REQUEST, Some("E1".into()), "invalid worklog");
        assert_eq!(err.to_string(), "http 400 Bad Request: invalid worklog");
    }

    #[test]
    fn json_errors_become_serialization_errors() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Serialization(_)));
    }
}
