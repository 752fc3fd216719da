//! Error taxonomy shared by the handler, service and upstream layers.
//!
//! Every failure travels as an [`ApiError`] value up to the HTTP boundary,
//! where `http::error` turns it into a status code and body.

use std::collections::BTreeMap;
use thiserror::Error;

/// Field name → human-readable message for a rejected create request.
pub type FieldErrors = BTreeMap<String, String>;

/// Errors that can occur while serving an employee request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input detected before any upstream call.
    #[error("{0}")]
    Validation(String),

    /// One or more create-request fields failed their constraints.
    #[error("Validation failed for {} field(s)", .0.len())]
    FieldValidation(FieldErrors),

    /// The requested employee does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The upstream service answered with a non-2xx status.
    #[error("Upstream returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Unexpected failure, e.g. the upstream refusing a delete.
    #[error("{0}")]
    Internal(String),

    /// The upstream service could not be reached.
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream body did not match the envelope contract.
    #[error("Malformed upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for employee operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Upstream {
            status: 429,
            message: "slow down".to_string(),
        };
        assert_eq!(err.to_string(), "Upstream returned status 429: slow down");

        let mut fields = FieldErrors::new();
        fields.insert("name".into(), "Name cannot be null or blank".into());
        fields.insert("age".into(), "Age must be between 16 and 75".into());
        assert_eq!(
            ApiError::FieldValidation(fields).to_string(),
            "Validation failed for 2 field(s)"
        );
    }
}
