//! Translation of [`ApiError`] into HTTP responses.
//!
//! | error                         | status   | body                               |
//! |-------------------------------|----------|------------------------------------|
//! | `Validation`                  | 400      | message                            |
//! | `FieldValidation`             | 400      | JSON `{field: message}`            |
//! | `NotFound`, upstream 404      | 404      | generic not-found message          |
//! | upstream 400                  | 400      | message with upstream cause        |
//! | upstream 429                  | 429      | generic throttling message         |
//! | other upstream status         | same     | generic upstream failure message   |
//! | anything else                 | 500      | error message                      |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ApiError;

pub const NOT_FOUND_MESSAGE: &str = "Requested resource not found.";
pub const TOO_MANY_REQUESTS_MESSAGE: &str = "Too many request received to process";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Upstream service request failed";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => {
                tracing::warn!(error = %message, "Bad input request");
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            ApiError::FieldValidation(errors) => {
                tracing::warn!(fields = ?errors.keys().collect::<Vec<_>>(), "Create request failed validation");
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            ApiError::NotFound(detail) => {
                tracing::warn!(error = %detail, "Resource not found");
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response()
            }
            ApiError::Upstream { status, message } => upstream_response(status, &message),
            other => {
                tracing::error!(error = %other, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response()
            }
        }
    }
}

fn upstream_response(status: u16, message: &str) -> Response {
    let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    match code {
        StatusCode::BAD_REQUEST => {
            tracing::warn!(cause = %message, "Upstream rejected input");
            (
                code,
                format!("Invalid Data input provided, cause : {}", message),
            )
                .into_response()
        }
        StatusCode::TOO_MANY_REQUESTS => {
            tracing::warn!("Upstream is throttling requests");
            (code, TOO_MANY_REQUESTS_MESSAGE).into_response()
        }
        StatusCode::NOT_FOUND => {
            tracing::warn!("Upstream resource not found");
            (code, NOT_FOUND_MESSAGE).into_response()
        }
        _ => {
            tracing::error!(status, cause = %message, "Upstream request failed");
            (code, UPSTREAM_FAILURE_MESSAGE).into_response()
        }
    }
}
