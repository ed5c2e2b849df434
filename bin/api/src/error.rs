//! API error outcomes.
//!
//! Every handler completes with an outcome; no error here is fatal to the
//! process. Reserved operations return [`ApiError::NotImplemented`], a
//! deliberate, stable outcome that is never conflated with a failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use palaver::PalaverError;
use serde::Serialize;

/// JSON body attached to every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

/// Outcome of a failed or reserved API operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed client input, a missing invitation, or a collaborator
    /// failure surfaced with its message.
    BadRequest(String),
    /// The requested entity does not exist.
    NotFound(String),
    /// Operation reserved for future extension.
    NotImplemented,
}

impl ApiError {
    /// Creates a bad request outcome.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Creates a not found outcome.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg,
            ApiError::NotImplemented => "not implemented",
        }
    }
}

impl From<PalaverError> for ApiError {
    fn from(err: PalaverError) -> Self {
        match err {
            PalaverError::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palaver::PalaverError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::bad_request("x").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::not_found("x").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::NotImplemented.into_response().status(),
            StatusCode::NOT_IMPLEMENTED
        );
    }

    #[test]
    fn test_not_implemented_is_its_own_outcome() {
        // Reserved operations must be distinguishable from failures.
        assert_ne!(
            ApiError::NotImplemented,
            ApiError::bad_request("not implemented")
        );
    }

    #[test]
    fn test_engine_errors_surface_as_bad_request() {
        let err: ApiError = PalaverError::engine("disk on fire").into();
        assert_eq!(err, ApiError::bad_request("disk on fire"));
    }

    #[test]
    fn test_lookup_errors_surface_as_not_found() {
        let err: ApiError = PalaverError::not_found("forum not found").into();
        assert_eq!(err, ApiError::not_found("forum not found"));
    }
}
