use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;

/// Error body shape: `{"detail": "<message>"}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Wraps a [`DomainError`] so handlers can use `?` and let axum render the
/// mapped status and message.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self.0 {
            // Names the missing variable; produced before any outbound call.
            err @ DomainError::MissingCredential { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            // Mirror the upstream's status code exactly.
            DomainError::UpstreamStatus { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            DomainError::UpstreamUnreachable(message) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Service Unavailable: {message}"),
            ),
            DomainError::Provider(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred with the OpenAI API: {message}"),
            ),
            DomainError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
