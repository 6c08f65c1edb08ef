//! Axum error conversion: an `anyhow::Error` wrapper that renders as a
//! JSON `{"error": "..."}` body, plus a `ValidationError` wrapper for
//! the 400s raised by request validation in `reputation-core`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: impl std::fmt::Display) -> Response {
    (
        status,
        axum::Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Any failure with no dedicated handling: logged, then surfaced as a
/// generic 500 so internal detail never reaches the caller.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// A caller-supplied value that failed validation: reported as 400
/// with the validator's own message, which is safe to echo back since
/// it only describes the shape of the caller's own input.
pub struct BadRequest(pub String);

impl IntoResponse for BadRequest {
    fn into_response(self) -> Response {
        error_response(StatusCode::BAD_REQUEST, self.0)
    }
}

impl<E: std::fmt::Display> From<E> for BadRequest {
    fn from(err: E) -> Self {
        Self(err.to_string())
    }
}
