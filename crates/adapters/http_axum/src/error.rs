//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roster_domain::error::RosterError;

/// JSON error body returned for server-side failures.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Maps [`RosterError`] to an HTTP response with appropriate status code.
///
/// A missing record answers `404` with an empty body.
pub struct ApiError(RosterError);

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            RosterError::NotFound(err) => {
                tracing::debug!(error = %err, "not found");
                StatusCode::NOT_FOUND.into_response()
            }
            RosterError::Storage(err) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error",
                    }),
                )
                    .into_response()
            }
        }
    }
}
