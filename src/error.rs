use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    /// Generic not-found error for unrouted requests.
    pub fn not_found() -> Self {
        AppError::NotFound("Not Found".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        tracing::debug!(status = status.as_u16(), error = %self, "Request failed");
        let detail = self.to_string();

        (status, Json(ErrorBody { detail })).into_response()
    }
}
