use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

/// The only failure class this server has: something went wrong while
/// building or serializing a response. Every variant maps to a bare 500
/// with an empty body; the mock does not classify failures further.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Response error: {0}")]
    Response(#[from] axum::http::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
