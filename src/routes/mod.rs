pub(crate) mod indicators;
pub(crate) mod news;
pub(crate) mod sector;

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::Response;
use serde::Serialize;

use crate::errors::AppError;

/// Serialize a payload and build a 200 response with the content headers
/// the downstream client expects: an explicit charset parameter and a
/// Content-Length equal to the exact byte length of the UTF-8 body.
pub(crate) fn json_response<T: Serialize>(payload: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(payload)?;
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))?;
    Ok(response)
}
