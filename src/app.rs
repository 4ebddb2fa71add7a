use axum::http::StatusCode;
use axum::Router;

use crate::routes::{indicators, news, sector};

pub fn create_app() -> Router {
    Router::new()
        .merge(news::router())
        .merge(sector::router())
        .merge(indicators::router())
        .fallback(not_found)
}

/// Unknown paths get a 404 with an empty body and no content headers.
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
