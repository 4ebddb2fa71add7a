use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::builders::build_indicators_response;
use crate::errors::AppError;
use crate::routes::json_response;

pub fn router() -> Router {
    Router::new().route("/indicators", get(get_indicators))
}

/// GET /indicators
///
/// No query parameters. Returns the fixed market indicator sentiments.
async fn get_indicators() -> Result<Response, AppError> {
    info!("GET /indicators - Returning canned indicator sentiments");

    json_response(&build_indicators_response())
}
