use axum::extract::Query;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tracing::info;

use crate::builders::build_sector_response;
use crate::errors::AppError;
use crate::routes::json_response;

const DEFAULT_SECTOR: &str = "technology";

pub fn router() -> Router {
    Router::new().route("/sector", get(get_sector))
}

#[derive(Debug, Deserialize)]
pub struct SectorQueryParams {
    pub sector: Option<String>,
}

/// GET /sector
///
/// Query parameters:
/// - `sector`: sector name echoed back in the response (default: technology)
///
/// Returns a canned sector sentiment summary.
async fn get_sector(Query(params): Query<SectorQueryParams>) -> Result<Response, AppError> {
    let sector = params
        .sector
        .unwrap_or_else(|| DEFAULT_SECTOR.to_string());

    info!("GET /sector - Returning canned summary (sector={})", sector);

    json_response(&build_sector_response(&sector))
}
