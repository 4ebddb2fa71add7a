use axum::extract::Query;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::builders::build_news_articles;
use crate::errors::AppError;
use crate::routes::json_response;

const DEFAULT_SYMBOL: &str = "TEST.T";
const DEFAULT_DAYS_BACK: i64 = 7;

pub fn router() -> Router {
    Router::new().route("/news", get(get_news))
}

/// Query parameters for the news route
#[derive(Debug, Deserialize)]
pub struct NewsQueryParams {
    pub symbol: Option<String>,
    /// Malformed values silently fall back to the default; a bad
    /// `days_back` must never surface as an error to the caller.
    #[serde(default = "default_days_back", deserialize_with = "lenient_days_back")]
    pub days_back: i64,
}

fn default_days_back() -> i64 {
    DEFAULT_DAYS_BACK
}

fn lenient_days_back<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.parse().unwrap_or(DEFAULT_DAYS_BACK))
}

/// GET /news
///
/// Query parameters:
/// - `symbol`: ticker to interpolate into the templates (default: TEST.T)
/// - `days_back`: accepted for interface compatibility (default: 7)
///
/// Returns a JSON array of 3 synthesized articles, newest first.
async fn get_news(Query(params): Query<NewsQueryParams>) -> Result<Response, AppError> {
    let symbol = params
        .symbol
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());

    info!(
        "GET /news - Synthesizing articles (symbol={}, days_back={})",
        symbol, params.days_back
    );

    let articles = build_news_articles(&symbol, params.days_back);
    json_response(&articles)
}
