use serde::{Deserialize, Serialize};

/// A single synthesized news article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub summary: String,
    /// Unix timestamp in seconds
    pub published: i64,
    pub source: String,
    pub url: String,
    pub provider: String,
}
