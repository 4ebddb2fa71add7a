use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentiment classification label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// A mocked sentiment analysis result.
///
/// The three fields are independent fixtures, not derived from one
/// another; callers must not assume consistency between them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentScore {
    /// -1.0 to +1.0
    pub score: f64,
    pub sentiment: Sentiment,
    /// 0.0 to 1.0
    pub confidence: f64,
}

/// Keyword list with per-keyword occurrence counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorKeywords {
    pub keywords: Vec<String>,
    pub frequency: HashMap<String, u32>,
}

/// Sector-level sentiment summary returned by GET /sector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorResponse {
    pub sector: String,
    pub sentiment: SentimentScore,
    pub keywords: SectorKeywords,
    pub news_count: u32,
    pub confidence: f64,
}

/// Market-wide indicator sentiments returned by GET /indicators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorsResponse {
    pub nikkei_sentiment: SentimentScore,
    pub fx_sentiment: SentimentScore,
    pub interest_sentiment: SentimentScore,
}
