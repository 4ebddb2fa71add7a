mod news;
mod sentiment;

pub use news::NewsArticle;
pub use sentiment::{IndicatorsResponse, SectorKeywords, SectorResponse, Sentiment, SentimentScore};
