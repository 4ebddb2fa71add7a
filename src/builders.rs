use chrono::Utc;
use std::collections::HashMap;

use crate::models::{
    IndicatorsResponse, NewsArticle, SectorKeywords, SectorResponse, Sentiment, SentimentScore,
};

const SOURCE: &str = "Mock News";
const PROVIDER: &str = "MockProvider";

/// Seconds between consecutive article timestamps
const ARTICLE_SPACING_SECS: i64 = 3600;

/// Build the canned article list for a symbol.
///
/// Always returns exactly 3 articles, spaced one hour apart starting
/// from the current time. `days_back` is accepted for client-interface
/// compatibility but does not affect the output; downstream tests rely
/// on the fixed shape regardless of the requested window.
pub fn build_news_articles(symbol: &str, _days_back: i64) -> Vec<NewsArticle> {
    let base = Utc::now().timestamp();
    let titles = [
        format!("{symbol} 決算発表、増収増益"),
        format!("{symbol} 新製品を発表、市場の期待高まる"),
        format!("{symbol} 提携発表、事業シナジーに期待"),
    ];
    titles
        .into_iter()
        .enumerate()
        .map(|(i, title)| NewsArticle {
            title,
            summary: format!("{symbol} に関する好材料ニュースの要約 #{}", i + 1),
            published: base - i as i64 * ARTICLE_SPACING_SECS,
            source: SOURCE.to_string(),
            url: format!("http://localhost/mock/{symbol}/{}", i + 1),
            provider: PROVIDER.to_string(),
        })
        .collect()
}

/// Build the canned sector summary, echoing back the requested sector.
pub fn build_sector_response(sector: &str) -> SectorResponse {
    SectorResponse {
        sector: sector.to_string(),
        sentiment: SentimentScore {
            score: 0.35,
            sentiment: Sentiment::Positive,
            confidence: 0.8,
        },
        keywords: SectorKeywords {
            keywords: vec!["ai".to_string(), "software".to_string(), "cloud".to_string()],
            frequency: HashMap::from([
                ("ai".to_string(), 10),
                ("software".to_string(), 8),
                ("cloud".to_string(), 7),
            ]),
        },
        news_count: 12,
        confidence: 0.8,
    }
}

/// Build the canned market indicator sentiments.
pub fn build_indicators_response() -> IndicatorsResponse {
    IndicatorsResponse {
        nikkei_sentiment: SentimentScore {
            score: 0.1,
            sentiment: Sentiment::Neutral,
            confidence: 0.5,
        },
        fx_sentiment: SentimentScore {
            score: -0.2,
            sentiment: Sentiment::Negative,
            confidence: 0.6,
        },
        interest_sentiment: SentimentScore {
            score: 0.3,
            sentiment: Sentiment::Positive,
            confidence: 0.7,
        },
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_articles_count_and_templates() {
        let articles = build_news_articles("7203.T", 7);
        assert_eq!(articles.len(), 3);
        for (i, article) in articles.iter().enumerate() {
            assert!(article.title.contains("7203.T"));
            assert!(article.summary.contains("7203.T"));
            assert!(article.summary.ends_with(&format!("#{}", i + 1)));
            assert_eq!(article.source, "Mock News");
            assert_eq!(article.provider, "MockProvider");
            assert_eq!(article.url, format!("http://localhost/mock/7203.T/{}", i + 1));
        }
    }

    #[test]
    fn test_news_articles_hourly_spacing() {
        let articles = build_news_articles("TEST.T", 7);
        for pair in articles.windows(2) {
            assert_eq!(pair[0].published - pair[1].published, 3600);
        }
        let now = Utc::now().timestamp();
        assert!((now - articles[0].published).abs() < 5);
    }

    #[test]
    fn test_days_back_does_not_change_shape() {
        let a = build_news_articles("TEST.T", 1);
        let b = build_news_articles("TEST.T", 365);
        assert_eq!(a.len(), b.len());
        assert_eq!(
            a[0].published - a[2].published,
            b[0].published - b[2].published
        );
    }

    #[test]
    fn test_sector_response_echoes_sector() {
        let resp = build_sector_response("finance");
        assert_eq!(resp.sector, "finance");
        assert_eq!(resp.news_count, 12);
        assert_eq!(resp.keywords.keywords, vec!["ai", "software", "cloud"]);
        assert_eq!(resp.keywords.frequency["ai"], 10);
        assert_eq!(resp.keywords.frequency["software"], 8);
        assert_eq!(resp.keywords.frequency["cloud"], 7);
        assert_eq!(resp.sentiment.sentiment, Sentiment::Positive);
        assert!((resp.sentiment.score - 0.35).abs() < f64::EPSILON);
    }

    #[test]
    fn test_indicators_canned_values() {
        let resp = build_indicators_response();
        assert_eq!(resp.nikkei_sentiment.sentiment, Sentiment::Neutral);
        assert!((resp.nikkei_sentiment.score - 0.1).abs() < f64::EPSILON);
        assert!((resp.nikkei_sentiment.confidence - 0.5).abs() < f64::EPSILON);
        assert_eq!(resp.fx_sentiment.sentiment, Sentiment::Negative);
        assert!((resp.fx_sentiment.score + 0.2).abs() < f64::EPSILON);
        assert_eq!(resp.interest_sentiment.sentiment, Sentiment::Positive);
        assert!((resp.interest_sentiment.confidence - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sentiment_serializes_lowercase() {
        let json = serde_json::to_value(build_indicators_response()).unwrap();
        assert_eq!(json["nikkei_sentiment"]["sentiment"], "neutral");
        assert_eq!(json["fx_sentiment"]["sentiment"], "negative");
        assert_eq!(json["interest_sentiment"]["sentiment"], "positive");
    }
}
