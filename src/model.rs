//! Wire types for the backend HTTP contract
//!
//! Every type here mirrors a JSON shape produced (or consumed) by the
//! movie-recommendation backend. Payloads are read-only once parsed: a render
//! cycle owns the value it fetched and throws it away on the next fetch.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One genre with its average profit, in currency-millions. May be negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreProfit {
    pub genre: String,
    pub average_profit: f64,
}

/// One genre with its median profit margin, as a fraction (0.42 = 42%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreMargin {
    pub genre: String,
    pub median_margin: f64,
}

/// Average revenue and profit for a single release year, in millions.
///
/// The backend emits these sorted by year; we trust that order and never
/// re-sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub release_year: i32,
    pub average_revenue: f64,
    pub average_profit: f64,
}

/// Correlation coefficient between two metrics, e.g. "Budget vs Revenue".
///
/// `value` lives in [-1, 1]; the sign decides the bar color downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub pair: String,
    pub value: f64,
}

/// A movie ranked high on both profit and margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandoutMovie {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub revenue: f64,
    pub profit: f64,
    pub margin: f64,
}

/// Full analytics payload from `GET /api/analysis`.
///
/// Field names match the wire keys exactly. Missing slices deserialize to
/// empty vectors so a partial backend still renders an (empty) dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    #[serde(default)]
    pub top_genres_average_profit: Vec<GenreProfit>,
    #[serde(default)]
    pub median_profit_margin_by_genre: Vec<GenreMargin>,
    #[serde(default)]
    pub revenue_profit_trend: Vec<TrendPoint>,
    #[serde(default)]
    pub metric_correlations: Vec<CorrelationPair>,
    #[serde(default)]
    pub top_movies_by_profit_and_margin: Vec<StandoutMovie>,
}

/// Body for `POST /api/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub prompt: String,
    pub top_k: usize,
    pub summarize: bool,
}

impl SearchRequest {
    /// The backend rejects top_k outside 1..=20, so clamp before sending.
    pub fn new(prompt: impl Into<String>, top_k: usize, summarize: bool) -> Self {
        Self {
            prompt: prompt.into(),
            top_k: top_k.clamp(1, 20),
            summarize,
        }
    }
}

/// One search hit. The `payload` is whatever per-movie metadata the backend
/// indexed; its keys and value types are unknown ahead of time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub release_year: Option<i64>,
    pub score: f64,
    #[serde(default)]
    pub payload: Map<String, Value>,
}

impl SearchResult {
    /// Display title, falling back when the backend sent none.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("<unknown>")
    }
}

/// Response for `POST /api/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Error body the backend attaches to non-2xx search responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analysis_summary_defaults_missing_slices() {
        let summary: AnalysisSummary =
            serde_json::from_value(json!({ "metric_correlations": [] })).unwrap();
        assert!(summary.top_genres_average_profit.is_empty());
        assert!(summary.revenue_profit_trend.is_empty());
        assert!(summary.top_movies_by_profit_and_margin.is_empty());
    }

    #[test]
    fn test_search_result_parses_arbitrary_payload() {
        let result: SearchResult = serde_json::from_value(json!({
            "title": "Interstellar",
            "score": 0.91,
            "payload": { "Budget": 165000000, "tags": ["space", "time"] }
        }))
        .unwrap();
        assert_eq!(result.display_title(), "Interstellar");
        assert_eq!(result.payload.len(), 2);
        assert!(result.genre.is_none());
    }

    #[test]
    fn test_search_result_without_title() {
        let result: SearchResult = serde_json::from_value(json!({ "score": 0.1 })).unwrap();
        assert_eq!(result.display_title(), "<unknown>");
        assert!(result.payload.is_empty());
    }

    #[test]
    fn test_search_request_clamps_top_k() {
        assert_eq!(SearchRequest::new("sci-fi", 0, false).top_k, 1);
        assert_eq!(SearchRequest::new("sci-fi", 99, false).top_k, 20);
        assert_eq!(SearchRequest::new("sci-fi", 5, true).top_k, 5);
    }
}
