//! Reelboard - terminal dashboard and search client for a movie-recommendation service
//!
//! Fetch analytics and semantic search results over the backend's JSON API and
//! render them as charts, tables, and result cards.
//!
//! # Overview
//!
//! The backend exposes two endpoints; everything else here is presentation.
//! The transformation core turns backend payloads into declarative chart
//! specs and key/value tables, which two primitives consume: ratatui widgets
//! in the TUI and a Chart.js shim in the HTML report.
//!
//! # Dashboard slices
//!
//! | Slice | Chart |
//! |-------|-------|
//! | `top_genres_average_profit` | vertical bars, "M" ticks |
//! | `median_profit_margin_by_genre` | radar, "%" ticks |
//! | `revenue_profit_trend` | filled two-series lines |
//! | `metric_correlations` | horizontal bars pinned to [-1, 1] |
//! | `top_movies_by_profit_and_margin` | standout table |
//!
//! # Quick Start
//!
//! ```
//! use reelboard::chart::{self, palette};
//! use reelboard::model::GenreProfit;
//!
//! let slice = vec![GenreProfit { genre: "Sci-Fi".into(), average_profit: 212.4 }];
//! let spec = chart::profit_by_genre(&slice, &palette::BASE);
//! assert_eq!(spec.labels, ["Sci-Fi"]);
//! assert_eq!(spec.axis.suffix, "M");
//! ```

pub mod chart;
pub mod client;
pub mod config;
pub mod format;
pub mod model;
pub mod report;
pub mod table;
pub mod tui;

pub use chart::{ChartKind, ChartSpec, Palette};
pub use client::{ApiClient, ApiError};
pub use config::Config;
pub use format::{format_value, humanize_key};
pub use model::{
    AnalysisSummary, CorrelationPair, GenreMargin, GenreProfit, SearchRequest, SearchResponse,
    SearchResult, StandoutMovie, TrendPoint,
};
pub use table::{build_table, DetailTable, TableRow};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        // Verify core types are re-exported from crate root
        let _ = format_value(&serde_json::Value::Null);
        let _ = chart::palette::BASE;
    }
}
