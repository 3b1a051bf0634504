//! Payload-to-chart transformation
//!
//! Four independent builders, one per dashboard visualization. Each takes the
//! relevant analysis slice plus the shared palette and returns a fresh
//! `ChartSpec`. An empty input slice is a valid input and yields a valid
//! empty chart, never an error.

use crate::model::{AnalysisSummary, CorrelationPair, GenreMargin, GenreProfit, TrendPoint};

use super::palette::Palette;
use super::spec::{ChartKind, ChartSpec, ChartStyle, Series, ValueAxis};

fn style_from(palette: &Palette) -> ChartStyle {
    ChartStyle {
        font_family: palette.font_family.to_string(),
        text_color: palette.text.to_string(),
        grid_color: palette.grid.to_string(),
        tooltip_bg: palette.tooltip_bg.to_string(),
        tooltip_text: palette.tooltip_text.to_string(),
    }
}

/// Categorical bar chart of average profit per genre, in input order.
/// Tick labels carry an "M" suffix with no decimals.
pub fn profit_by_genre(records: &[GenreProfit], palette: &Palette) -> ChartSpec {
    let labels = records.iter().map(|r| r.genre.clone()).collect();
    let values = records.iter().map(|r| r.average_profit).collect();

    ChartSpec {
        kind: ChartKind::Bar,
        title: "Top Genres by Average Profit".to_string(),
        labels,
        series: vec![Series::flat("Average Profit", palette.profit, values)],
        axis: ValueAxis::fitted("M", 0),
        style: style_from(palette),
    }
}

/// Radar chart of median profit margin per genre, scaled to percent.
/// Angular ticks stay visible even when every margin is zero.
pub fn margin_radar(records: &[GenreMargin], palette: &Palette) -> ChartSpec {
    let labels = records.iter().map(|r| r.genre.clone()).collect();
    let values = records.iter().map(|r| r.median_margin * 100.0).collect();

    let mut series = Series::flat("Median Margin", palette.radar, values);
    series.fill = true;

    let mut axis = ValueAxis::fitted("%", 0);
    axis.always_show_ticks = true;

    ChartSpec {
        kind: ChartKind::Radar,
        title: "Median Profit Margin by Genre".to_string(),
        labels,
        series: vec![series],
        axis,
        style: style_from(palette),
    }
}

/// Curve smoothing applied to both trend series.
const TREND_TENSION: f64 = 0.35;

/// Two-series filled line chart of average revenue and profit per release
/// year. The x labels follow the input order; this layer never re-sorts.
pub fn revenue_profit_trend(points: &[TrendPoint], palette: &Palette) -> ChartSpec {
    let labels = points.iter().map(|p| p.release_year.to_string()).collect();

    let mut revenue = Series::flat(
        "Average Revenue",
        palette.revenue,
        points.iter().map(|p| p.average_revenue).collect(),
    );
    revenue.fill = true;
    revenue.tension = TREND_TENSION;

    let mut profit = Series::flat(
        "Average Profit",
        palette.profit,
        points.iter().map(|p| p.average_profit).collect(),
    );
    profit.fill = true;
    profit.tension = TREND_TENSION;

    ChartSpec {
        kind: ChartKind::Line,
        title: "Revenue & Profit Trend".to_string(),
        labels,
        series: vec![revenue, profit],
        axis: ValueAxis::fitted("M", 0),
        style: style_from(palette),
    }
}

/// Horizontal bar chart of metric correlations. Color is a per-bar branch on
/// the sign of each coefficient, and the axis is pinned to [-1, 1] no matter
/// what the data spans.
pub fn correlation(pairs: &[CorrelationPair], palette: &Palette) -> ChartSpec {
    let labels = pairs.iter().map(|p| p.pair.clone()).collect();
    let values: Vec<f64> = pairs.iter().map(|p| p.value).collect();
    let point_colors = values
        .iter()
        .map(|&v| {
            if v >= 0.0 {
                palette.positive.to_string()
            } else {
                palette.negative.to_string()
            }
        })
        .collect();

    let mut series = Series::flat("Correlation", palette.positive, values);
    series.point_colors = Some(point_colors);

    ChartSpec {
        kind: ChartKind::HorizontalBar,
        title: "Metric Correlations".to_string(),
        labels,
        series: vec![series],
        axis: ValueAxis::fixed(-1.0, 1.0, "", 1),
        style: style_from(palette),
    }
}

/// All four dashboard specs for one analysis payload, in render order:
/// profit bars, margin radar, trend lines, correlation bars.
pub fn dashboard(summary: &AnalysisSummary, palette: &Palette) -> Vec<ChartSpec> {
    vec![
        profit_by_genre(&summary.top_genres_average_profit, palette),
        margin_radar(&summary.median_profit_margin_by_genre, palette),
        revenue_profit_trend(&summary.revenue_profit_trend, palette),
        correlation(&summary.metric_correlations, palette),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::palette::BASE;
    use proptest::prelude::*;

    fn genre_profit(genre: &str, profit: f64) -> GenreProfit {
        GenreProfit {
            genre: genre.to_string(),
            average_profit: profit,
        }
    }

    #[test]
    fn test_profit_by_genre_preserves_input_order() {
        let records = vec![genre_profit("Horror", 12.5), genre_profit("Sci-Fi", 210.0)];
        let spec = profit_by_genre(&records, &BASE);
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.labels, vec!["Horror", "Sci-Fi"]);
        assert_eq!(spec.series[0].values, vec![12.5, 210.0]);
        assert_eq!(spec.axis.suffix, "M");
        assert_eq!(spec.axis.decimals, 0);
    }

    #[test]
    fn test_empty_inputs_build_empty_specs() {
        assert!(profit_by_genre(&[], &BASE).is_empty());
        assert!(margin_radar(&[], &BASE).is_empty());
        assert!(revenue_profit_trend(&[], &BASE).is_empty());
        let spec = correlation(&[], &BASE);
        assert!(spec.is_empty());
        assert_eq!(spec.series[0].point_colors, Some(vec![]));
    }

    #[test]
    fn test_margin_radar_scales_to_percent() {
        let records = vec![GenreMargin {
            genre: "Drama".to_string(),
            median_margin: 0.425,
        }];
        let spec = margin_radar(&records, &BASE);
        assert_eq!(spec.kind, ChartKind::Radar);
        assert!((spec.series[0].values[0] - 42.5).abs() < f64::EPSILON);
        assert_eq!(spec.axis.suffix, "%");
        assert!(spec.axis.always_show_ticks);
        assert!(spec.series[0].fill);
    }

    #[test]
    fn test_trend_keeps_caller_order_and_two_series() {
        // Deliberately unsorted input: the builder must not reorder it.
        let points = vec![
            TrendPoint {
                release_year: 1999,
                average_revenue: 310.0,
                average_profit: 120.0,
            },
            TrendPoint {
                release_year: 1984,
                average_revenue: 80.0,
                average_profit: 22.0,
            },
        ];
        let spec = revenue_profit_trend(&points, &BASE);
        assert_eq!(spec.labels, vec!["1999", "1984"]);
        assert_eq!(spec.series.len(), 2);
        assert_ne!(spec.series[0].color, spec.series[1].color);
        assert!((spec.series[0].tension - TREND_TENSION).abs() < f64::EPSILON);
        assert_eq!(spec.series[1].values, vec![120.0, 22.0]);
    }

    #[test]
    fn test_correlation_axis_is_pinned() {
        let pairs = vec![CorrelationPair {
            pair: "Budget vs Revenue".to_string(),
            value: 0.3,
        }];
        let spec = correlation(&pairs, &BASE);
        assert_eq!(spec.kind, ChartKind::HorizontalBar);
        assert_eq!(spec.axis.min, Some(-1.0));
        assert_eq!(spec.axis.max, Some(1.0));
        assert_eq!(spec.axis.decimals, 1);
    }

    #[test]
    fn test_specs_are_independent_copies() {
        let records = vec![genre_profit("Action", 50.0)];
        let mut first = profit_by_genre(&records, &BASE);
        first.style.grid_color = "#ff0000".to_string();
        first.series[0].color = "#000000".to_string();

        let second = profit_by_genre(&records, &BASE);
        assert_eq!(second.style.grid_color, BASE.grid);
        assert_eq!(second.series[0].color, BASE.profit);
    }

    proptest! {
        // Sign decides the per-bar color, and the axis bounds never move.
        #[test]
        fn prop_correlation_color_by_sign(values in proptest::collection::vec(-1.0..=1.0f64, 0..12)) {
            let pairs: Vec<CorrelationPair> = values
                .iter()
                .enumerate()
                .map(|(i, &value)| CorrelationPair { pair: format!("pair {i}"), value })
                .collect();
            let spec = correlation(&pairs, &BASE);
            prop_assert_eq!(spec.axis.min, Some(-1.0));
            prop_assert_eq!(spec.axis.max, Some(1.0));

            let colors = spec.series[0].point_colors.as_ref().unwrap();
            for (&value, color) in values.iter().zip(colors) {
                let expected = if value >= 0.0 { BASE.positive } else { BASE.negative };
                prop_assert_eq!(color.as_str(), expected);
            }
        }
    }
}
