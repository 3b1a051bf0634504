//! Declarative chart configuration
//!
//! A `ChartSpec` says *what* to draw, not how: kind, labels, series, and a
//! value-axis policy. Two charting primitives consume it — the ratatui widgets
//! in `tui::widgets::charts` and the browser script embedded by `report`. Each
//! spec is an independently owned structure; builders never hand out shared
//! references into the palette.

use serde::Serialize;

/// Which chart shape a primitive should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Radar,
    Line,
}

/// One data series within a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    /// Stroke/fill color as `#rrggbb`.
    pub color: String,
    /// Fill the area under the curve (line charts) or the polygon (radar).
    pub fill: bool,
    /// Curve smoothing factor for line charts; 0.0 means straight segments.
    pub tension: f64,
    pub values: Vec<f64>,
    /// Per-datapoint colors, overriding `color` bar by bar when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_colors: Option<Vec<String>>,
}

impl Series {
    /// A plain single-color series with no fill or smoothing.
    pub fn flat(name: impl Into<String>, color: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            fill: false,
            tension: 0.0,
            values,
            point_colors: None,
        }
    }
}

/// Tick policy for the value axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueAxis {
    /// Fixed lower bound; `None` lets the primitive fit the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Fixed upper bound; `None` lets the primitive fit the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Unit suffix appended to every tick label ("M", "%").
    pub suffix: String,
    /// Decimal places for tick labels.
    pub decimals: u8,
    /// Keep tick labels visible even when every value is zero.
    pub always_show_ticks: bool,
}

impl ValueAxis {
    pub fn fitted(suffix: impl Into<String>, decimals: u8) -> Self {
        Self {
            min: None,
            max: None,
            suffix: suffix.into(),
            decimals,
            always_show_ticks: false,
        }
    }

    pub fn fixed(min: f64, max: f64, suffix: impl Into<String>, decimals: u8) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            suffix: suffix.into(),
            decimals,
            always_show_ticks: false,
        }
    }

    /// Format one tick value under this axis policy.
    pub fn tick_label(&self, v: f64) -> String {
        format!("{:.*}{}", self.decimals as usize, v, self.suffix)
    }
}

/// Cosmetic style copied out of the palette at build time. Owned by the spec,
/// so overriding it for one chart cannot touch another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartStyle {
    pub font_family: String,
    pub text_color: String,
    pub grid_color: String,
    pub tooltip_bg: String,
    pub tooltip_text: String,
}

/// A complete, self-contained chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub axis: ValueAxis,
    pub style: ChartStyle,
}

impl ChartSpec {
    /// True when there is nothing to plot. Primitives render an empty frame
    /// for these rather than erroring.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
