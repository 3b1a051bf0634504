//! Shared base style for every chart
//!
//! The palette is a read-only value. Builders copy what they need into each
//! freshly built spec, so concurrent builds can share one palette and two
//! charts on the same screen can never leak overrides into each other.

/// Immutable style source for chart builders. All colors are `#rrggbb` hex;
/// the TUI widgets translate them to RGB cells and the HTML report passes
/// them through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub font_family: &'static str,
    pub text: &'static str,
    pub grid: &'static str,
    pub tooltip_bg: &'static str,
    pub tooltip_text: &'static str,
    /// Profit series / profit-by-genre bars.
    pub profit: &'static str,
    /// Revenue series in the trend chart.
    pub revenue: &'static str,
    /// Margin radar stroke.
    pub radar: &'static str,
    /// Non-negative correlation bars.
    pub positive: &'static str,
    /// Negative correlation bars.
    pub negative: &'static str,
}

/// The one palette the application ships with.
pub const BASE: Palette = Palette {
    font_family: "'Segoe UI', 'Helvetica Neue', Arial, sans-serif",
    text: "#e2e8f0",
    grid: "#334155",
    tooltip_bg: "#1e293b",
    tooltip_text: "#f8fafc",
    profit: "#60a5fa",
    revenue: "#fbbf24",
    radar: "#34d399",
    positive: "#4ade80",
    negative: "#f87171",
};
