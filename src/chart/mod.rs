//! Chart configuration layer: palette, declarative specs, and the four
//! payload-to-spec builders.

pub mod builders;
pub mod palette;
pub mod spec;

pub use builders::{correlation, dashboard, margin_radar, profit_by_genre, revenue_profit_trend};
pub use palette::{Palette, BASE};
pub use spec::{ChartKind, ChartSpec, ChartStyle, Series, ValueAxis};
