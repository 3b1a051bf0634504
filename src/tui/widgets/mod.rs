//! Reusable TUI widgets

pub mod charts;
