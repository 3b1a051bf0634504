//! TUI views

pub mod dashboard;
pub mod search;
