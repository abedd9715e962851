//! Data processing for pond snapshots.
//!
//! This crate turns the typed records of `etang-core` into what the views
//! display: class counts per date, the legend layout, chart bars, per-pond
//! series, and the selector that keeps map, legend and chart on the same date.

pub mod aggregate;
pub mod chart;
pub mod legend;
pub mod series;
pub mod session;
