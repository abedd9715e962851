//! Shared Dioxus components and MapLibre/Chart.js bridge for the pond map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the map and chart scripts via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `sink`: the browser implementation of the selector's view boundary
//! - `loader`: fetch of yearly GeoJSON datasets
//! - `components`: Reusable RSX components (slider, legend, containers, etc.)

pub mod components;
pub mod config;
pub mod js_bridge;
pub mod loader;
pub mod sink;
pub mod state;
