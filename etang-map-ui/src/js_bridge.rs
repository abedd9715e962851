//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The MapLibre and Chart.js glue lives in `assets/js/*.js`. The scripts are
//! evaluated once at startup and expose `window.etangMap` and
//! `window.etangChart`. Map calls made before the map has loaded are queued
//! on the JS side and replayed in order, so a filter never lands before the
//! data it applies to.

use crate::config::MapConfig;
use etang_core::palette::ColorTable;
use etang_core::style::{LayerPaints, MapFilters};
use wasm_bindgen::prelude::*;

static MAP_JS: &str = include_str!("../assets/js/etang-map.js");
static CHART_JS: &str = include_str!("../assets/js/class-chart.js");

/// Window property holding a dataset between Rust and `etangMap.setData`.
const PENDING_DATA_KEY: &str = "__etangPendingData";
/// Window property holding the pond click callback.
const POND_CLICK_KEY: &str = "__etangOnPondClick";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Etangs JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the bridge scripts at global scope. Call once at app startup.
pub fn init_bridge() {
    let all_js = [MAP_JS, CHART_JS].join("\n");
    let _ = js_sys::eval(&format!(
        "(0, eval)({});",
        serde_json::to_string(&all_js).unwrap_or_default()
    ));
}

fn set_window_property(key: &str, value: &JsValue) {
    if let Some(window) = web_sys::window() {
        if js_sys::Reflect::set(&window, &JsValue::from_str(key), value).is_err() {
            log::warn!("[Etangs] bridge: could not set window.{}", key);
        }
    }
}

/// Create the MapLibre map with the basemap and the three pond layers.
///
/// The JS side waits for `maplibregl` and the container element to exist.
pub fn create_map(container_id: &str, config: &MapConfig, colors: &ColorTable) {
    let config_json = serde_json::to_string(config).unwrap_or_default();
    let paints_json = serde_json::to_string(&LayerPaints::for_table(colors)).unwrap_or_default();
    call_js(&format!(
        "window.etangMap.create('{}', {}, {});",
        container_id, config_json, paints_json
    ));
}

/// Replace the pond source data with a new FeatureCollection.
///
/// The text is handed over through a window property rather than inlined in
/// the eval'd code; datasets are several megabytes.
pub fn set_dataset(geojson: &str) {
    set_window_property(PENDING_DATA_KEY, &JsValue::from_str(geojson));
    call_js("window.etangMap.setData();");
}

/// Apply the filters of one snapshot to every pond layer.
pub fn apply_filters(filters: &MapFilters) {
    for (layer_id, expression) in filters.layer_filters() {
        call_js(&format!(
            "window.etangMap.setFilter('{}', {});",
            layer_id, expression
        ));
    }
}

pub fn set_layer_visibility(layer_id: &str, visible: bool) {
    call_js(&format!(
        "window.etangMap.setVisibility('{}', {});",
        layer_id, visible
    ));
}

/// Register the handler called with the `pond_id` of a clicked pond.
pub fn on_pond_click(mut handler: impl FnMut(String) + 'static) {
    let closure = Closure::<dyn FnMut(String)>::new(move |pond_id: String| handler(pond_id));
    set_window_property(POND_CLICK_KEY, closure.as_ref());
    // lives for the whole page
    closure.forget();
}

/// Open a popup with a pond's time series at the last clicked position.
pub fn show_pond_popup(popup_json: &str) {
    call_js(&format!("window.etangMap.showPopup({});", popup_json));
}

/// Render (or update) the class-count bar chart.
pub fn render_class_chart(container_id: &str, bars_json: &str, config_json: &str) {
    call_js(&format!(
        "window.etangChart.render('{}', {}, {});",
        container_id, bars_json, config_json
    ));
}
