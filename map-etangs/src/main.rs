//! Monthly pond map.
//!
//! Shows every pond of a year's dataset colored by its bivariate class
//! (vegetation × water frequency), one month at a time. A slider walks the
//! dates, year tabs switch datasets, and dry ponds inside the dryness window
//! get a highlighted outline.
//!
//! Data flow:
//! 1. Selecting a year fetches `data/etangs_mensuel_{year}.geojson`.
//! 2. The records are indexed into a `Session` (counts per date, pond series).
//!    A dataset that yields no dates is rejected and the previous year stays.
//! 3. The GeoJSON goes to the MapLibre source, then the selector installs the
//!    session and emits filters, legend and chart for the first date.

use etang_core::record::PondId;
use etang_data::session::{Session, TemporalSelector};
use etang_map_ui::components::{
    ChartContainer, DrynessToggle, ErrorDisplay, LegendGrid, LoadingBanner, MapContainer,
    PanelHeader, TimeSlider, YearTabs, MAP_CONTAINER_ID,
};
use etang_map_ui::config::MapConfig;
use etang_map_ui::js_bridge;
use etang_map_ui::loader::load_dataset;
use etang_map_ui::sink::{BrowserSink, PondPopup};
use etang_map_ui::state::{displayed_year, needs_load, AppState};
use dioxus::prelude::*;

const MAPLIBRE_JS: &str = "https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.js";
const MAPLIBRE_CSS: &str = "https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.css";
const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.4/dist/chart.umd.min.js";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("etangs-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    web_sys::console::log_1(&"[Etangs] app mounted".into());

    let config = use_hook(MapConfig::default);
    let mut state = use_context_provider({
        let years = config.years.clone();
        move || AppState::new(&years)
    });

    // Bridge, map and click handler are set up once; the map outlives datasets.
    use_hook({
        let config = config.clone();
        move || {
            js_bridge::init_bridge();
            js_bridge::create_map(MAP_CONTAINER_ID, &config, config.palette.table());
            js_bridge::on_pond_click(move |pond_id| show_pond(state, &pond_id));
        }
    });

    // Load the selected year.
    use_effect({
        let config = config.clone();
        move || {
            let year = (state.selected_year)();
            if !needs_load(state.selector.peek().as_ref(), &year) {
                // Already on screen; any load still in flight is superseded.
                state.loading.set(false);
                return;
            }
            let url = config.data_url(&year);
            let config = config.clone();
            state.loading.set(true);
            spawn(async move {
                let result = load_session(&url, &year).await;
                // A later tab click supersedes this load.
                if *state.selected_year.peek() != year {
                    log::info!("[Etangs] dropping superseded load of {}", year);
                    return;
                }
                match result {
                    Ok((geojson, session)) => {
                        js_bridge::set_dataset(&geojson);
                        let mut sink = BrowserSink::new(state);
                        let mut slot = state.selector.write();
                        match slot.as_mut() {
                            Some(selector) => selector.install(session, &mut sink),
                            None => {
                                let selector = TemporalSelector::new(
                                    config.palette.table(),
                                    config.legend,
                                    config.dryness_window,
                                    session,
                                );
                                selector.refresh(&mut sink);
                                *slot = Some(selector);
                            }
                        }
                        drop(slot);
                        state.error_msg.set(None);
                    }
                    Err(e) => {
                        log::error!("[Etangs] loading {} failed: {:#}", year, e);
                        state.error_msg.set(Some(format!("{}: {:#}", year, e)));
                        // Back to the tab still on screen; no refetch since it is loaded.
                        let shown = displayed_year(state.selector.peek().as_ref()).map(str::to_string);
                        if let Some(shown) = shown {
                            state.selected_year.set(shown);
                        }
                    }
                }
                state.loading.set(false);
            });
        }
    });

    let subtitle = state
        .selector
        .read()
        .as_ref()
        .map(|selector| {
            format!(
                "{} ponds, {} dates",
                selector.session().ponds().len(),
                selector.len()
            )
        });

    rsx! {
        document::Stylesheet { href: MAPLIBRE_CSS }
        document::Script { src: MAPLIBRE_JS }
        document::Script { src: CHART_JS }

        div {
            style: "display: flex; height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #111; color: #ddd;",

            MapContainer {
                if (state.loading)() {
                    LoadingBanner {}
                }
            }

            div {
                style: "width: 320px; padding: 12px 16px; overflow-y: auto; border-left: 1px solid #333;",

                PanelHeader {
                    title: "Ponds: vegetation and water".to_string(),
                    subtitle: subtitle.unwrap_or_default(),
                }

                if let Some(err) = (state.error_msg)() {
                    ErrorDisplay { message: err }
                }

                YearTabs {}
                TimeSlider {}
                LegendGrid {}
                DrynessToggle {}
                ChartContainer {}
            }
        }
    }
}

/// Fetch a year and build its session. Nothing is applied to the views here.
async fn load_session(url: &str, year: &str) -> anyhow::Result<(String, Session)> {
    let (geojson, dataset) = load_dataset(url).await?;
    let session = Session::build(year, dataset.records)?;
    log::info!(
        "[Etangs] {}: {} records over {} dates",
        year,
        session.records().len(),
        session.timeline().len()
    );
    Ok((geojson, session))
}

fn show_pond(state: AppState, pond_id: &str) {
    let selector = state.selector.peek();
    let Some(selector) = selector.as_ref() else {
        return;
    };
    match selector.session().pond_series(&PondId::from(pond_id)) {
        Some(series) => {
            let popup = PondPopup::new(series, selector.colors());
            match serde_json::to_string(&popup) {
                Ok(json) => js_bridge::show_pond_popup(&json),
                Err(e) => log::warn!("[Etangs] popup for {}: {}", pond_id, e),
            }
        }
        None => log::debug!("[Etangs] no series for pond {}", pond_id),
    }
}
