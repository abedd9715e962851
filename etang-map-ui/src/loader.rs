//! Browser fetch of yearly datasets.

use anyhow::{anyhow, bail, Context};
use etang_core::geojson::Dataset;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

/// GET `url` and return the body as text.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no browser window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !response.ok() {
        bail!("GET {} returned HTTP {}", url, response.status());
    }
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| anyhow!("response body of {} is not text", url))
}

/// Fetch and validate one dataset.
///
/// Returns the raw GeoJSON (for the map source) with its parsed records.
pub async fn load_dataset(url: &str) -> anyhow::Result<(String, Dataset)> {
    log::info!("[Etangs] loader: fetching {}", url);
    let geojson = fetch_text(url).await?;
    let dataset = Dataset::from_geojson_str(&geojson)
        .with_context(|| format!("{} is not a valid pond dataset", url))?;
    Ok((geojson, dataset))
}
