//! Browser `fetch` binding for the catalog document.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Response};

use peptides_products::Catalog;

/// Path of the static catalog document, relative to the page origin.
pub const CATALOG_PATH: &str = "/catalog.json";

/// Fetch and parse the catalog document.
pub async fn fetch_catalog() -> Result<Catalog, String> {
    let window = window().ok_or_else(|| "No window object".to_string())?;

    let response = JsFuture::from(window.fetch_with_str(CATALOG_PATH))
        .await
        .map_err(|e| format!("Request failed: {:?}", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| format!("Not a fetch response: {:?}", e))?;

    if !response.ok() {
        return Err(format!("Unexpected status {}", response.status()));
    }

    let body = response
        .text()
        .map_err(|e| format!("Failed to read body: {:?}", e))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| format!("Failed to read body: {:?}", e))?;
    let body = body
        .as_string()
        .ok_or_else(|| "Response body is not text".to_string())?;

    Catalog::from_json_str(&body).map_err(|e| e.to_string())
}
