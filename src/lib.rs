/// eBay UK Filters - Chrome Extension for eBay search filters
/// Built with Rust + WASM + Yew

mod background;
pub mod filters;
mod host;
pub mod icon_gate;
pub mod reconciler;
pub mod site;
pub mod storage;
pub mod tab_data;
pub mod url_rewrite;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
}

// Re-export core URL functions for JavaScript access
#[wasm_bindgen]
pub fn is_search_page(url: &str) -> bool {
    site::is_search_page(url)
}

/// Rewrite `url` for a `{storage_key: bool}` settings object.
/// Returns `url` unchanged if the settings cannot be read.
#[wasm_bindgen]
pub fn apply_filters(url: &str, settings: JsValue) -> String {
    match serde_wasm_bindgen::from_value::<storage::FilterSettings>(settings) {
        Ok(settings) => url_rewrite::apply_filters_to_url(url, &settings),
        Err(e) => {
            log::warn!("Failed to parse settings: {:?}", e);
            url.to_string()
        }
    }
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Register the icon listeners in the background service worker
#[wasm_bindgen]
pub fn start_background() {
    background::start();
}
