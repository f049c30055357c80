/// `ExtensionHost` backed by the chrome.* APIs through the popup JS bridge

use crate::reconciler::ExtensionHost;
use crate::storage::FilterSettings;
use crate::tab_data::TabInfo;
use log::warn;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateTabUrl(tab_id: i32, url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(items: JsValue) -> Result<(), JsValue>;
}

pub struct ChromeHost;

impl ExtensionHost for ChromeHost {
    async fn active_tab_url(&self) -> Result<Option<String>, String> {
        Ok(active_tab().await?.and_then(|tab| tab.url))
    }

    async fn navigate_active_tab(&self, url: &str) -> Result<(), String> {
        let Some(tab_id) = active_tab().await?.and_then(|tab| tab.id) else {
            warn!("No active tab to navigate");
            return Ok(());
        };

        updateTabUrl(tab_id, url)
            .await
            .map_err(|e| format!("Failed to update tab URL: {:?}", e))
    }

    async fn load_settings(&self, keys: &[&str]) -> Result<FilterSettings, String> {
        let keys_js = serde_wasm_bindgen::to_value(keys)
            .map_err(|e| format!("Failed to serialize keys: {:?}", e))?;

        let storage_js = getStorage(keys_js)
            .await
            .map_err(|e| format!("Failed to get storage: {:?}", e))?;

        if storage_js.is_null() || storage_js.is_undefined() {
            Ok(FilterSettings::new())
        } else {
            serde_wasm_bindgen::from_value(storage_js)
                .map_err(|e| format!("Failed to parse storage: {:?}", e))
        }
    }

    async fn save_settings(&self, settings: &FilterSettings) -> Result<(), String> {
        // chrome.storage wants a plain object, not a JS Map
        let items_js = settings
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| format!("Failed to serialize storage: {:?}", e))?;

        setStorage(items_js)
            .await
            .map_err(|e| format!("Failed to save storage: {:?}", e))
    }
}

async fn active_tab() -> Result<Option<TabInfo>, String> {
    let tab_js = getActiveTab()
        .await
        .map_err(|e| format!("Failed to query active tab: {:?}", e))?;

    if tab_js.is_null() || tab_js.is_undefined() {
        return Ok(None);
    }

    serde_wasm_bindgen::from_value(tab_js)
        .map(Some)
        .map_err(|e| format!("Failed to parse tab: {:?}", e))
}
