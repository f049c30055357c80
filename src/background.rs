/// Background service worker: keeps the action icon enabled only on eBay UK

use crate::icon_gate::{icon_states, should_enable_icon, should_reevaluate};
use crate::tab_data::{TabChangeInfo, TabInfo};
use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

// Import JS bridge functions
#[wasm_bindgen(module = "/background.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryAllTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getTab(tab_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setActionEnabled(tab_id: i32, enabled: bool) -> Result<(), JsValue>;

    fn addTabUpdatedListener(callback: &js_sys::Function);

    fn addTabActivatedListener(callback: &js_sys::Function);

    fn addInstalledListener(callback: &js_sys::Function);
}

/// Register tab listeners and bring every open tab's icon up to date
pub fn start() {
    let on_updated = Closure::wrap(Box::new(move |tab_id: i32, change: JsValue, tab: JsValue| {
        let change: TabChangeInfo = serde_wasm_bindgen::from_value(change).unwrap_or_default();
        if !should_reevaluate(&change) {
            return;
        }

        let tab: TabInfo = serde_wasm_bindgen::from_value(tab).unwrap_or_default();
        spawn_local(async move {
            update_icon_state(tab_id, tab.url.as_deref()).await;
        });
    }) as Box<dyn Fn(i32, JsValue, JsValue)>);
    addTabUpdatedListener(on_updated.as_ref().unchecked_ref());
    on_updated.forget();

    let on_activated = Closure::wrap(Box::new(move |tab_id: i32| {
        spawn_local(async move {
            match get_tab(tab_id).await {
                Ok(tab) => update_icon_state(tab_id, tab.url.as_deref()).await,
                Err(e) => error!("Error getting tab info: {}", e),
            }
        });
    }) as Box<dyn Fn(i32)>);
    addTabActivatedListener(on_activated.as_ref().unchecked_ref());
    on_activated.forget();

    let on_installed = Closure::wrap(Box::new(move || {
        spawn_local(refresh_all_tabs());
    }) as Box<dyn Fn()>);
    addInstalledListener(on_installed.as_ref().unchecked_ref());
    on_installed.forget();

    // The worker restarts whenever the extension reloads
    spawn_local(refresh_all_tabs());
}

async fn update_icon_state(tab_id: i32, url: Option<&str>) {
    let enabled = should_enable_icon(url);
    debug!("Tab {} icon enabled: {}", tab_id, enabled);

    // The tab may have closed since the event fired
    if let Err(e) = setActionEnabled(tab_id, enabled).await {
        warn!("Failed to set icon state for tab {}: {:?}", tab_id, e);
    }
}

async fn refresh_all_tabs() {
    match query_all_tabs().await {
        Ok(tabs) => {
            for (tab_id, enabled) in icon_states(&tabs) {
                if let Err(e) = setActionEnabled(tab_id, enabled).await {
                    warn!("Failed to set icon state for tab {}: {:?}", tab_id, e);
                }
            }
        }
        Err(e) => error!("Error initializing tabs: {}", e),
    }
}

async fn query_all_tabs() -> Result<Vec<TabInfo>, String> {
    let tabs_js = queryAllTabs()
        .await
        .map_err(|e| format!("Failed to query tabs: {:?}", e))?;

    serde_wasm_bindgen::from_value(tabs_js).map_err(|e| format!("Failed to parse tabs: {:?}", e))
}

async fn get_tab(tab_id: i32) -> Result<TabInfo, String> {
    let tab_js = getTab(tab_id)
        .await
        .map_err(|e| format!("Failed to get tab: {:?}", e))?;

    serde_wasm_bindgen::from_value(tab_js).map_err(|e| format!("Failed to parse tab: {:?}", e))
}
