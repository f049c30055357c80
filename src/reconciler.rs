/// Popup event handlers: keep persisted toggles and the search URL in step
///
/// Each handler is one async sequence of host calls. Storage is re-read
/// before every URL derivation because another popup may have written to it
/// in the meantime; concurrent writers race and the last write wins.
use crate::filters::{FilterDefinition, storage_keys};
use crate::site::{is_search_page, is_target_site};
use crate::storage::FilterSettings;
use crate::url_rewrite::{apply_filters_to_url, filter_states_from_url, url_matches_settings};
use log::{debug, info, warn};

/// Browser capabilities the popup needs
#[allow(async_fn_in_trait)]
pub trait ExtensionHost {
    /// URL of the active tab in the current window, if there is one
    async fn active_tab_url(&self) -> Result<Option<String>, String>;

    async fn navigate_active_tab(&self, url: &str) -> Result<(), String>;

    /// Read the given keys from persistent storage. Missing keys are omitted.
    async fn load_settings(&self, keys: &[&str]) -> Result<FilterSettings, String>;

    /// Write every entry of `settings`, leaving other keys untouched
    async fn save_settings(&self, settings: &FilterSettings) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupView {
    /// Active tab is not on eBay UK
    NotApplicable,
    Active(FilterSettings),
}

/// Result of a toggle or clear-all
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOutcome {
    /// Persisted state after the change
    pub settings: FilterSettings,
    /// URL the active tab was sent to, if it was rewritten
    pub navigated_to: Option<String>,
}

pub async fn load_persisted_states<H: ExtensionHost>(host: &H) -> Result<FilterSettings, String> {
    let mut settings = FilterSettings::cleared();
    settings.merge(&host.load_settings(&storage_keys()).await?);
    Ok(settings)
}

/// Decide what the popup shows when it opens
///
/// Toggles flipped while away from a search page are applied lazily here:
/// a search page that disagrees with the persisted state is rewritten.
pub async fn open_popup<H: ExtensionHost>(host: &H) -> Result<PopupView, String> {
    let Some(url) = host.active_tab_url().await? else {
        return Ok(PopupView::NotApplicable);
    };

    if !is_target_site(&url) {
        return Ok(PopupView::NotApplicable);
    }

    let settings = load_persisted_states(host).await?;

    if is_search_page(&url) && !url_matches_settings(&url, &settings) {
        info!(
            "Search page has filters {:?}, saved filters are {:?}, reloading",
            filter_states_from_url(&url).enabled_keys(),
            settings.enabled_keys()
        );
        // Navigation is fire-and-forget; the popup still shows the saved toggles
        if let Err(e) = host.navigate_active_tab(&apply_filters_to_url(&url, &settings)).await {
            warn!("Failed to apply saved filters: {}", e);
        }
    }

    Ok(PopupView::Active(settings))
}

pub async fn on_toggle<H: ExtensionHost>(
    host: &H,
    filter: &FilterDefinition,
    enabled: bool,
) -> Result<ToggleOutcome, String> {
    debug!("Toggling {} to {}", filter.param, enabled);

    let change = FilterSettings::new().with(filter.storage_key, enabled);
    host.save_settings(&change).await?;

    sync_active_tab(host).await
}

pub async fn on_clear_all<H: ExtensionHost>(host: &H) -> Result<ToggleOutcome, String> {
    debug!("Clearing all filters");

    host.save_settings(&FilterSettings::cleared()).await?;

    sync_active_tab(host).await
}

/// Toggle state to show after a failed toggle or clear-all
///
/// The write may have landed before the tab call failed, so storage is
/// re-read. `previous` is used only when storage cannot be read either.
pub async fn settings_after_failure<H: ExtensionHost>(
    host: &H,
    previous: FilterSettings,
) -> FilterSettings {
    match load_persisted_states(host).await {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Failed to re-read saved filters: {}", e);
            previous
        }
    }
}

/// Re-read the full persisted state and rewrite the active tab if it is a
/// search page. Other pages keep their URL.
async fn sync_active_tab<H: ExtensionHost>(host: &H) -> Result<ToggleOutcome, String> {
    let settings = load_persisted_states(host).await?;

    let Some(url) = host.active_tab_url().await? else {
        return Ok(ToggleOutcome { settings, navigated_to: None });
    };

    if !is_search_page(&url) {
        debug!("Not a search page, filters will apply on the next search");
        return Ok(ToggleOutcome { settings, navigated_to: None });
    }

    let new_url = apply_filters_to_url(&url, &settings);
    if new_url == url {
        return Ok(ToggleOutcome { settings, navigated_to: None });
    }

    host.navigate_active_tab(&new_url).await?;

    Ok(ToggleOutcome {
        settings,
        navigated_to: Some(new_url),
    })
}
