/// Persisted filter settings for chrome.storage.local

use crate::filters::FILTERS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Toggle state keyed by storage key. A missing key means the filter is off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSettings {
    states: BTreeMap<String, bool>,
}

impl FilterSettings {
    pub fn new() -> Self {
        FilterSettings {
            states: BTreeMap::new(),
        }
    }

    /// Every known filter explicitly switched off
    pub fn cleared() -> Self {
        let mut settings = FilterSettings::new();
        for filter in FILTERS.iter() {
            settings.set(filter.storage_key, false);
        }
        settings
    }

    pub fn is_enabled(&self, key: &str) -> bool {
        self.states.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: &str, enabled: bool) {
        self.states.insert(key.to_string(), enabled);
    }

    /// Builder form of `set`
    pub fn with(mut self, key: &str, enabled: bool) -> Self {
        self.set(key, enabled);
        self
    }

    /// Overwrite our entries with every entry of `other`
    pub fn merge(&mut self, other: &FilterSettings) {
        for (key, enabled) in &other.states {
            self.states.insert(key.clone(), *enabled);
        }
    }

    /// Storage keys of the enabled filters, in filter table order
    pub fn enabled_keys(&self) -> Vec<&'static str> {
        FILTERS
            .iter()
            .map(|f| f.storage_key)
            .filter(|key| self.is_enabled(key))
            .collect()
    }
}
