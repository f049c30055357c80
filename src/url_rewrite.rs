/// Query string rewriting for eBay search URLs
///
/// Every function here is pure. A URL that fails to parse is handed back
/// unchanged rather than reported as an error.
use crate::filters::{FILTERS, FilterDefinition, find_by_param};
use crate::storage::FilterSettings;
use std::collections::HashSet;
use url::Url;
use url::form_urlencoded;

/// Rewrite the filter parameters of `url` to match `settings`
///
/// For every filter, the parameter is set to its activation value when the
/// filter is enabled and removed when it is not. Other parameters keep their
/// exact bytes and order. An enabled parameter that is already present keeps
/// its position (duplicates are dropped); newly enabled ones are appended in
/// filter table order.
///
/// Example:
/// - `https://www.ebay.co.uk/sch/i.html?_nkw=widget` with sold and UK enabled
///   → `https://www.ebay.co.uk/sch/i.html?_nkw=widget&LH_Sold=1&LH_PrefLoc=1`
pub fn apply_filters_to_url(url: &str, settings: &FilterSettings) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };

    let original: Vec<&str> = parsed
        .query()
        .unwrap_or("")
        .split('&')
        .filter(|segment| !segment.is_empty())
        .collect();

    let mut placed: HashSet<&'static str> = HashSet::new();
    let mut rewritten: Vec<String> = Vec::with_capacity(original.len() + FILTERS.len());

    for segment in &original {
        match segment_filter(segment) {
            None => rewritten.push(segment.to_string()),
            Some(filter) => {
                if settings.is_enabled(filter.storage_key) && placed.insert(filter.param) {
                    rewritten.push(filter.query_segment());
                }
            }
        }
    }

    for filter in FILTERS.iter() {
        if settings.is_enabled(filter.storage_key) && placed.insert(filter.param) {
            rewritten.push(filter.query_segment());
        }
    }

    if rewritten == original {
        return url.to_string();
    }

    if rewritten.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.set_query(Some(&rewritten.join("&")));
    }

    parsed.to_string()
}

/// Which filters `url` currently carries with their activation value
///
/// Only the first occurrence of a parameter counts, so
/// `LH_ItemCondition=3&LH_ItemCondition=4` reads as "new condition off".
pub fn filter_states_from_url(url: &str) -> FilterSettings {
    let mut settings = FilterSettings::new();

    let Ok(parsed) = Url::parse(url) else {
        return settings;
    };

    for filter in FILTERS.iter() {
        let active = parsed
            .query_pairs()
            .find(|(name, _)| name == filter.param)
            .is_some_and(|(_, value)| value == filter.value);
        settings.set(filter.storage_key, active);
    }

    settings
}

/// Whether `url` already reflects `settings` exactly
pub fn url_matches_settings(url: &str, settings: &FilterSettings) -> bool {
    apply_filters_to_url(url, settings) == url
}

/// The filter a raw `name=value` query segment belongs to, if any
fn segment_filter(segment: &str) -> Option<&'static FilterDefinition> {
    let (name, _) = form_urlencoded::parse(segment.as_bytes()).next()?;
    find_by_param(&name)
}
