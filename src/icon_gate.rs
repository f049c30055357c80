/// Decides whether the extension icon is clickable for a tab
use crate::site::is_target_site;
use crate::tab_data::{TabChangeInfo, TabInfo};

/// Enabled iff the URL is on eBay UK. Absent or unparseable URLs disable it.
pub fn should_enable_icon(url: Option<&str>) -> bool {
    url.is_some_and(is_target_site)
}

/// `tabs.onUpdated` fires many times per navigation; only a new URL or a
/// finished load can change the outcome
pub fn should_reevaluate(change: &TabChangeInfo) -> bool {
    change.url.is_some() || change.is_complete()
}

/// Icon decision for every tab that has an id
pub fn icon_states(tabs: &[TabInfo]) -> Vec<(i32, bool)> {
    tabs.iter()
        .filter_map(|tab| {
            tab.id
                .map(|id| (id, should_enable_icon(tab.url.as_deref())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_enable_icon() {
        assert!(should_enable_icon(Some("https://www.ebay.co.uk/itm/123")));
        assert!(should_enable_icon(Some("https://www.ebay.co.uk/sch/i.html?_nkw=a")));
        assert!(!should_enable_icon(Some("https://www.amazon.co.uk/dp/B000")));
        assert!(!should_enable_icon(Some("chrome://extensions")));
        assert!(!should_enable_icon(Some("::::")));
        assert!(!should_enable_icon(None));
    }

    #[test]
    fn test_should_reevaluate() {
        let url_change = TabChangeInfo {
            url: Some("https://www.ebay.co.uk/".to_string()),
            status: None,
        };
        let complete = TabChangeInfo {
            url: None,
            status: Some("complete".to_string()),
        };
        let title_only = TabChangeInfo::default();

        assert!(should_reevaluate(&url_change));
        assert!(should_reevaluate(&complete));
        assert!(!should_reevaluate(&title_only));
    }

    #[test]
    fn test_icon_states() {
        let tabs = vec![
            TabInfo::new(1, "https://www.ebay.co.uk/"),
            TabInfo::new(2, "https://www.amazon.co.uk/"),
            TabInfo { id: None, url: Some("https://www.ebay.co.uk/".to_string()) },
            TabInfo { id: Some(4), url: None },
        ];

        assert_eq!(icon_states(&tabs), vec![(1, true), (2, false), (4, false)]);
    }
}
