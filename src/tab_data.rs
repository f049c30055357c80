/// Tab payloads received from the chrome.tabs API
use serde::{Deserialize, Serialize};

/// The subset of a chrome `Tab` we read
///
/// `id` and `url` are both optional in the Chrome API: devtools windows have
/// no id, and `url` is missing without host permission for the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
}

impl TabInfo {
    pub fn new(id: i32, url: &str) -> TabInfo {
        TabInfo {
            id: Some(id),
            url: Some(url.to_string()),
        }
    }
}

/// `changeInfo` passed to `chrome.tabs.onUpdated`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabChangeInfo {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TabChangeInfo {
    pub fn is_complete(&self) -> bool {
        self.status.as_deref() == Some("complete")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_info_creation() {
        let tab = TabInfo::new(7, "https://www.ebay.co.uk/");

        assert_eq!(tab.id, Some(7));
        assert_eq!(tab.url.as_deref(), Some("https://www.ebay.co.uk/"));
    }

    #[test]
    fn test_deserialize_chrome_tab() {
        // Chrome tabs carry many more fields than we read
        let json = r#"{"id":3,"index":0,"windowId":1,"url":"https://www.ebay.co.uk/sch/i.html","title":"eBay","pinned":false}"#;
        let tab: TabInfo = serde_json::from_str(json).unwrap();

        assert_eq!(tab, TabInfo::new(3, "https://www.ebay.co.uk/sch/i.html"));
    }

    #[test]
    fn test_deserialize_tab_without_url() {
        let tab: TabInfo = serde_json::from_str(r#"{"id":9}"#).unwrap();

        assert_eq!(tab.id, Some(9));
        assert_eq!(tab.url, None);
    }

    #[test]
    fn test_change_info_status() {
        let loading: TabChangeInfo = serde_json::from_str(r#"{"status":"loading"}"#).unwrap();
        let complete: TabChangeInfo = serde_json::from_str(r#"{"status":"complete"}"#).unwrap();

        assert!(!loading.is_complete());
        assert!(complete.is_complete());
        assert!(!TabChangeInfo::default().is_complete());
    }
}
