/// Target site predicates for eBay UK
use url::Url;

/// Hostnames containing this are treated as eBay UK
pub const TARGET_DOMAIN: &str = "ebay.co.uk";

/// Path segment of the search results listing (e.g. `/sch/i.html`)
pub const SEARCH_PATH_SEGMENT: &str = "/sch/";

/// Extract the lowercased hostname from a URL
///
/// Returns `None` for empty, unparseable or host-less URLs
/// (e.g. `chrome://newtab` has a host, `about:blank` does not).
pub fn extract_hostname(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.to_lowercase();

    if host.is_empty() { None } else { Some(host) }
}

/// Whether the URL belongs to eBay UK
pub fn is_target_site(url: &str) -> bool {
    extract_hostname(url).is_some_and(|host| host.contains(TARGET_DOMAIN))
}

/// Whether the URL is an eBay UK search results page, the only kind of
/// page whose query string gets rewritten
pub fn is_search_page(url: &str) -> bool {
    if !is_target_site(url) {
        return false;
    }

    Url::parse(url.trim())
        .map(|parsed| parsed.path().contains(SEARCH_PATH_SEGMENT))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hostname() {
        assert_eq!(
            extract_hostname("https://www.ebay.co.uk/sch/i.html?_nkw=lego"),
            Some("www.ebay.co.uk".to_string())
        );
        assert_eq!(
            extract_hostname("https://WWW.EBAY.CO.UK/"),
            Some("www.ebay.co.uk".to_string())
        );
        assert_eq!(
            extract_hostname("http://localhost:3000/x"),
            Some("localhost".to_string())
        );
    }

    #[test]
    fn test_extract_hostname_edge_cases() {
        assert_eq!(extract_hostname(""), None);
        assert_eq!(extract_hostname("not-a-url"), None);
        assert_eq!(extract_hostname("about:blank"), None);
    }

    #[test]
    fn test_is_target_site() {
        assert!(is_target_site("https://www.ebay.co.uk/itm/1234"));
        assert!(is_target_site("https://ebay.co.uk/"));
        assert!(!is_target_site("https://www.ebay.com/sch/i.html"));
        assert!(!is_target_site("https://www.amazon.co.uk/s?k=widget"));
        assert!(!is_target_site("garbage"));
    }

    #[test]
    fn test_target_domain_in_path_is_not_enough() {
        assert!(!is_target_site("https://example.com/ebay.co.uk/sch/"));
    }

    #[test]
    fn test_is_search_page() {
        assert!(is_search_page("https://www.ebay.co.uk/sch/i.html?_nkw=widget"));
        assert!(is_search_page("https://www.ebay.co.uk/sch/261186/i.html"));
        assert!(!is_search_page("https://www.ebay.co.uk/itm/123456789"));
        assert!(!is_search_page("https://www.ebay.co.uk/"));
        assert!(!is_search_page("https://www.amazon.co.uk/sch/i.html"));
    }

    #[test]
    fn test_search_segment_in_query_does_not_qualify() {
        assert!(!is_search_page("https://www.ebay.co.uk/itm/1?ref=/sch/"));
    }
}
