/// The eBay search filters the popup can toggle

/// A popup toggle mapped to a search query parameter and a storage key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDefinition {
    /// Element id of the checkbox in the popup
    pub id: &'static str,
    pub label: &'static str,
    /// Query parameter eBay reads for this filter
    pub param: &'static str,
    /// Value that switches the filter on
    pub value: &'static str,
    /// Key under which the toggle state is persisted
    pub storage_key: &'static str,
}

impl FilterDefinition {
    /// The `param=value` pair as it appears in a query string
    pub fn query_segment(&self) -> String {
        format!("{}={}", self.param, self.value)
    }
}

pub static FILTERS: [FilterDefinition; 4] = [
    FilterDefinition {
        id: "toggle-sold",
        label: "Sold items",
        param: "LH_Sold",
        value: "1",
        storage_key: "filter_sold",
    },
    FilterDefinition {
        id: "toggle-new",
        label: "New condition",
        param: "LH_ItemCondition",
        value: "4",
        storage_key: "filter_new",
    },
    FilterDefinition {
        id: "toggle-uk",
        label: "UK only",
        param: "LH_PrefLoc",
        value: "1",
        storage_key: "filter_uk",
    },
    FilterDefinition {
        id: "toggle-bin",
        label: "Buy It Now",
        param: "LH_BIN",
        value: "1",
        storage_key: "filter_bin",
    },
];

pub fn find_by_id(id: &str) -> Option<&'static FilterDefinition> {
    FILTERS.iter().find(|f| f.id == id)
}

pub fn find_by_param(param: &str) -> Option<&'static FilterDefinition> {
    FILTERS.iter().find(|f| f.param == param)
}

/// All persistence keys, in table order
pub fn storage_keys() -> Vec<&'static str> {
    FILTERS.iter().map(|f| f.storage_key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_filter_table_is_unique() {
        let ids: HashSet<_> = FILTERS.iter().map(|f| f.id).collect();
        let params: HashSet<_> = FILTERS.iter().map(|f| f.param).collect();
        let keys: HashSet<_> = FILTERS.iter().map(|f| f.storage_key).collect();

        assert_eq!(ids.len(), FILTERS.len());
        assert_eq!(params.len(), FILTERS.len());
        assert_eq!(keys.len(), FILTERS.len());
    }

    #[test]
    fn test_query_segment() {
        let new_condition = find_by_id("toggle-new").unwrap();
        assert_eq!(new_condition.query_segment(), "LH_ItemCondition=4");
    }

    #[test]
    fn test_find_by_param() {
        assert_eq!(find_by_param("LH_BIN").map(|f| f.storage_key), Some("filter_bin"));
        assert_eq!(find_by_param("_nkw"), None);
        // Parameter names are case sensitive
        assert_eq!(find_by_param("lh_bin"), None);
    }

    #[test]
    fn test_storage_keys_order() {
        assert_eq!(
            storage_keys(),
            vec!["filter_sold", "filter_new", "filter_uk", "filter_bin"]
        );
    }
}
