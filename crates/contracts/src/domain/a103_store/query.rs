use super::aggregate::Store;
use crate::shared::filter::{distinct_in_order, filter_records, SelectFilter};

/// Stores view filter state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreQuery {
    pub search: String,
    pub category: SelectFilter<String>,
}

impl StoreQuery {
    pub fn new(search: impl Into<String>, category: SelectFilter<String>) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }
}

/// Фильтрует магазины по названию/району и категории
pub fn filter_stores(stores: &[Store], query: &StoreQuery) -> Vec<Store> {
    filter_records(stores, &query.search, |s| query.category.accepts(&s.category))
}

/// Categories present in the list, in first-seen order.
pub fn store_categories(stores: &[Store]) -> Vec<String> {
    distinct_in_order(stores.iter().map(|s| s.category.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a103_store::seed::{find_store, stores};

    fn ids(list: &[Store]) -> Vec<&str> {
        list.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        assert_eq!(
            store_categories(stores()),
            vec!["Electronics", "Food & Beverage", "Home & Lifestyle", "Fashion", "Stationery"]
        );
    }

    #[test]
    fn test_electronics_filter() {
        let query = StoreQuery::new("", SelectFilter::Only("Electronics".to_string()));
        let result = filter_stores(stores(), &query);
        assert_eq!(ids(&result), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_search_by_district() {
        let result = filter_stores(stores(), &StoreQuery::new("GINZA", SelectFilter::All));
        assert_eq!(ids(&result), vec!["3", "7", "8"]);
    }

    #[test]
    fn test_search_does_not_look_at_address() {
        // "Jinnan" only appears in the address of store 1
        let result = filter_stores(stores(), &StoreQuery::new("jinnan", SelectFilter::All));
        assert!(result.is_empty());
        assert!(find_store("1").unwrap().address.contains("Jinnan"));
    }

    #[test]
    fn test_search_and_category_combine() {
        let query = StoreQuery::new("ginza", SelectFilter::Only("Fashion".to_string()));
        assert_eq!(ids(&filter_stores(stores(), &query)), vec!["7"]);
    }

    #[test]
    fn test_default_query_returns_everything() {
        assert_eq!(filter_stores(stores(), &StoreQuery::default()), stores().to_vec());
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let query = StoreQuery::new("", SelectFilter::Only("Books".to_string()));
        assert!(filter_stores(stores(), &query).is_empty());
    }
}
