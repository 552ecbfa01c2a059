//! Поиск и фильтрация статических списков
//!
//! All list views share one policy: a case-insensitive substring search over
//! a fixed set of fields, combined (AND) with an equality filter that can be
//! switched off with the `"all"` option. Results keep the authored order.

use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;

/// Select value that disables an equality filter.
pub const ALL_CODE: &str = "all";

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Fields the free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// `needle_lower` must already be lowercase.
    fn matches_filter(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle_lower))
    }
}

/// Equality filter bound to a `<select>`: either everything or one value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectFilter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> SelectFilter<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            SelectFilter::All => true,
            SelectFilter::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr> SelectFilter<T> {
    /// Parses a select value; `"all"` maps to [`SelectFilter::All`].
    pub fn parse(value: &str) -> Result<Self, T::Err> {
        if value == ALL_CODE {
            Ok(SelectFilter::All)
        } else {
            value.parse().map(SelectFilter::Only)
        }
    }
}

impl<T: Display> SelectFilter<T> {
    /// Value to put back into the `<select>`.
    pub fn code(&self) -> String {
        match self {
            SelectFilter::All => ALL_CODE.to_string(),
            SelectFilter::Only(value) => value.to_string(),
        }
    }
}

/// Фильтрует список: поиск по подстроке И произвольный предикат
pub fn filter_records<T, P>(items: &[T], query: &str, predicate: P) -> Vec<T>
where
    T: Searchable + Clone,
    P: Fn(&T) -> bool,
{
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&needle) && predicate(item))
        .cloned()
        .collect()
}

/// Distinct values in first-seen order.
pub fn distinct_in_order<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        code: &'static str,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.code]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Alpha", code: "A-1" },
            Row { name: "Beta", code: "B-2" },
            Row { name: "alphabet", code: "C-3" },
        ]
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        assert_eq!(filter_records(&rows(), "", |_| true), rows());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let upper = filter_records(&rows(), "ALPHA", |_| true);
        let lower = filter_records(&rows(), "alpha", |_| true);
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 2);
    }

    #[test]
    fn test_any_field_matches() {
        let found = filter_records(&rows(), "b-2", |_| true);
        assert_eq!(found, vec![rows()[1].clone()]);
    }

    #[test]
    fn test_predicate_is_conjunctive() {
        let found = filter_records(&rows(), "alpha", |r| r.code != "A-1");
        assert_eq!(found, vec![rows()[2].clone()]);
    }

    #[test]
    fn test_select_filter_parse() {
        assert_eq!(SelectFilter::<String>::parse("all"), Ok(SelectFilter::All));
        assert_eq!(
            SelectFilter::<String>::parse("Fashion"),
            Ok(SelectFilter::Only("Fashion".to_string()))
        );
        assert_eq!(SelectFilter::Only("Fashion".to_string()).code(), "Fashion");
        assert_eq!(SelectFilter::<String>::All.code(), "all");
    }

    #[test]
    fn test_select_filter_accepts() {
        assert!(SelectFilter::<u8>::All.accepts(&3));
        assert!(SelectFilter::Only(3).accepts(&3));
        assert!(!SelectFilter::Only(3).accepts(&4));
    }

    #[test]
    fn test_distinct_in_order() {
        let values = ["b", "a", "b", "c", "a"];
        assert_eq!(distinct_in_order(values), vec!["b", "a", "c"]);
    }
}
