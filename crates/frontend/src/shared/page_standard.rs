//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a101_order--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! module that renders it.

/// List of records with search and filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Overview dashboard.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System / settings page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Free-form page (not found, placeholders).
pub const PAGE_CAT_CUSTOM: &str = "custom";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_CUSTOM,
];

/// Validate that a page id matches the `{entity}--{category}` format
/// and that the category is a known one.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a101_order--list"));
        assert!(is_valid_page_id("d100_operations--dashboard"));
        assert!(!is_valid_page_id("a101_order"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a101_order--detail"));
    }
}
