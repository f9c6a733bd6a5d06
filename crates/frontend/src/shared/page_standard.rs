//! Page category constants.
//!
//! Every screen declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a002_student--list"`) and `data-page-category` with one of the
//! constants below.

/// List of records with filters and inline actions.
pub const PAGE_CAT_LIST: &str = "list";

/// Role dashboard or analytics view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Onboarding form.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Login and other pages outside the shell.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a002_student--list"));
        assert!(!is_valid_page_id("a002_student"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn test_page_id_category_is_known() {
        let id = "d400_super_admin--dashboard";
        let category = id.split_once("--").map(|(_, c)| c);
        assert!(category.is_some_and(|c| ALL_CATEGORIES.contains(&c)));
    }
}
