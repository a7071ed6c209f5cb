//! Detail-page link discovery on the listing page.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Clickable dish containers carry their detail URL in this attribute.
static DETAIL_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"data-href="([^"]*)"#).expect("detail link pattern is valid"));

/// Returns the distinct detail-page URLs found on a listing page,
/// first-occurrence order preserved.
pub fn discover_links(html: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for caps in DETAIL_LINK.captures_iter(html) {
        let url = &caps[1];
        if !url.is_empty() && seen.insert(url.to_string()) {
            urls.push(url.to_string());
        }
    }

    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let html = r#"
            <div data-href="https://example.com/dish-1" class="item"></div>
            <div data-href="https://example.com/dish-1" class="item"></div>
        "#;
        assert_eq!(discover_links(html), vec!["https://example.com/dish-1"]);
    }

    #[test]
    fn test_first_occurrence_order() {
        let html = r#"
            <div data-href="https://example.com/b"></div>
            <div data-href="https://example.com/a"></div>
            <div data-href="https://example.com/b"></div>
        "#;
        assert_eq!(
            discover_links(html),
            vec!["https://example.com/b", "https://example.com/a"]
        );
    }

    #[test]
    fn test_no_markers_yields_empty() {
        assert!(discover_links("<html><body></body></html>").is_empty());
    }

    #[test]
    fn test_empty_attribute_skipped() {
        let html = r#"<div data-href=""></div>"#;
        assert!(discover_links(html).is_empty());
    }
}
