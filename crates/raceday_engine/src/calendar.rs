//! Race URL collection from a calendar page.

use std::collections::BTreeSet;

use scraper::Html;

use crate::node::{select_all, select_first};
use crate::site::RACE_PATH_PREFIX;

// Containers scoping the search: race links elsewhere on the page
// (navigation, teasers) must not leak into the result.
const CONTENT: &str = "div.content";
const PAGE_CONTENT: &str = "div.page-content";

/// Collect every race URL in the calendar page's content subtree.
///
/// Hrefs are normalized by stripping one leading slash, deduplicated by
/// exact string equality and returned lexicographically sorted. If either
/// scoping container is missing the result is empty.
pub fn collect_race_urls(document: &Html) -> Vec<String> {
    let Some(content) = select_first(document.root_element(), CONTENT) else {
        return Vec::new();
    };
    let Some(page_content) = select_first(content, PAGE_CONTENT) else {
        return Vec::new();
    };

    let mut urls = BTreeSet::new();
    for anchor in select_all(page_content, "a") {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let relative = href.strip_prefix('/').unwrap_or(href);
        if relative.starts_with(RACE_PATH_PREFIX) {
            urls.insert(relative.to_string());
        }
    }
    urls.into_iter().collect()
}
