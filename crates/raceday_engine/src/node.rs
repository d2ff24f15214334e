//! Node-navigation helpers over a parsed document.
//!
//! The extractors only need a small surface: select-all, select-first,
//! stripped text, attribute-with-default, and a forward sibling walk.

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Selector};

/// All descendants of `scope` matching `pattern`, in document order.
///
/// Selector patterns are fixed constants of the engine; an invalid one is
/// treated as matching nothing rather than panicking.
pub(crate) fn select_all<'a>(scope: ElementRef<'a>, pattern: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(pattern) {
        Ok(selector) => scope.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// First descendant of `scope` matching `pattern`, if any.
pub(crate) fn select_first<'a>(scope: ElementRef<'a>, pattern: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(pattern).ok()?;
    scope.select(&selector).next()
}

/// Text content of an element and its descendants, with surrounding
/// whitespace stripped and interior whitespace runs collapsed to one
/// space.
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Attribute value, or the empty string when the attribute is absent.
pub(crate) fn attr_of(element: ElementRef<'_>, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}

/// Walk forward through the sibling chain of `start` until an element with
/// tag `tag` whose class attribute contains `class_fragment` is found.
///
/// Section headings and their content lists are siblings on the source
/// pages, separated by an unknown number of text nodes and decorative
/// elements, which no descendant selector can express. The walk terminates
/// at the end of the sibling chain.
pub(crate) fn next_sibling_with_class<'a>(
    start: ElementRef<'a>,
    tag: &str,
    class_fragment: &str,
) -> Option<ElementRef<'a>> {
    let start: NodeRef<'a, Node> = *start;
    for sibling in start.next_siblings() {
        let Some(element) = ElementRef::wrap(sibling) else {
            continue;
        };
        if element.value().name() != tag {
            continue;
        }
        let classes = element.value().attr("class").unwrap_or_default();
        if classes.contains(class_fragment) {
            return Some(element);
        }
    }
    None
}
