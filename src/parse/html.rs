//! Document-level extraction: title, meta directives and headings.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("title", "TITLE_SELECTOR"));

static NAMED_META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[name]", "NAMED_META_SELECTOR"));

static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("h1", "H1_SELECTOR"));

/// Extracts the page title.
///
/// Returns the trimmed text of the first `<title>` element, or `None` if there
/// is no such element or its text is blank.
pub fn extract_title(document: &Html) -> Option<String> {
    let element = document.select(&TITLE_SELECTOR).next()?;
    let title = element.text().collect::<String>().trim().to_string();
    log::trace!("Extracted title text: '{}' (length: {})", title, title.len());
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Returns the `content` attribute of the first `<meta>` whose `name` is exactly `name`.
///
/// The name comparison is case-sensitive. The content is returned as authored,
/// so an empty `content=""` is `Some("")`. A matching tag without a `content`
/// attribute yields `None`.
pub fn extract_meta_content(document: &Html, name: &str) -> Option<String> {
    document
        .select(&NAMED_META_SELECTOR)
        .find(|element| element.value().attr("name") == Some(name))
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
}

/// Counts the `<h1>` elements in the document.
pub fn extract_heading_count(document: &Html) -> usize {
    document.select(&H1_SELECTOR).count()
}
