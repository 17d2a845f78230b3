//! Image and video signals.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::config::VIDEO_EMBED_HOSTS;
use crate::utils::parse_selector_unsafe;

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMG_SELECTOR"));

static VIDEO_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("video", "VIDEO_SELECTOR"));

static IFRAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("iframe[src]", "IFRAME_SELECTOR"));

/// Counts all `<img>` elements.
pub fn count_images(document: &Html) -> usize {
    document.select(&IMG_SELECTOR).count()
}

/// Counts `<img>` elements that carry an `alt` attribute, including `alt=""`.
pub fn count_images_with_alt(document: &Html) -> usize {
    document
        .select(&IMG_SELECTOR)
        .filter(|element| element.value().attr("alt").is_some())
        .count()
}

/// Counts native `<video>` elements plus iframes embedding a known video host.
pub fn count_media_embeds(document: &Html) -> usize {
    let videos = document.select(&VIDEO_SELECTOR).count();
    let embeds = document
        .select(&IFRAME_SELECTOR)
        .filter(|element| {
            element
                .value()
                .attr("src")
                .is_some_and(|src| VIDEO_EMBED_HOSTS.iter().any(|host| src.contains(host)))
        })
        .count();
    videos + embeds
}
