//! Structural signal extraction.
//!
//! Parses raw markup with `scraper` (html5ever underneath, so malformed markup
//! is recovered rather than rejected) and derives the fixed signal record:
//! - Title and meta description
//! - H1 count and viewport directive
//! - Image and ALT coverage counts
//! - Native video and recognized video embeds

mod html;
mod media;

use scraper::Html;

use crate::models::StructuralSignals;

// Re-export public API
pub use html::{extract_heading_count, extract_meta_content, extract_title};
pub use media::{count_images, count_images_with_alt, count_media_embeds};

/// Extracts the structural signal record from raw markup.
///
/// Never fails: a document with no matching elements yields zero counts and
/// absent text fields.
pub fn extract_signals(markup: &str) -> StructuralSignals {
    let document = Html::parse_document(markup);
    extract_signals_from_document(&document)
}

/// Extracts the structural signal record from an already parsed document.
pub fn extract_signals_from_document(document: &Html) -> StructuralSignals {
    let signals = StructuralSignals {
        title: extract_title(document),
        description: extract_meta_content(document, "description"),
        heading_count: extract_heading_count(document),
        viewport: extract_meta_content(document, "viewport"),
        image_count: count_images(document),
        images_with_alt_count: count_images_with_alt(document),
        media_embed_count: count_media_embeds(document),
    };

    log::debug!(
        "Extracted signals: title={} description={} h1={} viewport={} images={} (alt={}) media={}",
        signals.title.is_some(),
        signals.description.is_some(),
        signals.heading_count,
        signals.viewport.is_some(),
        signals.image_count,
        signals.images_with_alt_count,
        signals.media_embed_count
    );

    signals
}
