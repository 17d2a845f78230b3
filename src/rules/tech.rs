//! Technical rules: mobile viewport and image ALT coverage.

use super::{CategoryRules, Message, Rule};
use crate::config::IMAGE_COUNT_THRESHOLD;
use crate::models::{Category, StructuralSignals};

fn viewport_missing(signals: &StructuralSignals) -> bool {
    signals.viewport.is_none()
}

/// Only flags pages where no image at all carries ALT text; partial coverage
/// is not reported.
fn images_missing_alt(signals: &StructuralSignals) -> bool {
    signals.image_count > IMAGE_COUNT_THRESHOLD && signals.images_with_alt_count == 0
}

fn images_missing_alt_message(signals: &StructuralSignals) -> String {
    format!("found {} images with missing ALT text", signals.image_count)
}

/// Mobile viewport and image ALT coverage.
pub static TECH_RULES: CategoryRules = CategoryRules {
    category: Category::Tech,
    groups: &[
        &[
            Rule {
                name: "viewport-missing",
                applies: viewport_missing,
                insight: Message::Text("mobile viewport missing"),
                action: Some("add viewport meta tag"),
            },
            Rule {
                name: "viewport-present",
                applies: |_| true,
                insight: Message::Text("viewport present but touch targets may be too small"),
                action: Some("run mobile usability audit"),
            },
        ],
        &[Rule {
            name: "images-missing-alt",
            applies: images_missing_alt,
            insight: Message::Format(images_missing_alt_message),
            action: None,
        }],
    ],
    default_action: "implement lazy loading for images to improve load metrics",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn with_images(image_count: usize, images_with_alt_count: usize) -> StructuralSignals {
        StructuralSignals {
            viewport: Some("width=device-width".to_string()),
            image_count,
            images_with_alt_count,
            ..StructuralSignals::default()
        }
    }

    #[test]
    fn test_viewport_present() {
        let outcome = TECH_RULES.evaluate(&with_images(0, 0));
        assert_eq!(
            outcome.insights,
            vec!["viewport present but touch targets may be too small"]
        );
        assert_eq!(outcome.action, "run mobile usability audit");
    }

    #[test]
    fn test_all_images_missing_alt_is_flagged() {
        let outcome = TECH_RULES.evaluate(&with_images(15, 0));
        assert_eq!(outcome.insights[1], "found 15 images with missing ALT text");
    }

    #[test]
    fn test_full_alt_coverage_is_not_flagged() {
        let outcome = TECH_RULES.evaluate(&with_images(15, 15));
        assert_eq!(outcome.insights.len(), 1);
    }

    #[test]
    fn test_partial_alt_coverage_is_not_flagged() {
        let outcome = TECH_RULES.evaluate(&with_images(15, 1));
        assert_eq!(outcome.insights.len(), 1);
    }

    #[test]
    fn test_image_threshold_is_exclusive() {
        let outcome = TECH_RULES.evaluate(&with_images(IMAGE_COUNT_THRESHOLD, 0));
        assert_eq!(outcome.insights.len(), 1);
    }
}
