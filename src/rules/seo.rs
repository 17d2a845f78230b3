//! Structure/SEO rules: title quality, meta description, H1 usage.

use super::{CategoryRules, Message, Rule};
use crate::config::SHORT_TITLE_THRESHOLD;
use crate::models::{Category, StructuralSignals};

fn title_len(signals: &StructuralSignals) -> Option<usize> {
    signals.title.as_deref().map(|title| title.chars().count())
}

fn title_missing(signals: &StructuralSignals) -> bool {
    signals.title.is_none()
}

fn title_short(signals: &StructuralSignals) -> bool {
    title_len(signals).is_some_and(|len| len < SHORT_TITLE_THRESHOLD)
}

fn title_too_short_message(signals: &StructuralSignals) -> String {
    format!(
        "title too short ({} chars) vs 55-60 char benchmark",
        title_len(signals).unwrap_or(0)
    )
}

fn description_missing(signals: &StructuralSignals) -> bool {
    signals.description.is_none()
}

fn no_h1(signals: &StructuralSignals) -> bool {
    signals.heading_count == 0
}

fn multiple_h1(signals: &StructuralSignals) -> bool {
    signals.heading_count > 1
}

/// Title quality, description presence and H1 structure.
pub static SEO_RULES: CategoryRules = CategoryRules {
    category: Category::Seo,
    groups: &[
        &[
            Rule {
                name: "title-missing",
                applies: title_missing,
                insight: Message::Text("title missing"),
                action: Some("add descriptive title with primary keywords"),
            },
            Rule {
                name: "title-short",
                applies: title_short,
                insight: Message::Format(title_too_short_message),
                action: Some("expand title with brand USP and secondary keywords"),
            },
            Rule {
                name: "title-adequate",
                applies: |_| true,
                insight: Message::Text("title length adequate but lacks emotional power words"),
                action: Some("A/B test title variants with higher sentiment"),
            },
        ],
        &[Rule {
            name: "description-missing",
            applies: description_missing,
            insight: Message::Text("meta description missing"),
            action: Some("write compelling meta description (150-160 chars)"),
        }],
        &[
            Rule {
                name: "no-h1",
                applies: no_h1,
                insight: Message::Text("no H1 found"),
                action: None,
            },
            Rule {
                name: "multiple-h1",
                applies: multiple_h1,
                insight: Message::Text("multiple H1s dilute relevance"),
                action: None,
            },
        ],
    ],
    default_action: "conduct full keyword gap analysis",
};
