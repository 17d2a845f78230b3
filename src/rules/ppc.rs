//! Acquisition/PPC rules, inferred from the title and description text.

use super::{CategoryRules, Message, Rule};
use crate::config::{FINANCE_KEYWORDS, SAAS_KEYWORDS};
use crate::models::{Category, StructuralSignals};

/// Lower-cased `title + " " + description`, with absent fields as empty text.
pub fn ppc_corpus(signals: &StructuralSignals) -> String {
    format!(
        "{} {}",
        signals.title.as_deref().unwrap_or_default(),
        signals.description.as_deref().unwrap_or_default()
    )
    .to_lowercase()
}

fn mentions_any(signals: &StructuralSignals, keywords: &[&str]) -> bool {
    let corpus = ppc_corpus(signals);
    keywords.iter().any(|keyword| corpus.contains(keyword))
}

fn finance_vertical(signals: &StructuralSignals) -> bool {
    mentions_any(signals, FINANCE_KEYWORDS)
}

fn saas_vertical(signals: &StructuralSignals) -> bool {
    mentions_any(signals, SAAS_KEYWORDS)
}

const GENERIC_ACTION: &str = "implement single-keyword ad groups to reduce waste";

/// Advertising vertical, finance before SaaS before generic.
pub static PPC_RULES: CategoryRules = CategoryRules {
    category: Category::Ppc,
    groups: &[&[
        Rule {
            name: "finance-keywords",
            applies: finance_vertical,
            insight: Message::Text("high-CPC finance keywords detected"),
            action: Some("shift budget toward B2B-targeted channels"),
        },
        Rule {
            name: "saas-keywords",
            applies: saas_vertical,
            insight: Message::Text("SaaS competitive bidding detected"),
            action: Some("target competitor-comparison keywords"),
        },
        Rule {
            name: "generic-keywords",
            applies: |_| true,
            insight: Message::Text("generic keyword strategy detected"),
            action: Some(GENERIC_ACTION),
        },
    ]],
    default_action: GENERIC_ACTION,
};
