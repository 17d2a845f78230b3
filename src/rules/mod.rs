//! Rule engine.
//!
//! Each category owns a static rule table. A table is a list of groups; a
//! group is a list of mutually exclusive rules evaluated in order, and the
//! first rule whose predicate holds fires. Every fired rule contributes its
//! insight, so insights accumulate across groups. The category action is the
//! action of the first fired rule that carries one, falling back to the
//! table's default action, so every category always ends with exactly one
//! action.

mod creative;
mod ppc;
mod seo;
mod tech;

use crate::models::{ActionSet, Category, InsightSet, StructuralSignals};

pub use creative::CREATIVE_RULES;
pub use ppc::{ppc_corpus, PPC_RULES};
pub use seo::SEO_RULES;
pub use tech::TECH_RULES;

/// Insight text, either fixed or derived from the signals.
pub enum Message {
    /// Fixed text.
    Text(&'static str),
    /// Text built from the signals, e.g. to cite a count.
    Format(fn(&StructuralSignals) -> String),
}

impl Message {
    /// Produces the insight string for `signals`.
    pub fn render(&self, signals: &StructuralSignals) -> String {
        match self {
            Message::Text(text) => (*text).to_string(),
            Message::Format(format) => format(signals),
        }
    }
}

/// A single (predicate, insight, action) entry.
pub struct Rule {
    /// Stable identifier used in logs and tests.
    pub name: &'static str,
    /// Predicate over the signal record.
    pub applies: fn(&StructuralSignals) -> bool,
    /// Insight emitted when the rule fires.
    pub insight: Message,
    /// Candidate action; only used if no earlier rule in the category set one.
    pub action: Option<&'static str>,
}

/// The rule table for one category.
pub struct CategoryRules {
    /// Category the table fills.
    pub category: Category,
    /// Ordered groups; at most one rule fires per group.
    pub groups: &'static [&'static [Rule]],
    /// Action used when no fired rule carries one.
    pub default_action: &'static str,
}

/// Outcome of evaluating one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOutcome {
    /// Insights of every fired rule, in table order.
    pub insights: Vec<String>,
    /// The single action for the category.
    pub action: String,
}

impl CategoryRules {
    /// Rules that fire for `signals`, in table order (at most one per group).
    pub fn fired<'a>(
        &'a self,
        signals: &'a StructuralSignals,
    ) -> impl Iterator<Item = &'a Rule> + 'a {
        self.groups
            .iter()
            .filter_map(move |group| group.iter().find(|rule| (rule.applies)(signals)))
    }

    /// Folds the fired rules into insights and one action.
    pub fn evaluate(&self, signals: &StructuralSignals) -> CategoryOutcome {
        let (insights, action) = self.fired(signals).fold(
            (Vec::new(), None),
            |(mut insights, action): (Vec<String>, Option<&'static str>), rule| {
                log::trace!("{} rule '{}' fired", self.category, rule.name);
                insights.push(rule.insight.render(signals));
                (insights, action.or(rule.action))
            },
        );

        CategoryOutcome {
            insights,
            action: action.unwrap_or(self.default_action).to_string(),
        }
    }
}

/// All category tables, in payload order.
pub static ALL_RULES: [&CategoryRules; 4] = [&SEO_RULES, &PPC_RULES, &CREATIVE_RULES, &TECH_RULES];

/// Evaluates every category against `signals`.
///
/// Pure and deterministic: the same record always produces the same output.
pub fn evaluate(signals: &StructuralSignals) -> (InsightSet, ActionSet) {
    let mut insights = InsightSet::default();
    let mut actions = ActionSet::default();

    for rules in ALL_RULES {
        let outcome = rules.evaluate(signals);
        insights.set(rules.category, outcome.insights);
        actions.set(rules.category, outcome.action);
    }

    (insights, actions)
}
