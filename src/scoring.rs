//! Health score computation.
//!
//! The score is a function of the signals alone, independent of the insight
//! text: start at `BASE_SCORE`, subtract a fixed penalty per missing
//! fundamental, and floor at zero.

use crate::config::{
    BASE_SCORE, IMPROVEMENT_CAP, MAX_SCORE, MISSING_DESCRIPTION_PENALTY, MISSING_H1_PENALTY,
    MISSING_TITLE_PENALTY, MISSING_VIEWPORT_PENALTY,
};
use crate::models::StructuralSignals;

/// Score and capped improvement delta for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Health score.
    pub score: u32,
    /// `min(100 - score, 20)`.
    pub improvement: u32,
}

/// Computes the health score and improvement delta.
pub fn score(signals: &StructuralSignals) -> Score {
    let penalties = [
        (signals.title.is_none(), MISSING_TITLE_PENALTY),
        (signals.description.is_none(), MISSING_DESCRIPTION_PENALTY),
        (signals.viewport.is_none(), MISSING_VIEWPORT_PENALTY),
        (signals.heading_count == 0, MISSING_H1_PENALTY),
    ];
    let deducted: u32 = penalties
        .iter()
        .filter(|(missing, _)| *missing)
        .map(|(_, penalty)| penalty)
        .sum();

    let score = BASE_SCORE.saturating_sub(deducted).min(MAX_SCORE);
    let improvement = (MAX_SCORE - score).min(IMPROVEMENT_CAP);

    Score { score, improvement }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn complete() -> StructuralSignals {
        StructuralSignals {
            title: Some("Title".to_string()),
            description: Some("Description".to_string()),
            heading_count: 1,
            viewport: Some("width=device-width".to_string()),
            ..StructuralSignals::default()
        }
    }

    #[test]
    fn test_empty_page_score() {
        let result = score(&StructuralSignals::default());
        assert_eq!(result.score, 45);
        assert_eq!(result.improvement, 20);
    }

    #[test]
    fn test_complete_page_score() {
        assert_eq!(
            score(&complete()),
            Score {
                score: 85,
                improvement: 15
            }
        );
    }

    #[test]
    fn test_individual_penalties() {
        let no_title = StructuralSignals {
            title: None,
            ..complete()
        };
        assert_eq!(score(&no_title).score, 75);

        let no_viewport = StructuralSignals {
            viewport: None,
            ..complete()
        };
        assert_eq!(score(&no_viewport).score, 70);

        let no_h1 = StructuralSignals {
            heading_count: 0,
            ..complete()
        };
        assert_eq!(score(&no_h1).score, 80);
        assert_eq!(score(&no_h1).improvement, 20);
    }

    #[test]
    fn test_empty_texts_are_not_penalized() {
        let empty_texts = StructuralSignals {
            description: Some(String::new()),
            viewport: Some(String::new()),
            ..complete()
        };
        assert_eq!(score(&empty_texts).score, 85);
    }

    prop_compose! {
        fn arb_signals()(
            title in prop::option::of("[a-z]{0,10}"),
            description in prop::option::of("[a-z]{0,10}"),
            heading_count in 0usize..4,
            viewport in prop::option::of("[a-z]{0,10}"),
        ) -> StructuralSignals {
            StructuralSignals { title, description, heading_count, viewport, ..StructuralSignals::default() }
        }
    }

    proptest! {
        #[test]
        fn test_score_bounds(signals in arb_signals()) {
            let result = score(&signals);
            prop_assert!(result.score <= BASE_SCORE);
            prop_assert!(result.improvement <= IMPROVEMENT_CAP);
            prop_assert_eq!(result.improvement, (100 - result.score).min(20));
        }

        #[test]
        fn test_score_is_deterministic(signals in arb_signals()) {
            prop_assert_eq!(score(&signals), score(&signals));
        }

        #[test]
        fn test_present_fundamentals_score_full(heading_count in 1usize..10) {
            let signals = StructuralSignals { heading_count, ..complete() };
            prop_assert_eq!(score(&signals), Score { score: 85, improvement: 15 });
        }
    }
}
