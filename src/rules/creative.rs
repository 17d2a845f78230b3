//! Creative rules: video presence.

use super::{CategoryRules, Message, Rule};
use crate::models::{Category, StructuralSignals};

fn no_video(signals: &StructuralSignals) -> bool {
    signals.media_embed_count == 0
}

const EXPLAINER_ACTION: &str = "create a short explainer video";

/// Video presence and call-to-action.
pub static CREATIVE_RULES: CategoryRules = CategoryRules {
    category: Category::Creative,
    groups: &[&[
        Rule {
            name: "no-video",
            applies: no_video,
            insight: Message::Text("no video content detected"),
            action: Some(EXPLAINER_ACTION),
        },
        Rule {
            name: "video-without-cta",
            applies: |_| true,
            insight: Message::Text("video detected but lacks a clear call-to-action"),
            action: Some("add inline lead-capture to video"),
        },
    ]],
    default_action: EXPLAINER_ACTION,
};
