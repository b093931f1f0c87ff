use std::collections::HashMap;

use crate::constants;

use super::EntityCounts;

/// One entity occurrence as reported by the external recognition service.
#[derive(Clone, Debug)]
pub struct Mention {
    pub text: String,
    pub label: String,
}

/// Tallies raw surface forms, keeping only mention labels relevant to this
/// corpus.
pub fn count_mentions(mentions: &[Mention]) -> EntityCounts {
    let mut counts = HashMap::new();
    for mention in mentions {
        if constants::RELEVANT_MENTION_LABELS.contains(mention.label.as_str()) {
            *counts.entry(mention.text.clone()).or_insert(0) += 1;
        }
    }
    counts
}
