use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Class token marking promotional blocks that must never reach segmentation.
pub const SPONSORED_CLASS: &str = "sponsored-content";
/// Class token of the table-based section headers used by the oldest issues.
pub const HEADER_TABLE_CLASS: &str = "header";
pub const PARAGRAPH_BREAK: &str = "\n\n";

pub static MULTI_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#" {2,}"#).expect("MULTI_SPACE regex"));
pub static KEY_SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^a-zA-Z0-9. -]+"#).expect("KEY_SPECIAL_CHARS regex"));

// Entity mention labels worth counting. Everything else (dates, quantities,
// ordinals, ...) is noise for this corpus.
pub static RELEVANT_MENTION_LABELS: Lazy<HashSet<&str>> = Lazy::new(|| {
    HashSet::from([
        "FAC",
        "GPE",
        "LOC",
        "NORP",
        "ORG",
        "PERSON",
        "PRODUCT",
        "EVENT",
        "WORK_OF_ART",
    ])
});
