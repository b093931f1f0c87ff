pub mod aliases;
mod mentions;


pub use aliases::AliasTable;
pub use mentions::{count_mentions, Mention};

use std::collections::HashMap;

use crate::constants;
use crate::util::Util;

/// Entity counts keyed by surface form.
pub type EntityCounts = HashMap<String, u64>;

/// Folds surface-form variants of entity names into canonical keys,
/// summing counts on merge:
/// - trim surrounding whitespace
/// - strip possessive 's
/// - strip characters outside `[A-Za-z0-9. -]`
/// - strip a leading "the " from multi-word keys
/// - title-case multi-word ALL CAPS keys
/// - substitute known aliases with their canonical name
///
/// The passes run strictly in this order; each one re-scans the keys fresh,
/// so a merge target created mid-pass is not revisited within that pass.
/// Never fails: keys no rule applies to pass through unchanged. The total
/// count is conserved, though the alias pass may park it under canonical
/// keys that never occurred literally.
pub fn canonicalize(mut counts: EntityCounts, aliases: &AliasTable) -> EntityCounts {
    merge_pass(&mut counts, trim_rule);
    merge_pass(&mut counts, possessive_rule);
    merge_pass(&mut counts, special_chars_rule);
    merge_pass(&mut counts, leading_article_rule);
    merge_pass(&mut counts, spaced_uppercase_rule);
    apply_aliases(&mut counts, aliases);
    counts
}

/// Applies one rewrite rule to a snapshot of the current keys. The snapshot
/// is sorted so chained merges resolve the same way on every run.
fn merge_pass<F>(counts: &mut EntityCounts, rule: F)
where
    F: Fn(&str) -> Option<String>,
{
    let mut keys: Vec<String> = counts.keys().cloned().collect();
    keys.sort_unstable();

    for key in keys {
        if let Some(target) = rule(&key) {
            merge_key(counts, &key, &target);
        }
    }
}

/// Moves the count of `from` onto `into` and removes `from`. Merging a key
/// into itself is a no-op, never a double-then-delete.
fn merge_key(counts: &mut EntityCounts, from: &str, into: &str) {
    if from == into {
        return;
    }

    if let Some(count) = counts.remove(from) {
        *counts.entry(into.to_owned()).or_insert(0) += count;
    }
}

fn trim_rule(key: &str) -> Option<String> {
    let trimmed = key.trim();
    if trimmed == key {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn possessive_rule(key: &str) -> Option<String> {
    key.strip_suffix("’s")
        .or_else(|| key.strip_suffix("'s"))
        .map(str::to_owned)
}

fn special_chars_rule(key: &str) -> Option<String> {
    let stripped = constants::KEY_SPECIAL_CHARS.replace_all(key, "");
    if stripped == key {
        None
    } else {
        Some(stripped.into_owned())
    }
}

fn leading_article_rule(key: &str) -> Option<String> {
    if !key.contains(' ') {
        return None;
    }

    match key.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("the ") => Some(key[4..].to_owned()),
        _ => None,
    }
}

fn spaced_uppercase_rule(key: &str) -> Option<String> {
    if key.contains(' ') && Util::is_uppercase(key) {
        Some(Util::title_case(key))
    } else {
        None
    }
}

/// Reassigns every known alternate onto its canonical name. Runs over the
/// whole table, so canonical keys gain an entry even when no alternate was
/// seen; the grand total still never changes.
fn apply_aliases(counts: &mut EntityCounts, aliases: &AliasTable) {
    for (alternate, canonical) in aliases.entries() {
        if alternate == canonical {
            continue;
        }

        let count = counts.remove(alternate).unwrap_or(0);
        *counts.entry(canonical.to_owned()).or_insert(0) += count;
    }
}
