use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate};

use crate::article::Article;
use crate::entities::EntityCounts;

/// Rescales each count to an integer percent of the multiset's total, so
/// issues of very different lengths compare. Empty input stays untouched.
pub fn normalize_to_percent(counts: &mut EntityCounts) {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return;
    }

    for count in counts.values_mut() {
        *count = *count * 100 / total;
    }
}

/// Element-wise sum over all issues. Keys that never contribute anything
/// are left out.
pub fn total_counts(per_article: &[EntityCounts]) -> EntityCounts {
    let mut totals = EntityCounts::new();
    for counts in per_article {
        for (key, count) in counts {
            if *count > 0 {
                *totals.entry(key.clone()).or_insert(0) += count;
            }
        }
    }
    totals
}

/// The `limit` highest-counted entities, skipping caller-excluded canonical
/// names. Ties break on the key so the ranking is stable.
pub fn top_entities(
    counts: &EntityCounts,
    limit: usize,
    skip: &HashSet<String>,
) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counts
        .iter()
        .filter(|(key, _)| !skip.contains(key.as_str()))
        .map(|(key, count)| (key.clone(), *count))
        .collect();

    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);
    entries
}

/// Time series for one entity: counts bucketed under the first day of each
/// issue's month. Months where the entity never appears still show up as 0
/// as long as some issue was published in them.
pub fn monthly_counts(
    articles: &[Article],
    per_article: &[EntityCounts],
    key: &str,
) -> BTreeMap<NaiveDate, u64> {
    let mut by_month = BTreeMap::new();
    for (article, counts) in articles.iter().zip(per_article) {
        let month = article.date.with_day(1).unwrap_or(article.date);
        let count = counts.get(key).copied().unwrap_or(0);
        *by_month.entry(month).or_insert(0) += count;
    }
    by_month
}
