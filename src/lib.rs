mod aggregate;
mod article;
mod constants;
mod entities;
mod segmenter;
mod util;


pub use aggregate::{monthly_counts, normalize_to_percent, top_entities, total_counts};
pub use article::{Article, Section};
pub use entities::{canonicalize, count_mentions, AliasTable, EntityCounts, Mention};
pub use segmenter::error::SegmenterError;
pub use segmenter::{is_content_body, MarkupFormat, MarkupNode, Segmenter};

use chrono::NaiveDate;
use std::path::Path;

/// Extraction pipeline plus the alias table it canonicalizes with.
pub struct NewsletterExtractor {
    aliases: AliasTable,
}

impl NewsletterExtractor {
    /// `user_aliases` points at a directory of additional alias files
    /// layered over the embedded table.
    pub fn new(user_aliases: Option<&Path>) -> Self {
        Self {
            aliases: AliasTable::load(user_aliases),
        }
    }

    pub fn parse(
        &self,
        title: &str,
        date: NaiveDate,
        html: &str,
    ) -> Result<Article, SegmenterError> {
        Segmenter::parse(title, date, html)
    }

    /// Parses a whole batch of issues. A document the markup rules cannot
    /// handle is logged and skipped; it never aborts the rest of the batch.
    pub fn parse_all<'a, I>(&self, issues: I) -> Vec<Article>
    where
        I: IntoIterator<Item = (&'a str, NaiveDate, &'a str)>,
    {
        let mut articles = Vec::new();
        for (title, date, html) in issues {
            match Segmenter::parse(title, date, html) {
                Ok(article) => articles.push(article),
                Err(error) => {
                    log::warn!("Skipping issue '{}': {}", title, error);
                }
            }
        }
        articles
    }

    /// Canonicalizes one issue's raw mention counts with the loaded table.
    pub fn canonicalize(&self, counts: EntityCounts) -> EntityCounts {
        entities::canonicalize(counts, &self.aliases)
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }
}
