use rust_embed::RustEmbed;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::util::Util;

#[derive(RustEmbed)]
#[folder = "alias-config"]
struct EmbeddedAliasFiles;

/// Known alternate surface forms of canonical entity names, inverted into an
/// alternate → canonical index once at load time. The substitution pass only
/// ever reads it.
pub struct AliasTable {
    canonical_by_alias: BTreeMap<String, String>,
}

impl AliasTable {
    /// Loads the embedded alias files plus any `.txt` files in the user
    /// directory. User entries are parsed last and override embedded ones.
    /// Loading never fails; unreadable files and malformed lines are logged
    /// and skipped.
    pub fn load(directory: Option<&Path>) -> AliasTable {
        let mut canonical_by_alias = BTreeMap::new();

        for (file_name, file) in EmbeddedAliasFiles::iter()
            .filter_map(|file_name| EmbeddedAliasFiles::get(&file_name).map(|f| (file_name, f)))
        {
            match std::str::from_utf8(&file.data) {
                Ok(data) => Self::parse_into(data, &mut canonical_by_alias),
                Err(error) => {
                    log::error!("Embedded alias file '{}' is not UTF-8: {}", file_name, error);
                }
            }
        }

        if let Some(directory) = directory {
            // create data dir if it doesn't already exist
            if let Err(error) = std::fs::DirBuilder::new().recursive(true).create(directory) {
                log::warn!(
                    "Failed to create user alias directory {:?}: {}",
                    directory,
                    error
                );
            }

            if let Ok(mut dir) = fs::read_dir(directory) {
                while let Some(Ok(entry)) = dir.next() {
                    if Util::check_extension(&entry, "txt") {
                        match fs::read_to_string(entry.path()) {
                            Ok(data) => Self::parse_into(&data, &mut canonical_by_alias),
                            Err(error) => {
                                log::warn!(
                                    "Failed to read alias file {:?}: {}",
                                    entry.path(),
                                    error
                                );
                            }
                        }
                    }
                }
            }
        }

        AliasTable { canonical_by_alias }
    }

    pub fn parse_data(data: &str) -> AliasTable {
        let mut canonical_by_alias = BTreeMap::new();
        Self::parse_into(data, &mut canonical_by_alias);
        AliasTable { canonical_by_alias }
    }

    // One mapping per line: `Canonical Name: alternate | alternate`.
    fn parse_into(data: &str, canonical_by_alias: &mut BTreeMap<String, String>) {
        for line in data.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (canonical, alternates) = match line.split_once(':') {
                Some(parts) => parts,
                None => {
                    log::warn!("Ignoring malformed alias line '{}'", line);
                    continue;
                }
            };

            let canonical = canonical.trim();
            if canonical.is_empty() {
                log::warn!("Ignoring alias line without canonical name '{}'", line);
                continue;
            }

            for alternate in Util::split_values(alternates) {
                if alternate.is_empty() {
                    continue;
                }
                canonical_by_alias.insert(alternate.to_owned(), canonical.to_owned());
            }
        }
    }

    pub fn canonical(&self, alternate: &str) -> Option<&str> {
        self.canonical_by_alias.get(alternate).map(String::as_str)
    }

    /// (alternate, canonical) pairs in stable sorted order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.canonical_by_alias
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()))
    }

    pub fn len(&self) -> usize {
        self.canonical_by_alias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical_by_alias.is_empty()
    }
}
