//! # Unit Table Module
//!
//! The unit table is the configuration object shared by the normalizer, the
//! recognizer, the completion heuristic and the quantity parser. It is built
//! once (from the reference vocabulary or a JSON file) and passed by reference
//! to every component.
//!
//! ## Normalization order
//!
//! The normalizer applies `normalization_words` one after another, so a word
//! that contains, or is contained in, an earlier word sees text that the
//! earlier word has already split. [`UnitTable::ordering_conflicts`] lists
//! every such pair so the behaviour is visible instead of incidental.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;
use crate::measurement_patterns::{NORMALIZATION_GROUPS, RESERVED_GROUPS, UNIT_GROUPS};
use crate::measurement_types::UnitKind;

/// Unit vocabulary: synonyms per unit kind, normalization order and reserved words
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitTable {
    /// Synonym strings for each unit kind
    pub synonyms: BTreeMap<UnitKind, Vec<String>>,
    /// Words spaced out by the normalizer, in application order
    pub normalization_words: Vec<String>,
    /// Words recognized as units but never converted (area, volume, ...)
    #[serde(default)]
    pub reserved: Vec<String>,
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::reference()
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

impl UnitTable {
    /// Build the reference table (36 normalization words)
    pub fn reference() -> Self {
        let synonyms = UNIT_GROUPS
            .iter()
            .map(|(kind, words)| (*kind, owned(words)))
            .collect();
        let normalization_words = NORMALIZATION_GROUPS
            .iter()
            .flat_map(|group| owned(group))
            .collect();
        let reserved = RESERVED_GROUPS
            .iter()
            .flat_map(|group| owned(group))
            .collect();

        Self {
            synonyms,
            normalization_words,
            reserved,
        }
    }

    /// Parse and validate a table from JSON
    ///
    /// # Examples
    ///
    /// ```rust
    /// use distances::unit_table::UnitTable;
    ///
    /// let json = r#"{
    ///     "synonyms": { "foot": ["ft"], "inch": ["in"] },
    ///     "normalization_words": ["ft", "in"]
    /// }"#;
    /// let table = UnitTable::from_json_str(json)?;
    /// assert!(table.is_synonym(distances::UnitKind::Foot, "ft"));
    /// # Ok::<(), distances::errors::ConfigError>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let table: UnitTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Read, parse and validate a table from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading unit table from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Check that the table is usable by every component
    ///
    /// - no blank words anywhere
    /// - every normalization word is a unit synonym or a reserved word, so that
    ///   whatever the normalizer splits out is also known to the parser
    ///
    /// Ordering conflicts are reported with a warning but do not fail validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all_words = self
            .synonyms
            .values()
            .flatten()
            .chain(self.normalization_words.iter())
            .chain(self.reserved.iter());
        for word in all_words {
            if word.trim().is_empty() {
                return Err(ConfigError::Invalid("unit table contains a blank word".to_string()));
            }
        }

        for word in &self.normalization_words {
            if self.kind_of(word).is_none() && !self.is_reserved(word) {
                return Err(ConfigError::Invalid(format!(
                    "normalization word {word:?} is neither a unit synonym nor reserved"
                )));
            }
        }

        for kind in UnitKind::PRECEDENCE {
            if self.synonyms(kind).is_empty() {
                warn!("Unit table has no synonyms for {}", kind);
            }
        }

        let conflicts = self.ordering_conflicts();
        if !conflicts.is_empty() {
            debug!(
                "Unit table has {} normalization ordering conflicts: {:?}",
                conflicts.len(),
                conflicts
            );
        }
        Ok(())
    }

    /// Synonyms configured for a unit kind
    pub fn synonyms(&self, kind: UnitKind) -> &[String] {
        self.synonyms.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `token` is a synonym of `kind`, ignoring surrounding whitespace
    pub fn is_synonym(&self, kind: UnitKind, token: &str) -> bool {
        let token = token.trim();
        self.synonyms(kind).iter().any(|word| word.trim() == token)
    }

    /// First unit kind, in precedence order, that `token` is a synonym of
    pub fn kind_of(&self, token: &str) -> Option<UnitKind> {
        UnitKind::PRECEDENCE
            .into_iter()
            .find(|kind| self.is_synonym(*kind, token))
    }

    pub fn is_reserved(&self, token: &str) -> bool {
        let token = token.trim();
        self.reserved.iter().any(|word| word.trim() == token)
    }

    pub fn normalization_words(&self) -> &[String] {
        &self.normalization_words
    }

    /// Every unit synonym and reserved word, trimmed and deduplicated
    pub fn vocabulary(&self) -> Vec<String> {
        let mut words: Vec<String> = self
            .synonyms
            .values()
            .flatten()
            .chain(self.reserved.iter())
            .map(|word| word.trim().to_string())
            .collect();
        words.sort();
        words.dedup();
        words
    }

    /// Pairs `(earlier, later)` of normalization words that interfere.
    ///
    /// A later word interferes when it contains the earlier word (the earlier
    /// split has already broken it up) or when it occurs inside the earlier
    /// word (it splits the earlier word's reinserted text).
    pub fn ordering_conflicts(&self) -> Vec<(String, String)> {
        let words = &self.normalization_words;
        let mut conflicts = Vec::new();
        for (i, earlier) in words.iter().enumerate() {
            for later in &words[i + 1..] {
                if later == earlier {
                    continue;
                }
                if earlier.trim().contains(later.as_str()) || later.contains(earlier.as_str()) {
                    conflicts.push((earlier.clone(), later.clone()));
                }
            }
        }
        conflicts
    }
}
