//! # Text Processing Module
//!
//! This module prepares raw sentences for entity recognition by making unit
//! words separable from the numbers around them.
//!
//! ## Features
//!
//! - Lowercasing of the whole sentence
//! - Whitespace inserted around every configured unit word ("5feet" -> "5 feet")
//! - Words applied in the unit table's normalization order

use log::{debug, trace};

use crate::unit_table::UnitTable;

/// Inserts whitespace boundaries around unit words
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    /// Words to space out, in application order
    words: Vec<String>,
}

impl TextNormalizer {
    /// Create a normalizer using the table's normalization words
    ///
    /// # Examples
    ///
    /// ```rust
    /// use distances::text_processing::TextNormalizer;
    /// use distances::unit_table::UnitTable;
    ///
    /// let normalizer = TextNormalizer::new(&UnitTable::reference());
    /// assert_eq!(normalizer.normalize("5feet 10 is my height"), "5 feet 10 is my height");
    /// ```
    pub fn new(table: &UnitTable) -> Self {
        debug!(
            "Creating TextNormalizer with {} normalization words",
            table.normalization_words().len()
        );
        Self {
            words: table.normalization_words().to_vec(),
        }
    }

    /// Lowercase the sentence and surround every unit word with single spaces
    ///
    /// Each word splits the current text on all of its occurrences; every
    /// segment is trimmed and the trimmed word is reinserted between them.
    /// Later words operate on the output of earlier ones. The text after the
    /// last occurrence is trimmed too, while the word before it keeps its
    /// trailing space.
    pub fn normalize(&self, sentence: &str) -> String {
        let mut text = sentence.to_lowercase();

        for word in &self.words {
            if word.is_empty() || !text.contains(word.as_str()) {
                continue;
            }

            let segments: Vec<&str> = text.split(word.as_str()).collect();
            let Some((last, leading)) = segments.split_last() else {
                continue;
            };

            let mut rebuilt = String::with_capacity(text.len() + segments.len() * 2);
            for segment in leading {
                rebuilt.push_str(segment.trim());
                rebuilt.push(' ');
                rebuilt.push_str(word.trim());
                rebuilt.push(' ');
            }
            rebuilt.push_str(last.trim());

            trace!("Spaced out '{}': '{}' -> '{}'", word, text, rebuilt);
            text = rebuilt;
        }

        debug!("Normalized sentence: '{}' -> '{}'", sentence, text);
        text
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(&UnitTable::reference())
    }
}
