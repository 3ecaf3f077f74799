//! # Entity Recognition Module
//!
//! Boundary to the entity recognizer. The pipeline only needs ordered
//! `(text, label)` spans for a normalized sentence; any statistical model can
//! be plugged in through [`EntityRecognizer`], including a plain closure.
//!
//! [`PatternRecognizer`] is a deterministic rule-based recognizer: a number
//! followed by a unit phrase is a QUANTITY, a lone number is a CARDINAL.

use log::{debug, trace};
use std::collections::HashSet;

use crate::errors::RecognizerError;
use crate::measurement_patterns::{FEET_INCHES_REGEX, NUMBER_REGEX};
use crate::measurement_types::{EntityLabel, MeasurementSpan, SentenceResult};
use crate::unit_table::UnitTable;

/// Produces ordered entity spans for a normalized sentence
///
/// Implementations are shared across worker threads and must tolerate
/// concurrent calls.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, normalized: &str) -> Result<SentenceResult, RecognizerError>;
}

impl<F> EntityRecognizer for F
where
    F: Fn(&str) -> Result<SentenceResult, RecognizerError> + Send + Sync,
{
    fn recognize(&self, normalized: &str) -> Result<SentenceResult, RecognizerError> {
        self(normalized)
    }
}

// Punctuation stripped from token edges before matching
const EDGE_PUNCTUATION: &[char] = &['"', '(', ')', ',', '.', ';', ':', '!', '?'];

// Longest unit phrase, in tokens ("nautical mile")
const MAX_PHRASE_TOKENS: usize = 2;

/// Rule-based recognizer driven by the unit vocabulary
#[derive(Debug, Clone)]
pub struct PatternRecognizer {
    /// Unit synonyms and reserved words, trimmed
    vocabulary: HashSet<String>,
}

impl PatternRecognizer {
    /// Create a recognizer that knows every unit and reserved word of the table
    ///
    /// # Examples
    ///
    /// ```rust
    /// use distances::recognizer::{EntityRecognizer, PatternRecognizer};
    /// use distances::unit_table::UnitTable;
    /// use distances::MeasurementSpan;
    ///
    /// let recognizer = PatternRecognizer::new(&UnitTable::reference());
    /// let spans = recognizer.recognize("5 foot 9")?;
    /// assert_eq!(spans, vec![MeasurementSpan::quantity("5 foot"), MeasurementSpan::cardinal("9")]);
    /// # Ok::<(), distances::errors::RecognizerError>(())
    /// ```
    pub fn new(table: &UnitTable) -> Self {
        let vocabulary: HashSet<String> = table.vocabulary().into_iter().collect();
        debug!(
            "Creating PatternRecognizer with {} vocabulary words",
            vocabulary.len()
        );
        Self { vocabulary }
    }

    /// Number of tokens of the longest unit phrase starting at `tokens[0]`
    fn unit_phrase_len(&self, tokens: &[&str]) -> usize {
        (1..=MAX_PHRASE_TOKENS.min(tokens.len()))
            .rev()
            .find(|&len| self.vocabulary.contains(&tokens[..len].join(" ")))
            .unwrap_or(0)
    }
}

impl Default for PatternRecognizer {
    fn default() -> Self {
        Self::new(&UnitTable::reference())
    }
}

impl EntityRecognizer for PatternRecognizer {
    fn recognize(&self, normalized: &str) -> Result<SentenceResult, RecognizerError> {
        let tokens: Vec<&str> = normalized
            .split_whitespace()
            .map(|token| token.trim_matches(EDGE_PUNCTUATION))
            .filter(|token| !token.is_empty())
            .collect();

        let mut spans = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i];

            if FEET_INCHES_REGEX.is_match(token) {
                spans.push(MeasurementSpan::new(token, EntityLabel::Cardinal));
                i += 1;
                continue;
            }

            if !NUMBER_REGEX.is_match(token) {
                i += 1;
                continue;
            }

            let phrase_len = self.unit_phrase_len(&tokens[i + 1..]);
            if phrase_len == 0 {
                spans.push(MeasurementSpan::new(token, EntityLabel::Cardinal));
            } else {
                let text = tokens[i..=i + phrase_len].join(" ");
                spans.push(MeasurementSpan::new(text, EntityLabel::Quantity));
            }
            i += phrase_len + 1;
        }

        trace!("Recognized {:?} in '{}'", spans, normalized);
        Ok(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognize(text: &str) -> SentenceResult {
        PatternRecognizer::default().recognize(text).unwrap()
    }

    #[test]
    fn test_number_with_unit_is_quantity() {
        assert_eq!(recognize("33 mm "), vec![MeasurementSpan::quantity("33 mm")]);
        assert_eq!(
            recognize("i did a 12 km run yesterday"),
            vec![MeasurementSpan::quantity("12 km")]
        );
        assert_eq!(
            recognize("5 ft 10 in ch es"),
            vec![
                MeasurementSpan::quantity("5 ft"),
                MeasurementSpan::quantity("10 in"),
            ]
        );
    }

    #[test]
    fn test_longest_phrase_wins() {
        assert_eq!(
            recognize("the island is 12 nautical mile s from here"),
            vec![MeasurementSpan::quantity("12 nautical mile")]
        );
    }

    #[test]
    fn test_bare_numbers_are_cardinal() {
        assert_eq!(recognize("you are 5'7 tall"), vec![MeasurementSpan::cardinal("5'7")]);
        assert_eq!(
            recognize("my brother is 7 ft 5"),
            vec![MeasurementSpan::quantity("7 ft"), MeasurementSpan::cardinal("5")]
        );
    }

    #[test]
    fn test_unit_words_without_number_are_ignored() {
        assert_eq!(
            recognize("it was 180.5 cm in length"),
            vec![MeasurementSpan::quantity("180.5 cm")]
        );
        assert!(recognize("no numbers here").is_empty());
        assert!(recognize("").is_empty());
    }

    #[test]
    fn test_edge_punctuation_is_stripped() {
        assert_eq!(recognize("i am 180 cm ."), vec![MeasurementSpan::quantity("180 cm")]);
        assert_eq!(recognize("5'11\" and proud"), vec![MeasurementSpan::cardinal("5'11")]);
        assert_eq!(recognize("(160,5 cm)"), vec![MeasurementSpan::quantity("160,5 cm")]);
    }

    #[test]
    fn test_reserved_words_still_form_quantities() {
        assert_eq!(recognize("3 acre s of land"), vec![MeasurementSpan::quantity("3 acre")]);
    }

    #[test]
    fn test_closure_recognizer() {
        let recognizer = |text: &str| -> Result<SentenceResult, RecognizerError> {
            Ok(vec![MeasurementSpan::new(text, EntityLabel::Other("MISC".to_string()))])
        };
        let spans = recognizer.recognize("anything").unwrap();
        assert_eq!(spans[0].label, EntityLabel::Other("MISC".to_string()));
    }
}
