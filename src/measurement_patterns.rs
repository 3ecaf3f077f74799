//! # Measurement Patterns Module
//!
//! This module contains the reference unit vocabulary and the regex patterns
//! used to spot numbers in normalized text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::measurement_types::UnitKind;

// Synonyms per unit kind. Trailing spaces ("mi ", "m ") are significant to the
// normalizer, which only splits on them when a word boundary follows.
pub const CENTIMETER_WORDS: &[&str] = &["centimetres", "centimetre", "centimeter", "cm"];
pub const MILLIMETER_WORDS: &[&str] = &["millimetere", "millimeters", "millimeter", "mm"];
pub const MILE_WORDS: &[&str] = &["miles", "mile", "mi "];
pub const INCH_WORDS: &[&str] = &["inch", "in", "inches"];
pub const FOOT_WORDS: &[&str] = &["foot", "feet", "ft"];
pub const KILOMETER_WORDS: &[&str] = &["kilometers", "kilometer", "km"];
pub const METER_WORDS: &[&str] = &["metres", "m ", "meter"];
pub const NAUTICAL_MILE_WORDS: &[&str] = &["nautical", "nautical mile", "nautical miles"];
pub const YARD_WORDS: &[&str] = &["yard", "yd"];

// Recognized but never converted
pub const SQUARE_WORDS: &[&str] = &["square", "sq"];
pub const CUBIC_WORDS: &[&str] = &["cubic"];
pub const FURLONG_WORDS: &[&str] = &["furlong", "fur"];
pub const LEAGUE_WORDS: &[&str] = &["league", "lea"];
pub const FATHOM_WORDS: &[&str] = &["fathom", "ftm"];
pub const ACRE_WORDS: &[&str] = &["acre"];
pub const MICROMETRE_WORDS: &[&str] = &["micrometre", "micrometers"];
pub const NANOMETRE_WORDS: &[&str] = &["nanometre", "nanometers"];

/// Synonym groups for every convertible unit kind
pub const UNIT_GROUPS: &[(UnitKind, &[&str])] = &[
    (UnitKind::Centimeter, CENTIMETER_WORDS),
    (UnitKind::Millimeter, MILLIMETER_WORDS),
    (UnitKind::Meter, METER_WORDS),
    (UnitKind::Kilometer, KILOMETER_WORDS),
    (UnitKind::Inch, INCH_WORDS),
    (UnitKind::Foot, FOOT_WORDS),
    (UnitKind::Yard, YARD_WORDS),
    (UnitKind::Mile, MILE_WORDS),
    (UnitKind::NauticalMile, NAUTICAL_MILE_WORDS),
];

/// Reserved vocabulary groups (area, volume and out-of-scope lengths)
pub const RESERVED_GROUPS: &[&[&str]] = &[
    SQUARE_WORDS,
    CUBIC_WORDS,
    FURLONG_WORDS,
    LEAGUE_WORDS,
    FATHOM_WORDS,
    ACRE_WORDS,
    MICROMETRE_WORDS,
    NANOMETRE_WORDS,
];

/// Groups spaced out by the normalizer, in application order.
///
/// Kilometer and meter words are left out: "m " would otherwise be split out
/// of every word ending in "m".
pub const NORMALIZATION_GROUPS: &[&[&str]] = &[
    CENTIMETER_WORDS,
    MILLIMETER_WORDS,
    SQUARE_WORDS,
    CUBIC_WORDS,
    MILE_WORDS,
    INCH_WORDS,
    FOOT_WORDS,
    YARD_WORDS,
    FURLONG_WORDS,
    LEAGUE_WORDS,
    FATHOM_WORDS,
    ACRE_WORDS,
    NAUTICAL_MILE_WORDS,
    MICROMETRE_WORDS,
    NANOMETRE_WORDS,
];

/// Size of the reference normalization word list
pub const NORMALIZATION_WORD_COUNT: usize = 36;

// Plain number with optional decimal point or decimal comma
pub const NUMBER_PATTERN: &str = r"^\d+(?:[.,]\d+)?$";

// Apostrophe feet-inches notation: "5'7", "5'11", "6'"
pub const FEET_INCHES_PATTERN: &str = r"^\d+(?:[.,]\d+)?'(?:\d+(?:[.,]\d+)?)?$";

// Lazy static regexes to avoid recompilation
lazy_static! {
    pub static ref NUMBER_REGEX: Regex =
        Regex::new(NUMBER_PATTERN).expect("Number pattern should be valid");
    pub static ref FEET_INCHES_REGEX: Regex =
        Regex::new(FEET_INCHES_PATTERN).expect("Feet-inches pattern should be valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_word_count() {
        let count: usize = NORMALIZATION_GROUPS.iter().map(|group| group.len()).sum();
        assert_eq!(count, NORMALIZATION_WORD_COUNT);
    }

    #[test]
    fn test_number_patterns() {
        assert!(NUMBER_REGEX.is_match("12"));
        assert!(NUMBER_REGEX.is_match("180.5"));
        assert!(NUMBER_REGEX.is_match("160,5"));
        assert!(!NUMBER_REGEX.is_match("5'7"));
        assert!(!NUMBER_REGEX.is_match("twelve"));

        assert!(FEET_INCHES_REGEX.is_match("5'7"));
        assert!(FEET_INCHES_REGEX.is_match("5'11"));
        assert!(FEET_INCHES_REGEX.is_match("6'"));
        assert!(!FEET_INCHES_REGEX.is_match("'7"));
        assert!(!FEET_INCHES_REGEX.is_match("don't"));
    }
}
