//! # Quantity Parser
//!
//! Turns the text of one recognized span into a length in centimeters.
//!
//! ## Supported forms
//!
//! - Single unit: "180.5 cm", "12 km", "160,5 cm" (decimal comma)
//! - Compound feet and inches: "5 ft 11", "7 ft 5"
//! - Apostrophe notation: "5'11" (read as "5 ft 11")
//! - Two-word unit names: "12 nautical mile"
//!
//! ## Usage
//!
//! ```rust
//! use distances::quantity_parser::QuantityParser;
//! use distances::unit_table::UnitTable;
//! use distances::Conversion;
//!
//! let parser = QuantityParser::new(&UnitTable::reference());
//! assert_eq!(parser.convert("5'11").unwrap(), Conversion::Converted(180.34));
//! assert_eq!(parser.convert("3 acre").unwrap(), Conversion::NoMatch);
//! ```

use log::trace;
use std::collections::HashSet;

use crate::conversion::{ft_cm, in_cm, nautical_cm};
use crate::errors::QuantityError;
use crate::measurement_types::{Conversion, ParsedQuantity, UnitKind};
use crate::unit_table::UnitTable;

/// Parses span text into magnitude and unit tokens and converts it
#[derive(Debug, Clone)]
pub struct QuantityParser {
    /// Trimmed synonym sets, in `UnitKind::PRECEDENCE` order
    units: Vec<(UnitKind, HashSet<String>)>,
}

impl QuantityParser {
    pub fn new(table: &UnitTable) -> Self {
        let units = UnitKind::PRECEDENCE
            .into_iter()
            .map(|kind| {
                let words = table
                    .synonyms(kind)
                    .iter()
                    .map(|word| word.trim().to_string())
                    .collect();
                (kind, words)
            })
            .collect();
        Self { units }
    }

    fn words(&self, kind: UnitKind) -> Option<&HashSet<String>> {
        self.units
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(_, words)| words)
    }

    /// Whether any of the unit tokens is a synonym of `kind`
    fn matches(&self, kind: UnitKind, tokens: &[String]) -> bool {
        self.words(kind)
            .is_some_and(|words| tokens.iter().any(|token| words.contains(token)))
    }

    /// Split span text into its leading magnitude and the tokens after it
    ///
    /// Apostrophes are read as feet separators before splitting. The leading
    /// token accepts a decimal comma; the second magnitude of a compound form
    /// must use a dot.
    pub fn parse(&self, text: &str) -> Result<ParsedQuantity, QuantityError> {
        let expanded = if text.contains('\'') {
            text.replace('\'', " ft ")
        } else {
            text.to_string()
        };

        let tokens: Vec<&str> = expanded.split_whitespace().collect();
        let (first, rest) = tokens.split_first().ok_or(QuantityError::Empty)?;
        let magnitude = parse_magnitude(&first.replace(',', "."))?;
        let units: Vec<String> = rest.iter().map(|token| token.to_string()).collect();

        let second_magnitude = if units.len() == 2 && !self.matches(UnitKind::NauticalMile, &units)
        {
            Some(parse_magnitude(&units[1])?)
        } else {
            None
        };

        trace!(
            "Parsed '{}' -> magnitude={}, units={:?}, second={:?}",
            text,
            magnitude,
            units,
            second_magnitude
        );

        Ok(ParsedQuantity {
            magnitude,
            units,
            second_magnitude,
        })
    }

    /// Convert span text into centimeters
    ///
    /// One unit token converts through the first matching unit kind in
    /// precedence order. Two unit tokens are either a nautical mile or a
    /// feet-and-inches compound. Anything else is `Conversion::NoMatch`.
    pub fn convert(&self, text: &str) -> Result<Conversion, QuantityError> {
        let parsed = self.parse(text)?;

        let conversion = match parsed.units.len() {
            0 | 1 => match self.single_unit_kind(&parsed.units) {
                Some(kind) => Conversion::Converted(kind.to_centimeters(parsed.magnitude)),
                None => Conversion::NoMatch,
            },
            2 => {
                if self.matches(UnitKind::NauticalMile, &parsed.units) {
                    Conversion::Converted(nautical_cm(parsed.magnitude))
                } else if self.matches(UnitKind::Foot, &parsed.units) {
                    let inches = parsed.second_magnitude.unwrap_or_default();
                    Conversion::Converted(ft_cm(parsed.magnitude) + in_cm(inches))
                } else {
                    Conversion::NoMatch
                }
            }
            _ => Conversion::NoMatch,
        };

        trace!("Converted '{}' -> {:?}", text, conversion);
        Ok(conversion)
    }

    /// Unit kind the span resolves to, if any
    ///
    /// Compound feet-and-inches spans report `UnitKind::Foot`.
    pub fn unit_kind(&self, text: &str) -> Result<Option<UnitKind>, QuantityError> {
        let parsed = self.parse(text)?;
        Ok(match parsed.units.len() {
            0 | 1 => self.single_unit_kind(&parsed.units),
            2 if self.matches(UnitKind::NauticalMile, &parsed.units) => {
                Some(UnitKind::NauticalMile)
            }
            2 if self.matches(UnitKind::Foot, &parsed.units) => Some(UnitKind::Foot),
            _ => None,
        })
    }

    fn single_unit_kind(&self, units: &[String]) -> Option<UnitKind> {
        self.units
            .iter()
            .find(|(_, words)| units.iter().any(|token| words.contains(token)))
            .map(|(kind, _)| *kind)
    }
}

impl Default for QuantityParser {
    fn default() -> Self {
        Self::new(&UnitTable::reference())
    }
}

fn parse_magnitude(token: &str) -> Result<f64, QuantityError> {
    token
        .parse::<f64>()
        .map_err(|_| QuantityError::InvalidMagnitude(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_parser() -> QuantityParser {
        QuantityParser::default()
    }

    fn cm(parser: &QuantityParser, text: &str) -> f64 {
        parser.convert(text).unwrap().centimeters()
    }

    #[test]
    fn test_parse_single_unit() {
        let parser = create_parser();
        let parsed = parser.parse("160,5 cm").unwrap();

        assert_eq!(parsed.magnitude, 160.5);
        assert_eq!(parsed.units, vec!["cm".to_string()]);
        assert_eq!(parsed.second_magnitude, None);
    }

    #[test]
    fn test_parse_apostrophe_notation() {
        let parser = create_parser();
        let parsed = parser.parse("5'11").unwrap();

        assert_eq!(parsed.magnitude, 5.0);
        assert_eq!(parsed.units, vec!["ft".to_string(), "11".to_string()]);
        assert_eq!(parsed.second_magnitude, Some(11.0));
    }

    #[test]
    fn test_single_unit_conversions() {
        let parser = create_parser();

        assert_eq!(cm(&parser, "33 mm"), 3.3);
        assert_eq!(cm(&parser, "160,5 cm"), 160.5);
        assert_eq!(cm(&parser, "180.5 cm"), 180.5);
        assert_eq!(cm(&parser, "12 km"), 1200000.0);
        assert_eq!(cm(&parser, "12 mile"), 1931208.0000000002);
        assert_eq!(cm(&parser, "23 metres"), 2300.0);
        assert_eq!(cm(&parser, "5 feet"), 152.4);
        assert_eq!(cm(&parser, "10 in"), 25.4);
    }

    #[test]
    fn test_compound_feet_and_inches() {
        let parser = create_parser();

        assert_eq!(cm(&parser, "5 ft 11"), 180.34);
        assert_eq!(cm(&parser, "5'11"), 180.34);
        assert_eq!(cm(&parser, "5'7"), 170.18);
        assert_eq!(cm(&parser, "7 ft 5"), 226.05999999999997);
    }

    #[test]
    fn test_nautical_miles() {
        let parser = create_parser();

        assert_eq!(cm(&parser, "9 nautical miles "), 1035701.9999999999);
        assert_eq!(cm(&parser, "12 nautical mile"), 1380935.9999999998);
        assert_eq!(cm(&parser, "12 nautical"), 1380935.9999999998);
    }

    #[test]
    fn test_no_match() {
        let parser = create_parser();

        assert_eq!(parser.convert("12").unwrap(), Conversion::NoMatch);
        assert_eq!(parser.convert("3 acre").unwrap(), Conversion::NoMatch);
        assert_eq!(parser.convert("5 cm 3").unwrap(), Conversion::NoMatch);
        assert_eq!(parser.convert("1 2 3 4").unwrap(), Conversion::NoMatch);
    }

    #[test]
    fn test_short_tokens_do_not_leak_into_longer_units() {
        let parser = create_parser();

        // token matching is exact, "m" never matches inside "mm" or "mile"
        assert_eq!(cm(&parser, "33 mm"), 3.3);
        assert_eq!(cm(&parser, "3 m"), 300.0);
        assert_eq!(cm(&parser, "3 mi"), 482802.00000000006);
    }

    #[test]
    fn test_parse_errors() {
        let parser = create_parser();

        assert_eq!(parser.convert(""), Err(QuantityError::Empty));
        assert_eq!(parser.convert("   "), Err(QuantityError::Empty));
        assert_eq!(
            parser.convert("yesterday"),
            Err(QuantityError::InvalidMagnitude("yesterday".to_string()))
        );
        // the second magnitude does not accept a decimal comma
        assert_eq!(
            parser.convert("5 ft 10,5"),
            Err(QuantityError::InvalidMagnitude("10,5".to_string()))
        );
    }

    #[test]
    fn test_unit_kind() {
        let parser = create_parser();

        assert_eq!(parser.unit_kind("5 ft 11").unwrap(), Some(UnitKind::Foot));
        assert_eq!(parser.unit_kind("12 nautical mile").unwrap(), Some(UnitKind::NauticalMile));
        assert_eq!(parser.unit_kind("33 mm").unwrap(), Some(UnitKind::Millimeter));
        assert_eq!(parser.unit_kind("3 acre").unwrap(), None);
    }
}
