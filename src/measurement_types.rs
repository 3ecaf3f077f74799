//! # Measurement Types Module
//!
//! This module defines the core types that flow through the length
//! normalization pipeline: unit kinds, recognizer spans and conversion outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical length unit that one or more synonym strings map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Centimeter,
    Millimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
}

impl UnitKind {
    /// Order in which unit kinds are tried when a span carries a single unit token.
    ///
    /// Nautical mile comes first so that "nautical mile" is never read as a
    /// plain mile; centimeter is the last resort.
    pub const PRECEDENCE: [UnitKind; 9] = [
        UnitKind::NauticalMile,
        UnitKind::Kilometer,
        UnitKind::Mile,
        UnitKind::Foot,
        UnitKind::Meter,
        UnitKind::Yard,
        UnitKind::Inch,
        UnitKind::Millimeter,
        UnitKind::Centimeter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UnitKind::Centimeter => "centimeter",
            UnitKind::Millimeter => "millimeter",
            UnitKind::Meter => "meter",
            UnitKind::Kilometer => "kilometer",
            UnitKind::Inch => "inch",
            UnitKind::Foot => "foot",
            UnitKind::Yard => "yard",
            UnitKind::Mile => "mile",
            UnitKind::NauticalMile => "nautical_mile",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Label attached to a span by the entity recognizer
///
/// Only `Quantity` and `Cardinal` spans contribute to a sentence's length;
/// every other label is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    Quantity,
    Cardinal,
    Other(String),
}

impl EntityLabel {
    /// Map a recognizer label string ("QUANTITY", "CARDINAL", "DATE", ...) to a label
    pub fn from_label(label: &str) -> Self {
        match label {
            "QUANTITY" => EntityLabel::Quantity,
            "CARDINAL" => EntityLabel::Cardinal,
            other => EntityLabel::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Quantity => "QUANTITY",
            EntityLabel::Cardinal => "CARDINAL",
            EntityLabel::Other(label) => label,
        }
    }

    /// Whether spans with this label are summed by the aggregator
    pub fn is_measurement(&self) -> bool {
        matches!(self, EntityLabel::Quantity | EntityLabel::Cardinal)
    }
}

impl From<String> for EntityLabel {
    fn from(label: String) -> Self {
        EntityLabel::from_label(&label)
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A span of text identified by the recognizer as a candidate entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSpan {
    /// The span text (e.g., "5 ft", "9", "160,5 cm")
    pub text: String,
    /// The recognizer label for the span
    pub label: EntityLabel,
}

impl MeasurementSpan {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }

    pub fn quantity(text: impl Into<String>) -> Self {
        Self::new(text, EntityLabel::Quantity)
    }

    pub fn cardinal(text: impl Into<String>) -> Self {
        Self::new(text, EntityLabel::Cardinal)
    }
}

/// Ordered spans recognized in one sentence. Position matters: completion
/// only looks at the first two spans.
pub type SentenceResult = Vec<MeasurementSpan>;

/// Length of one sentence in centimeters, or `None` when nothing was recovered
pub type NormalizedResult = Option<f64>;

/// Decomposition of a single span's text into magnitude and unit tokens
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuantity {
    /// Leading number, with any decimal comma already read as a dot
    pub magnitude: f64,
    /// Every token after the magnitude, as written
    pub units: Vec<String>,
    /// Trailing number of a compound form such as "5 ft 11"
    pub second_magnitude: Option<f64>,
}

/// Outcome of converting one span into centimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    Converted(f64),
    /// No configured unit rule applied to the span
    NoMatch,
}

impl Conversion {
    /// Contribution of this outcome to a sentence total
    pub fn centimeters(self) -> f64 {
        match self {
            Conversion::Converted(value) => value,
            Conversion::NoMatch => 0.0,
        }
    }
}
