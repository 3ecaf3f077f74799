//! # Unit Conversion Module
//!
//! Pure conversions into centimeters. Imperial units go through meters or
//! kilometers first; the chains and constants are fixed so results are
//! reproducible bit for bit. No rounding is applied.

use crate::measurement_types::UnitKind;

pub const MILE_TO_KM: f64 = 1.60934;
pub const FOOT_TO_M: f64 = 0.3048;
pub const INCH_TO_CM: f64 = 2.54;
// Yards are divided by this factor
pub const YARD_DIVISOR: f64 = 0.9144;
pub const NAUTICAL_MILE_TO_KM: f64 = 1.15078;

pub fn mi_km(value: f64) -> f64 {
    value * MILE_TO_KM
}

pub fn ft_m(value: f64) -> f64 {
    value * FOOT_TO_M
}

pub fn in_cm(value: f64) -> f64 {
    value * INCH_TO_CM
}

pub fn yard_m(value: f64) -> f64 {
    value / YARD_DIVISOR
}

pub fn nautical_km(value: f64) -> f64 {
    value * NAUTICAL_MILE_TO_KM
}

pub fn mm_cm(value: f64) -> f64 {
    value / 10.0
}

pub fn m_cm(value: f64) -> f64 {
    value * 100.0
}

pub fn km_cm(value: f64) -> f64 {
    m_cm(value * 1000.0)
}

pub fn mi_cm(value: f64) -> f64 {
    km_cm(mi_km(value))
}

pub fn ft_cm(value: f64) -> f64 {
    m_cm(ft_m(value))
}

pub fn yard_cm(value: f64) -> f64 {
    m_cm(yard_m(value))
}

pub fn nautical_cm(value: f64) -> f64 {
    km_cm(nautical_km(value))
}

impl UnitKind {
    /// Convert a magnitude expressed in this unit into centimeters
    ///
    /// # Examples
    ///
    /// ```rust
    /// use distances::UnitKind;
    ///
    /// assert_eq!(UnitKind::Foot.to_centimeters(1.0), 30.48);
    /// assert_eq!(UnitKind::Mile.to_centimeters(1.0), 160934.0);
    /// ```
    pub fn to_centimeters(&self, value: f64) -> f64 {
        match self {
            UnitKind::Centimeter => value,
            UnitKind::Millimeter => mm_cm(value),
            UnitKind::Meter => m_cm(value),
            UnitKind::Kilometer => km_cm(value),
            UnitKind::Inch => in_cm(value),
            UnitKind::Foot => ft_cm(value),
            UnitKind::Yard => yard_cm(value),
            UnitKind::Mile => mi_cm(value),
            UnitKind::NauticalMile => nautical_cm(value),
        }
    }
}
