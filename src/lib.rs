//! # Distances
//!
//! Extracts human-stated lengths ("5'7", "12 nautical miles", "180.5 cm")
//! from free-text sentences and normalizes each sentence to one value in
//! centimeters.

pub mod aggregator;
pub mod completion;
pub mod config;
pub mod conversion;
pub mod errors;
pub mod measurement_patterns;
pub mod measurement_types;
pub mod pipeline;
pub mod quantity_parser;
pub mod recognizer;
pub mod text_processing;
pub mod unit_table;

pub use measurement_types::{
    Conversion, EntityLabel, MeasurementSpan, NormalizedResult, ParsedQuantity, SentenceResult,
    UnitKind,
};
pub use pipeline::MeasurementPipeline;
