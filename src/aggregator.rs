//! # Aggregator Module
//!
//! Reduces the spans of a sentence to a single length and maps sentences with
//! nothing recoverable to the `None` sentinel.

use log::{debug, trace};

use crate::measurement_types::{MeasurementSpan, NormalizedResult, SentenceResult};
use crate::quantity_parser::QuantityParser;

/// Sum the centimeter values of every QUANTITY and CARDINAL span, in span order
///
/// Spans that match no unit, or whose text cannot be parsed, contribute `0.0`.
/// Spans with any other label are skipped.
pub fn aggregate_sentence(parser: &QuantityParser, spans: &[MeasurementSpan]) -> f64 {
    let mut total = 0.0;
    for span in spans {
        if !span.label.is_measurement() {
            trace!("Skipping '{}' labelled {}", span.text, span.label);
            continue;
        }

        match parser.convert(&span.text) {
            Ok(conversion) => total += conversion.centimeters(),
            Err(e) => debug!("Ignoring span '{}': {}", span.text, e),
        }
    }
    total
}

/// Aggregate every sentence, preserving order
pub fn normalise_measurements(parser: &QuantityParser, sentences: &[SentenceResult]) -> Vec<f64> {
    sentences
        .iter()
        .map(|spans| aggregate_sentence(parser, spans))
        .collect()
}

/// Keep a strictly positive total, otherwise report that nothing was recovered
///
/// A genuine zero-length measurement cannot be told apart from a failure and
/// is reported as `None` as well.
pub fn clean_failed_extraction(total: f64) -> NormalizedResult {
    if total > 0.0 {
        Some(total)
    } else {
        None
    }
}

/// Apply [`clean_failed_extraction`] to every total
pub fn clean_failed_extractions(totals: &[f64]) -> Vec<NormalizedResult> {
    totals.iter().copied().map(clean_failed_extraction).collect()
}
