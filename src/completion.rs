//! # Measurement Completion
//!
//! Repairs spans the recognizer left incomplete. In height phrasing such as
//! "5 foot 9" the bare number after a foot measurement is a count of inches,
//! so the second span gets an explicit inch unit.

use log::debug;

use crate::measurement_types::{MeasurementSpan, SentenceResult, UnitKind};
use crate::unit_table::UnitTable;

fn has_token_of(table: &UnitTable, kind: UnitKind, text: &str) -> bool {
    text.split_whitespace()
        .any(|token| table.is_synonym(kind, token))
}

/// Append an inch unit to span 1 when span 0 is in feet and span 1 has no inch unit
///
/// Only the first two spans are inspected; later spans are returned as they are.
///
/// # Examples
///
/// ```rust
/// use distances::completion::complete_measurements;
/// use distances::unit_table::UnitTable;
/// use distances::MeasurementSpan;
///
/// let spans = vec![MeasurementSpan::quantity("5 foot"), MeasurementSpan::cardinal("9")];
/// let completed = complete_measurements(&UnitTable::reference(), spans);
/// assert_eq!(completed[1].text, "9 in");
/// ```
pub fn complete_measurements(table: &UnitTable, mut spans: SentenceResult) -> SentenceResult {
    if spans.len() < 2 {
        return spans;
    }

    let needs_inches = has_token_of(table, UnitKind::Foot, &spans[0].text)
        && !has_token_of(table, UnitKind::Inch, &spans[1].text);
    if !needs_inches {
        return spans;
    }

    debug!(
        "Inferring inches for '{}' after foot span '{}'",
        spans[1].text, spans[0].text
    );
    let completed = MeasurementSpan::new(format!("{} in", spans[1].text), spans[1].label.clone());
    spans[1] = completed;
    spans
}

/// Apply [`complete_measurements`] to every sentence
pub fn complete_all(table: &UnitTable, sentences: Vec<SentenceResult>) -> Vec<SentenceResult> {
    sentences
        .into_iter()
        .map(|spans| complete_measurements(table, spans))
        .collect()
}
