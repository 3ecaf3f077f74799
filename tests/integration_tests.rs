//! # Integration Tests
//!
//! End-to-end tests running raw sentences through normalization, the
//! rule-based recognizer, completion, parsing and aggregation.

use distances::errors::RecognizerError;
use distances::recognizer::EntityRecognizer;
use distances::unit_table::UnitTable;
use distances::{EntityLabel, MeasurementPipeline, MeasurementSpan, SentenceResult};
use std::sync::Arc;

#[test]
fn test_reference_sentences_end_to_end() {
    let pipeline = MeasurementPipeline::default();

    let data = [
        "You are 5'7 tall",
        "5 ft 10 inches",
        "My brother is 7ft 5",
        "5foot 10 in",
        "5 foot 9",
        "5feet 10 is my height",
        "33mm",
        "160,5 cm",
        "I did a 12 km run yesterday",
        "12miles",
        "It was 180.5 cm in length",
        "23 metres",
        "the island is 12 nautical miles from here",
    ];

    let results = pipeline.extract_normalized_measurements(&data).unwrap();

    assert_eq!(
        results,
        vec![
            Some(170.18),
            Some(177.8),
            Some(226.05999999999997),
            Some(177.8),
            Some(175.26),
            // the trailing "10" is completed to inches
            Some(177.8),
            Some(3.3),
            Some(160.5),
            Some(1200000.0),
            Some(1931208.0000000002),
            Some(180.5),
            Some(2300.0),
            Some(1380935.9999999998),
        ]
    );
}

#[test]
fn test_sentences_without_measurements_yield_none() {
    let pipeline = MeasurementPipeline::default();

    let results = pipeline
        .extract_normalized_measurements(&[
            "no measurement here",
            "",
            "I have 12 cats",
            "3 acres of land",
            "0 cm",
        ])
        .unwrap();

    assert_eq!(results, vec![None, None, None, None, None]);
}

#[test]
fn test_only_first_span_pair_is_completed() {
    let pipeline = MeasurementPipeline::default();

    // "4" is never completed to inches and contributes nothing
    let result = pipeline
        .normalize_sentence("I am 6 foot 2 and she is 5 foot 4")
        .unwrap();
    assert_eq!(result, Some(340.36));
}

#[test]
fn test_extraction_spans() {
    let pipeline = MeasurementPipeline::default();

    assert_eq!(
        pipeline.extract("5 ft 10 inches").unwrap(),
        vec![
            MeasurementSpan::quantity("5 ft"),
            MeasurementSpan::quantity("10 in"),
        ]
    );
    assert_eq!(
        pipeline.extract("the island is 12 nautical miles from here").unwrap(),
        vec![MeasurementSpan::quantity("12 nautical mile")]
    );
}

struct CannedRecognizer;

impl EntityRecognizer for CannedRecognizer {
    fn recognize(&self, normalized: &str) -> Result<SentenceResult, RecognizerError> {
        match normalized {
            "my brother is 7 ft 5" => Ok(vec![MeasurementSpan::quantity("7 ft 5")]),
            "i did a 12 km run yesterday" => Ok(vec![
                MeasurementSpan::quantity("12 km"),
                MeasurementSpan::new("yesterday", EntityLabel::from_label("DATE")),
            ]),
            "5 feet 10 is my height" => Ok(vec![MeasurementSpan::quantity("5 feet")]),
            other => Err(RecognizerError::Failed(format!("unexpected input: {other}"))),
        }
    }
}

#[test]
fn test_custom_recognizer() {
    let pipeline = MeasurementPipeline::new(UnitTable::reference(), CannedRecognizer);

    let results = pipeline
        .extract_normalized_measurements(&[
            "My brother is 7ft 5",
            "I did a 12 km run yesterday",
            "5feet 10 is my height",
        ])
        .unwrap();

    assert_eq!(
        results,
        vec![Some(226.05999999999997), Some(1200000.0), Some(152.4)]
    );
}

#[test]
fn test_recognizer_failure_is_the_only_error() {
    let pipeline = MeasurementPipeline::new(UnitTable::reference(), CannedRecognizer);

    let result = pipeline.extract_normalized_measurements(&["My brother is 7ft 5", "something else"]);
    assert!(matches!(result, Err(RecognizerError::Failed(_))));
}

#[tokio::test]
async fn test_parallel_matches_sequential() {
    let pipeline = Arc::new(MeasurementPipeline::default());
    let sentences: Vec<String> = [
        "You are 5'7 tall",
        "12miles",
        "nothing",
        "5 foot 9",
        "It was 180.5 cm in length",
        "the island is 12 nautical miles from here",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let sequential = pipeline.extract_normalized_measurements(&sentences[..]).unwrap();
    let parallel = Arc::clone(&pipeline)
        .extract_parallel(sentences, 3)
        .await
        .unwrap();

    assert_eq!(parallel, sequential);
}

#[test]
fn test_custom_unit_table() {
    let json = r#"{
        "synonyms": {
            "foot": ["feet", "ft"],
            "inch": ["inches", "in"],
            "meter": ["meters", "metres", "m"]
        },
        "normalization_words": ["feet", "ft"]
    }"#;
    let table = UnitTable::from_json_str(json).unwrap();
    let pipeline = MeasurementPipeline::with_pattern_recognizer(table);

    assert_eq!(pipeline.normalize_sentence("6ft 2").unwrap(), Some(187.96000000000004));
    assert_eq!(pipeline.normalize_sentence("2 meters").unwrap(), Some(200.0));
    // centimeters are unknown to this table
    assert_eq!(pipeline.normalize_sentence("180 cm").unwrap(), None);
}
