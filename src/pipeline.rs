//! # Measurement Pipeline
//!
//! Public entry point. A pipeline owns the unit table, the components built
//! from it and the entity recognizer; it is built once and reused for every
//! sentence.
//!
//! ## Usage
//!
//! ```rust
//! use distances::pipeline::MeasurementPipeline;
//!
//! let pipeline = MeasurementPipeline::default();
//! let results = pipeline.extract_normalized_measurements(&["You are 5'7 tall", "hello"])?;
//! assert_eq!(results, vec![Some(170.18), None]);
//! # Ok::<(), distances::errors::RecognizerError>(())
//! ```

use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::aggregator::{aggregate_sentence, clean_failed_extraction};
use crate::completion::complete_measurements;
use crate::errors::{PipelineError, RecognizerError};
use crate::measurement_types::{NormalizedResult, SentenceResult};
use crate::quantity_parser::QuantityParser;
use crate::recognizer::{EntityRecognizer, PatternRecognizer};
use crate::text_processing::TextNormalizer;
use crate::unit_table::UnitTable;

/// Sentence-to-centimeters pipeline
pub struct MeasurementPipeline {
    table: UnitTable,
    normalizer: TextNormalizer,
    parser: QuantityParser,
    recognizer: Box<dyn EntityRecognizer>,
}

impl MeasurementPipeline {
    /// Build a pipeline from a unit table and a recognizer
    pub fn new(table: UnitTable, recognizer: impl EntityRecognizer + 'static) -> Self {
        let conflicts = table.ordering_conflicts();
        if !conflicts.is_empty() {
            warn!(
                "{} unit words interfere during normalization; later words see pre-split text",
                conflicts.len()
            );
        }

        info!(
            "Creating MeasurementPipeline with {} normalization words",
            table.normalization_words().len()
        );
        Self {
            normalizer: TextNormalizer::new(&table),
            parser: QuantityParser::new(&table),
            recognizer: Box::new(recognizer),
            table,
        }
    }

    /// Build a pipeline using the rule-based recognizer for the table
    pub fn with_pattern_recognizer(table: UnitTable) -> Self {
        let recognizer = PatternRecognizer::new(&table);
        Self::new(table, recognizer)
    }

    pub fn unit_table(&self) -> &UnitTable {
        &self.table
    }

    pub fn parser(&self) -> &QuantityParser {
        &self.parser
    }

    /// Normalize a sentence and run the recognizer on it
    pub fn extract(&self, sentence: &str) -> Result<SentenceResult, RecognizerError> {
        let normalized = self.normalizer.normalize(sentence);
        self.recognizer.recognize(&normalized)
    }

    /// Extract, complete and aggregate one sentence
    pub fn normalize_sentence(&self, sentence: &str) -> Result<NormalizedResult, RecognizerError> {
        let spans = self.extract(sentence)?;
        let spans = complete_measurements(&self.table, spans);
        let total = aggregate_sentence(&self.parser, &spans);
        let result = clean_failed_extraction(total);

        debug!("'{}' -> {:?} (spans: {:?})", sentence, result, spans);
        Ok(result)
    }

    /// Normalize every sentence, one result per input, in input order
    ///
    /// Only a recognizer failure is returned as an error; sentences without a
    /// usable measurement yield `None`.
    pub fn extract_normalized_measurements<S: AsRef<str>>(
        &self,
        sentences: &[S],
    ) -> Result<Vec<NormalizedResult>, RecognizerError> {
        info!("Normalizing {} sentences", sentences.len());
        sentences
            .iter()
            .map(|sentence| self.normalize_sentence(sentence.as_ref()))
            .collect()
    }

    /// Normalize sentences on blocking worker tasks, at most `workers` at a time
    ///
    /// Results keep the input order. The first recognizer failure, in input
    /// order, is returned.
    pub async fn extract_parallel(
        self: Arc<Self>,
        sentences: Vec<String>,
        workers: usize,
    ) -> Result<Vec<NormalizedResult>, PipelineError> {
        let workers = workers.max(1);
        info!(
            "Normalizing {} sentences with {} workers",
            sentences.len(),
            workers
        );

        let permits = Arc::new(Semaphore::new(workers));
        let mut handles = Vec::with_capacity(sentences.len());
        for sentence in sentences {
            let permit = Arc::clone(&permits).acquire_owned().await?;
            let pipeline = Arc::clone(&self);
            handles.push(tokio::task::spawn_blocking(move || {
                let result = pipeline.normalize_sentence(&sentence);
                drop(permit);
                result
            }));
        }

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            results.push(handle.await??);
        }
        Ok(results)
    }
}

impl Default for MeasurementPipeline {
    fn default() -> Self {
        Self::with_pattern_recognizer(UnitTable::reference())
    }
}
