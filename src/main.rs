use anyhow::{Context, Result};
use log::info;
use std::env;
use std::io::{self, BufRead};
use std::sync::Arc;

use distances::config::RuntimeConfig;
use distances::MeasurementPipeline;

/// Sentences from the command line, or one per stdin line when none are given
fn read_sentences() -> Result<Vec<String>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args);
    }

    let stdin = io::stdin();
    let mut sentences = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read sentence from stdin")?;
        if !line.trim().is_empty() {
            sentences.push(line);
        }
    }
    Ok(sentences)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = RuntimeConfig::from_env().context("Invalid runtime configuration")?;
    let table = config
        .load_unit_table()
        .context("Failed to load unit table")?;

    let pipeline = Arc::new(MeasurementPipeline::with_pattern_recognizer(table));

    let sentences = read_sentences()?;
    info!("Read {} sentences", sentences.len());

    let results = pipeline
        .extract_parallel(sentences, config.workers)
        .await
        .context("Failed to normalize sentences")?;

    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
