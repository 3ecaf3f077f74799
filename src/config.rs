//! # Runtime Configuration Module
//!
//! Settings read from the environment (and a `.env` file loaded by the
//! binary) that decide which unit table is used and how many sentences are
//! processed at once.

use log::info;
use std::env;
use std::path::PathBuf;

use crate::errors::ConfigError;
use crate::unit_table::UnitTable;

// Environment variable names
pub const UNIT_TABLE_ENV: &str = "DISTANCES_UNIT_TABLE";
pub const WORKERS_ENV: &str = "DISTANCES_WORKERS";

pub const DEFAULT_WORKERS: usize = 4;

/// Configuration for the command-line runner
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Optional JSON unit table replacing the reference vocabulary
    pub unit_table_path: Option<PathBuf>,
    /// Maximum number of sentences processed concurrently
    pub workers: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            unit_table_path: None,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl RuntimeConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let unit_table_path = lookup(UNIT_TABLE_ENV)
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        let workers = match lookup(WORKERS_ENV) {
            Some(raw) => {
                let workers: usize = raw.trim().parse().map_err(|_| {
                    ConfigError::Invalid(format!("{WORKERS_ENV} must be a positive integer, got {raw:?}"))
                })?;
                if workers == 0 {
                    return Err(ConfigError::Invalid(format!("{WORKERS_ENV} must be at least 1")));
                }
                workers
            }
            None => DEFAULT_WORKERS,
        };

        Ok(Self {
            unit_table_path,
            workers,
        })
    }

    /// Load the configured unit table, or the reference table when none is set
    pub fn load_unit_table(&self) -> Result<UnitTable, ConfigError> {
        match &self.unit_table_path {
            Some(path) => UnitTable::from_json_file(path),
            None => {
                info!("Using reference unit table");
                Ok(UnitTable::reference())
            }
        }
    }
}
