//! CLI argument definitions for the fixture populator.

use clap::Args;
use std::path::PathBuf;

use crate::config::{FixtureConfig, DEFAULT_FILE_PATH, DEFAULT_ROW_COUNT};

/// Fixture generation arguments.
#[derive(Args, Clone, Debug)]
pub struct FixtureArgs {
    /// Number of log records to write
    #[arg(value_name = "ROW_COUNT", default_value_t = DEFAULT_ROW_COUNT)]
    pub row_count: u64,

    /// Output NDJSON file (created or truncated)
    #[arg(value_name = "FILE_PATH", default_value = DEFAULT_FILE_PATH)]
    pub file_path: PathBuf,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl FixtureArgs {
    /// Resolve parsed arguments into a fixture configuration.
    pub fn into_config(self) -> FixtureConfig {
        FixtureConfig {
            row_count: self.row_count,
            file_path: self.file_path,
            seed: self.seed,
        }
    }
}
