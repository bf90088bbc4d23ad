//! Resolved fixture configuration.

use std::path::PathBuf;

/// Number of rows written when none is given.
pub const DEFAULT_ROW_COUNT: u64 = 100;

/// Output file written when no path is given.
pub const DEFAULT_FILE_PATH: &str = "log.json";

/// Fully resolved settings for one fixture run.
///
/// Defaults are applied once, at the entry boundary, so the populate step
/// never deals with optional parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Number of records to write
    pub row_count: u64,
    /// Destination file, created or truncated
    pub file_path: PathBuf,
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_COUNT,
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            seed: None,
        }
    }
}
