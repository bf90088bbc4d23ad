//! log-fixture-gen library
//!
//! Generates newline-delimited JSON files of synthetic log events for use as
//! fixtures in storage and ingestion tests.
//!
//! # Record format
//!
//! ```text
//! {"int":{"ts":<integer>[,"count":<integer>]},"str":{"event":"<string>"[,"message":"<string>"]}}
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # 100 rows into ./log.json
//! log-fixture-gen
//!
//! # 5000 reproducible rows into a custom path
//! log-fixture-gen 5000 fixtures/events.json --seed 42
//! ```

use anyhow::Context;

// Re-export the generator and populator crates for convenience
pub use log_fixture_generator as generator;
pub use log_fixture_populate as populate;

pub use log_fixture_populate::{FixtureArgs, FixtureConfig, FixturePopulator, PopulateMetrics};

/// Write the fixture file described by `config`.
pub fn run(config: &FixtureConfig) -> anyhow::Result<PopulateMetrics> {
    if let Some(seed) = config.seed {
        tracing::info!("Using fixed seed {}", seed);
    }

    FixturePopulator::from_config(config)
        .populate(config.row_count, &config.file_path)
        .with_context(|| {
            format!(
                "Failed to write fixture file {}",
                config.file_path.display()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_requested_rows() {
        let temp_dir = TempDir::new().unwrap();
        let config = FixtureConfig {
            row_count: 7,
            file_path: temp_dir.path().join("log.json"),
            seed: Some(42),
        };

        let metrics = run(&config).unwrap();

        assert_eq!(metrics.rows_written, 7);
        let content = std::fs::read_to_string(&config.file_path).unwrap();
        assert_eq!(content.lines().count(), 7);
    }

    #[test]
    fn test_run_error_names_the_path() {
        let temp_dir = TempDir::new().unwrap();
        let config = FixtureConfig {
            row_count: 1,
            file_path: temp_dir.path().join("no-such-dir").join("log.json"),
            seed: None,
        };

        let err = run(&config).unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("Failed to write fixture file"));
        assert!(message.contains("no-such-dir"));
    }
}
