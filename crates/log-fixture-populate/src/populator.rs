//! NDJSON fixture populator.

use crate::config::FixtureConfig;
use crate::error::PopulateError;
use log_fixture_generator::RecordGenerator;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Capacity of the buffered writer wrapped around the output file.
const WRITE_BUFFER_CAPACITY: usize = 64 * 1024;

/// Rows between progress messages.
const PROGRESS_INTERVAL: u64 = 10_000;

/// What a finished populate run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulateMetrics {
    /// Lines written to the fixture file
    pub rows_written: u64,
    /// Size of the fixture file after the final flush
    pub file_size_bytes: u64,
    /// Wall time from opening the file to the final flush
    pub elapsed: Duration,
}

impl PopulateMetrics {
    /// Write throughput; zero when no time was measured.
    pub fn rows_per_second(&self) -> f64 {
        match self.elapsed.as_secs_f64() {
            secs if secs > 0.0 => self.rows_written as f64 / secs,
            _ => 0.0,
        }
    }
}

/// Populator that writes log-record fixture files.
pub struct FixturePopulator {
    generator: RecordGenerator,
}

impl FixturePopulator {
    /// Create a populator around an existing record generator.
    pub fn new(generator: RecordGenerator) -> Self {
        Self { generator }
    }

    /// Create a populator with a fixed seed for reproducible files.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(RecordGenerator::new(seed))
    }

    /// Create a populator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(RecordGenerator::from_entropy())
    }

    /// Create a populator matching a resolved configuration's seed.
    pub fn from_config(config: &FixtureConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Get a reference to the underlying generator.
    pub fn generator(&self) -> &RecordGenerator {
        &self.generator
    }

    /// Write `count` records to `output_path`, one JSON object per line.
    ///
    /// The file is created if missing and truncated if present, so a zero
    /// count still leaves an empty file behind. Rows already flushed stay on
    /// disk if a later write fails.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        count: u64,
        output_path: P,
    ) -> Result<PopulateMetrics, PopulateError> {
        let output_path = output_path.as_ref();
        info!(
            "Generating fixture file '{}' with {} rows",
            output_path.display(),
            count
        );

        let started = Instant::now();
        let file = File::create(output_path)?;
        let mut writer = BufWriter::with_capacity(WRITE_BUFFER_CAPACITY, file);

        let mut rows_written = 0;
        for record in self.generator.records(count) {
            serde_json::to_writer(&mut writer, &record)?;
            writer.write_all(b"\n")?;

            rows_written += 1;
            if rows_written % PROGRESS_INTERVAL == 0 {
                debug!("Written {} rows", rows_written);
            }
        }

        // Surface flush errors here rather than losing them in drop.
        writer.flush()?;
        let file_size_bytes = writer.get_ref().metadata()?.len();
        drop(writer);

        let metrics = PopulateMetrics {
            rows_written,
            file_size_bytes,
            elapsed: started.elapsed(),
        };

        info!(
            "Fixture generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.elapsed,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}
