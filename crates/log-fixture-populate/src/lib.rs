//! NDJSON (newline-delimited JSON) fixture populator.
//!
//! This crate writes files of pseudo-random log-event records, one compact
//! JSON object per line, for use as fixtures in storage and ingestion tests.
//!
//! # Example
//!
//! ```ignore
//! use log_fixture_populate::FixturePopulator;
//!
//! let mut populator = FixturePopulator::with_seed(42);
//! let metrics = populator.populate(100, "log.json")?;
//! println!("Generated {} rows in {:?}", metrics.rows_written, metrics.elapsed);
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod populator;

pub use args::FixtureArgs;
pub use config::{FixtureConfig, DEFAULT_FILE_PATH, DEFAULT_ROW_COUNT};
pub use error::PopulateError;
pub use populator::{FixturePopulator, PopulateMetrics};
