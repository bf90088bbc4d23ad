//! Log-event record generator for log-fixture-gen.
//!
//! This crate provides the `RecordGenerator` which produces pseudo-random
//! log-event records. The random source is owned by the generator, so tests
//! can seed it for reproducible output while production runs seed it from
//! the OS.
//!
//! # Architecture
//!
//! ```text
//! seed / entropy
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ RecordGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - generated     │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    LogRecord { int: { ts, count? }, str: { event, message? } }
//! ```
//!
//! # Example
//!
//! ```rust
//! use log_fixture_generator::RecordGenerator;
//!
//! let mut generator = RecordGenerator::new(42);
//! let record = generator.build_record();
//! assert!(log_fixture_generator::EVENTS.contains(&record.str.event));
//! ```
//!
//! # Fields
//!
//! - `int.ts` - `TS_BASE` plus a uniform offset in `0..=TS_MAX_OFFSET`
//! - `int.count` - optional, uniform in `0..=COUNT_MAX`
//! - `str.event` - one of `EVENTS`
//! - `str.message` - optional, one of `MESSAGES`
//!
//! Optional fields are included independently on a fair coin flip.

pub mod generator;
pub mod generators;
pub mod record;

// Re-exports for convenience
pub use generator::{RecordGenerator, RecordIterator};
pub use record::{IntFields, LogRecord, StrFields};

/// Base timestamp every generated `ts` is offset from.
pub const TS_BASE: i64 = 1_641_672_504;

/// Largest offset (inclusive) added to `TS_BASE`.
pub const TS_MAX_OFFSET: i64 = 100_000;

/// Largest value (inclusive) of the optional `count` field.
pub const COUNT_MAX: u32 = 1000;

/// Vocabulary for `str.event`.
pub const EVENTS: [&str; 3] = ["init_app", "exception", "edit"];

/// Vocabulary for `str.message`.
pub const MESSAGES: [&str; 3] = ["ok", "yay", "hi"];
