//! Record generator producing log-event rows.

use crate::generators::{generate_int_range, generate_one_of, maybe};
use crate::record::{IntFields, LogRecord, StrFields};
use crate::{COUNT_MAX, EVENTS, MESSAGES, TS_BASE, TS_MAX_OFFSET};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generator that produces pseudo-random log records.
///
/// Every record is sampled independently. The only state carried between
/// calls is the RNG itself and a running count of records produced.
pub struct RecordGenerator {
    /// Random number generator, seeded or OS-seeded
    rng: StdRng,
    /// Number of records produced so far
    generated: u64,
}

impl RecordGenerator {
    /// Create a generator with a fixed seed. Same seed, same records.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a generator around an existing RNG.
    pub fn with_rng(rng: StdRng) -> Self {
        Self { rng, generated: 0 }
    }

    /// Number of records produced by this generator.
    pub fn records_generated(&self) -> u64 {
        self.generated
    }

    /// Build one freshly sampled log record.
    pub fn build_record(&mut self) -> LogRecord {
        let rng = &mut self.rng;

        let ts = TS_BASE + generate_int_range(rng, 0, TS_MAX_OFFSET);
        let event = generate_one_of(rng, &EVENTS);
        let message = maybe(rng, |rng| generate_one_of(rng, &MESSAGES));
        let count = maybe(rng, |rng| generate_int_range(rng, 0, COUNT_MAX));

        self.generated += 1;

        LogRecord {
            int: IntFields { ts, count },
            str: StrFields { event, message },
        }
    }

    /// Lazily build `count` records.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily builds log records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = LogRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.build_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}
