//! Numeric value generators.

use rand::distributions::uniform::SampleUniform;
use rand::Rng;

/// Generate a random integer in the given range (inclusive).
///
/// Panics if `max < min`.
pub fn generate_int_range<R, T>(rng: &mut R, min: T, max: T) -> T
where
    R: Rng,
    T: SampleUniform + PartialOrd + Copy,
{
    debug_assert!(min <= max, "empty integer range");
    rng.gen_range(min..=max)
}
