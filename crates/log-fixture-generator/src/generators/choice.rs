//! Selection and presence generators.

use rand::Rng;

/// Pick one value uniformly from `pool`.
///
/// `pool` must be non-empty; an empty array panics in `gen_range`.
pub fn generate_one_of<R: Rng, T: Copy, const N: usize>(rng: &mut R, pool: &[T; N]) -> T {
    pool[rng.gen_range(0..N)]
}

/// Fair coin flip.
pub fn coin_flip<R: Rng>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

/// Produce `Some(value)` on a fair coin flip, `None` otherwise.
///
/// The value is only generated when the coin lands on present, so an absent
/// field consumes no extra randomness.
pub fn maybe<R, T, F>(rng: &mut R, generate: F) -> Option<T>
where
    R: Rng,
    F: FnOnce(&mut R) -> T,
{
    if coin_flip(rng) {
        Some(generate(rng))
    } else {
        None
    }
}
