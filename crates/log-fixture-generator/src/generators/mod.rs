//! Individual value generators.
//!
//! Each function draws from the caller's RNG so the record generator stays
//! the single owner of random state.

pub mod choice;
pub mod numeric;

pub use choice::{coin_flip, generate_one_of, maybe};
pub use numeric::generate_int_range;
