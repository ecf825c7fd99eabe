//! Random helpers shared by the spawner.

use crate::core::constants::PIPE_ID_BYTES;
use rand::Rng;
use std::fmt::Write;

/// Uniform float in `[min, max]`. A degenerate range returns `min`.
pub fn random_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

/// Short random identifier: 6 random bytes as 12 lowercase hex digits.
pub fn pipe_id<R: Rng>(rng: &mut R) -> String {
    let bytes: [u8; PIPE_ID_BYTES] = rng.gen();
    let mut id = String::with_capacity(PIPE_ID_BYTES * 2);
    for b in bytes {
        let _ = write!(id, "{:02x}", b);
    }
    id
}
