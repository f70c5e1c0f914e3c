//! Non-overlapping random streams for independent runs.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Returns `n` generators derived from one seed.
///
/// Stream `k` is the seeded generator advanced by `k` jumps of 2^128 draws,
/// so streams never overlap within any realistic run length.
pub fn independent_streams(seed: u64, n: usize) -> Vec<Xoshiro256PlusPlus> {
    let mut base = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let stream = base.clone();
            base.jump();
            stream
        })
        .collect()
}
