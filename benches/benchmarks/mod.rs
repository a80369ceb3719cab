pub mod decoder;
pub mod encoder;

use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

/// Size of the text used by the benchmarks.
pub const TEXT_LENGTH: usize = 1_000_000;

const ALPHABET: &[u8] = b"etaoin shrdlucmfwypvbgkjqxz,.";

/// Creates a pseudo-text of [`TEXT_LENGTH`] symbols with a fixed seed.
pub fn get_text(seed: u64) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut text = Vec::with_capacity(TEXT_LENGTH);

    for _ in 0..TEXT_LENGTH {
        text.push(ALPHABET[rng.gen_range(0..ALPHABET.len())]);
    }
    text
}
