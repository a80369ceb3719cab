/*
 * Utility functions and consts used by the tests.
 *
 */

use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

/// Alphabet the generated texts draw from.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz ,.";

/// Creates a pseudo-text of `len` symbols drawn from [`ALPHABET`] with a
/// fixed seed, so every run of the tests sees the same inputs.
pub fn random_text(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut text = Vec::with_capacity(len);

    for _ in 0..len {
        text.push(ALPHABET[rng.gen_range(0..ALPHABET.len())]);
    }
    text
}
