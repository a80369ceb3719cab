use std::ops::Neg;

use crate::huffman::code_table::EncodingTable;
use crate::huffman::frequencies::FrequencyTable;

/// Shannon entropy of the observed symbol distribution, in bits per symbol.
/// A lower bound on the mean code length any prefix code can reach.
pub fn entropy(frequencies: &FrequencyTable) -> f64 {
    let total = frequencies.total() as f64;
    let mut entropy = 0.0;

    for (_, freq) in frequencies.iter() {
        let pr = freq as f64 / total;
        entropy += pr * f64::log2(pr);
    }
    entropy.neg()
}

/// Mean codeword length in bits per symbol under the given table, weighted
/// by the observed frequencies.
pub fn mean_code_length(frequencies: &FrequencyTable, table: &EncodingTable) -> f64 {
    let total = frequencies.total() as f64;
    let mut weighted_bits = 0.0;

    for (symbol, freq) in frequencies.iter() {
        let code_len = table.get(symbol).map_or(0, |code| code.len());
        weighted_bits += freq as f64 * code_len as f64;
    }
    weighted_bits / total
}

/// Compressed size over original size. Below 1.0 means the artifact is
/// smaller than the input.
pub fn compression_ratio(original_len: usize, artifact_len: usize) -> f64 {
    artifact_len as f64 / original_len as f64
}
