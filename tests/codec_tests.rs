mod common;

use huffpack::huffman::code_table::EncodingTable;
use huffpack::huffman::encoder::HuffmanEncoder;
use huffpack::huffman::frequencies::FrequencyTable;
use huffpack::huffman::tree::HuffmanTree;
use huffpack::{compress, decompress, HuffmanError};

use crate::common::random_text;

#[test]
fn random_texts_round_trip() {
    for seed in 0..8 {
        let text = random_text(seed, 10_000);
        let artifact = compress(&text).unwrap();

        assert_eq!(text, decompress(artifact).unwrap());
    }
}

#[test]
fn compression_is_deterministic() {
    let text = random_text(42, 50_000);

    let first = compress(&text).unwrap().to_bytes();
    let second = compress(&text).unwrap().to_bytes();

    assert_eq!(first, second);
}

#[test]
fn single_repeated_symbol_round_trips() {
    let artifact = compress(b"aaaa").unwrap();

    // the lone symbol still costs one bit per occurrence
    assert_eq!(artifact.payload_bits, 4);
    assert_eq!(decompress(artifact).unwrap(), b"aaaa");
}

#[test]
fn single_occurrence_input_round_trips() {
    let artifact = compress(b"x").unwrap();

    assert_eq!(artifact.payload_bits, 1);
    assert_eq!(decompress(artifact).unwrap(), b"x");
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(compress(b""), Err(HuffmanError::EmptyInput)));
}

#[test]
fn abracadabra_beats_fixed_width_and_round_trips() {
    let text = b"abracadabra";

    let frequencies = FrequencyTable::from_bytes(text).unwrap();
    assert_eq!(frequencies.count(b'a'), 5);
    assert_eq!(frequencies.count(b'b'), 2);
    assert_eq!(frequencies.count(b'r'), 2);
    assert_eq!(frequencies.count(b'c'), 1);
    assert_eq!(frequencies.count(b'd'), 1);

    let artifact = compress(text).unwrap();

    // 5 distinct symbols need 3 bits each under a fixed-width code
    assert!(artifact.payload_bits <= text.len() * 3);
    assert_eq!(decompress(artifact).unwrap(), text);
}

#[test]
fn encoding_with_a_foreign_table_reports_the_unknown_symbol() {
    let frequencies = FrequencyTable::from_bytes(b"ab").unwrap();
    let tree = HuffmanTree::from_frequencies(&frequencies);
    let encoder = HuffmanEncoder::with_table(EncodingTable::from_tree(&tree));

    assert!(matches!(
        encoder.encode(b"abc"),
        Err(HuffmanError::UnknownSymbol(b'c'))
    ));
}

#[test]
fn artifact_survives_a_trip_through_storage() {
    let text = random_text(7, 5_000);
    let artifact = compress(&text).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("text.hp");

    artifact.store(&path).unwrap();
    let reloaded = huffpack::CompressedArtifact::load(&path).unwrap();

    assert_eq!(artifact, reloaded);
    assert_eq!(text, decompress(reloaded).unwrap());
}
