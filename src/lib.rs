//! # huffpack
//!
//! Minimum-redundancy (Huffman) compression for byte-oriented text, producing
//! a self-describing artifact that embeds its own codebook.
//!
//! The pipeline is the classic one: count symbol frequencies, greedily merge
//! the two lightest nodes into a binary prefix tree, walk the tree to assign
//! each symbol a prefix-free codeword, then pack the codeword stream into
//! bytes together with a serialized codebook header.
//!
//! ```rust
//! let artifact = huffpack::compress(b"abracadabra")?;
//! let text = huffpack::decompress(artifact)?;
//! assert_eq!(text, b"abracadabra");
//! # Ok::<(), huffpack::HuffmanError>(())
//! ```

pub mod error;
pub mod huffman;
pub mod utils;

pub use error::HuffmanError;
pub use huffman::decoder::decompress;
pub use huffman::encoder::compress;
pub use huffman::CompressedArtifact;

/// The type representing a single input symbol. The whole format assumes
/// single-byte symbols: the header stores each symbol as one literal byte.
pub type Symbol = u8;

/// The type representing the occurrence count of a symbol.
pub type Freq = usize;

/// The type representing the codeword assigned to a symbol: a non-empty
/// bit-string read most-significant bit first.
pub type Codeword = Vec<bool>;

/// Width in bytes of the big-endian field giving the header length in
/// characters.
pub const HEADER_LEN_BYTES: usize = 2;

/// Width in bytes of the big-endian field giving the number of meaningful
/// payload bits. Without it, leading and trailing zero bits would be
/// indistinguishable from padding.
pub const BIT_COUNT_BYTES: usize = 4;
