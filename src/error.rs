use thiserror::Error;

use crate::Symbol;

/// The failures the codec can surface. Every error is reported to the
/// immediate caller; compression is deterministic, so nothing is retried.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Frequency analysis received no symbols. Tree construction has no
    /// valid operation on zero symbols, so the pipeline refuses to start.
    #[error("cannot compress an empty input")]
    EmptyInput,

    /// An input symbol has no codeword in the encoding table. The pipeline
    /// always builds the table from the same input it encodes, so hitting
    /// this means an internal invariant was broken.
    #[error("symbol {0:#04x} has no codeword in the encoding table")]
    UnknownSymbol(Symbol),

    /// The artifact could not be decoded: the header did not parse, a
    /// codeword path left the decode tree, or a declared length field
    /// disagreed with the bytes actually present.
    #[error("malformed artifact: {0}")]
    MalformedArtifact(String),

    /// The serialized codebook does not fit the 2-byte header length field.
    #[error("codebook of {0} characters does not fit the 2-byte header length field")]
    CodebookOverflow(usize),

    /// The packed payload does not fit the 4-byte bit count field.
    #[error("payload of {0} bits does not fit the 4-byte bit count field")]
    PayloadOverflow(usize),
}

impl HuffmanError {
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        HuffmanError::MalformedArtifact(detail.into())
    }
}
