use log::debug;

use crate::error::HuffmanError;
use crate::huffman::bits::BitWriter;
use crate::huffman::code_table::EncodingTable;
use crate::huffman::frequencies::FrequencyTable;
use crate::huffman::tree::HuffmanTree;
use crate::huffman::CompressedArtifact;

/// Encodes symbol sequences against a fixed encoding table.
pub struct HuffmanEncoder {
    table: EncodingTable,
}

impl HuffmanEncoder {
    /// Builds the encoder for `input`: frequency analysis, tree
    /// construction, code assignment.
    pub fn from_input(input: &[u8]) -> Result<Self, HuffmanError> {
        let frequencies = FrequencyTable::from_bytes(input)?;
        let tree = HuffmanTree::from_frequencies(&frequencies);
        let table = EncodingTable::from_tree(&tree);

        debug!(
            "built codebook: {} distinct symbols, entropy {:.3} bits/symbol, mean code length {:.3}",
            table.len(),
            crate::utils::entropy(&frequencies),
            crate::utils::mean_code_length(&frequencies, &table),
        );

        Ok(Self { table })
    }

    pub fn with_table(table: EncodingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &EncodingTable {
        &self.table
    }

    /// Replaces each input symbol by its codeword, in input order, and packs
    /// the concatenated bit-string into an artifact together with the
    /// serialized codebook.
    ///
    /// A symbol without a codeword surfaces as [`HuffmanError::UnknownSymbol`].
    /// The pipeline never produces one, since the table is built from the
    /// input it encodes; the check guards callers bringing their own table.
    pub fn encode(&self, input: &[u8]) -> Result<CompressedArtifact, HuffmanError> {
        let mut writer = BitWriter::new();

        for &symbol in input {
            let code = self
                .table
                .get(symbol)
                .ok_or(HuffmanError::UnknownSymbol(symbol))?;
            writer.write_bits(code);
        }

        let (payload, payload_bits) = writer.finish();
        CompressedArtifact::new(self.table.serialize_header(), payload, payload_bits)
    }
}

/// Compresses `input` into a self-describing artifact.
///
/// This is the whole pipeline in one call: count frequencies, build the
/// prefix tree, assign codewords, pack the bitstream.
pub fn compress(input: &[u8]) -> Result<CompressedArtifact, HuffmanError> {
    HuffmanEncoder::from_input(input)?.encode(input)
}
