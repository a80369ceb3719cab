pub mod bits;
pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod frequencies;
pub mod tree;

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use anyhow::Context;

use crate::error::HuffmanError;
use crate::{BIT_COUNT_BYTES, HEADER_LEN_BYTES};

/// The result of compressing one input: the serialized codebook and the
/// packed codeword stream. Built once per compression call and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedArtifact {
    /// The serialized codebook: symbol byte + codeword characters per
    /// distinct symbol, in ascending symbol order.
    pub header: Vec<u8>,

    /// The concatenated codewords packed into bytes, MSB-first, zero-padded
    /// at the end.
    pub payload: Vec<u8>,

    /// How many payload bits are data rather than padding.
    pub payload_bits: usize,
}

impl CompressedArtifact {
    /// Assembles an artifact, rejecting anything the fixed-width fields of
    /// the wire format cannot represent.
    pub fn new(
        header: Vec<u8>,
        payload: Vec<u8>,
        payload_bits: usize,
    ) -> Result<Self, HuffmanError> {
        if header.len() > u16::MAX as usize {
            return Err(HuffmanError::CodebookOverflow(header.len()));
        }
        if payload_bits > u32::MAX as usize {
            return Err(HuffmanError::PayloadOverflow(payload_bits));
        }
        debug_assert_eq!(payload.len(), payload_bits.div_ceil(8));

        Ok(Self {
            header,
            payload,
            payload_bits,
        })
    }

    /// Serializes the artifact into its wire layout:
    ///
    /// ```text
    /// [2 bytes BE] header length in characters
    /// [N bytes]    header
    /// [4 bytes BE] meaningful payload bit count
    /// [⌈bits/8⌉ bytes] packed payload
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes =
            Vec::with_capacity(HEADER_LEN_BYTES + self.header.len() + BIT_COUNT_BYTES + self.payload.len());

        bytes.extend_from_slice(&(self.header.len() as u16).to_be_bytes());
        bytes.extend_from_slice(&self.header);
        bytes.extend_from_slice(&(self.payload_bits as u32).to_be_bytes());
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    /// Parses the wire layout back into an artifact. Exact inverse of
    /// [`to_bytes`](Self::to_bytes): every declared length must match the
    /// bytes actually present, and nothing may trail the payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HuffmanError> {
        let mut cursor = Cursor::new(bytes);

        let mut header_len = [0u8; HEADER_LEN_BYTES];
        cursor
            .read_exact(&mut header_len)
            .map_err(|_| HuffmanError::malformed("missing header length field"))?;
        let header_len = u16::from_be_bytes(header_len) as usize;

        let mut header = vec![0u8; header_len];
        cursor.read_exact(&mut header).map_err(|_| {
            HuffmanError::malformed(format!(
                "header declares {header_len} characters but fewer are present"
            ))
        })?;

        let mut bit_count = [0u8; BIT_COUNT_BYTES];
        cursor
            .read_exact(&mut bit_count)
            .map_err(|_| HuffmanError::malformed("missing payload bit count field"))?;
        let payload_bits = u32::from_be_bytes(bit_count) as usize;

        let mut payload = vec![0u8; payload_bits.div_ceil(8)];
        cursor.read_exact(&mut payload).map_err(|_| {
            HuffmanError::malformed(format!(
                "payload declares {payload_bits} bits but fewer bytes are present"
            ))
        })?;

        if cursor.position() != bytes.len() as u64 {
            return Err(HuffmanError::malformed("trailing bytes after the payload"));
        }

        Ok(Self {
            header,
            payload,
            payload_bits,
        })
    }

    /// Total size of the serialized artifact in bytes.
    pub fn serialized_len(&self) -> usize {
        HEADER_LEN_BYTES + self.header.len() + BIT_COUNT_BYTES + self.payload.len()
    }

    /// Writes the artifact to durable storage.
    pub fn store(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_bytes())
            .with_context(|| format!("writing artifact to {}", path.display()))
    }

    /// Reads an artifact back from storage, byte-for-byte.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .with_context(|| format!("reading artifact from {}", path.display()))?;

        Ok(Self::from_bytes(&bytes)?)
    }
}
