use crate::layouts::WidthTag;

/// Sizes of the coprocessor responses that are not 32-byte handles.
///
/// Supplied once, when the [`Module`](crate::layouts::Module) is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoprocessorParams {
    /// Length header prefixed to variable-size byte responses.
    pub header_bytes: usize,
    /// Overhead of the anonymous box sealing a re-encrypted value.
    pub envelope_overhead_bytes: usize,
    /// Size of the network public key, without header.
    pub public_key_bytes: usize,
}

impl CoprocessorParams {
    pub const DEFAULT_HEADER_BYTES: usize = 32;
    pub const DEFAULT_ENVELOPE_OVERHEAD_BYTES: usize = 48;
    pub const DEFAULT_PUBLIC_KEY_BYTES: usize = 16553;

    /// Size of a sealed envelope: header, overhead and the widest plaintext.
    pub fn envelope_bytes(&self) -> usize {
        self.header_bytes + self.envelope_overhead_bytes + WidthTag::MAX.bytes()
    }

    pub fn public_key_blob_bytes(&self) -> usize {
        self.header_bytes + self.public_key_bytes
    }
}

impl Default for CoprocessorParams {
    fn default() -> Self {
        Self {
            header_bytes: Self::DEFAULT_HEADER_BYTES,
            envelope_overhead_bytes: Self::DEFAULT_ENVELOPE_OVERHEAD_BYTES,
            public_key_bytes: Self::DEFAULT_PUBLIC_KEY_BYTES,
        }
    }
}
