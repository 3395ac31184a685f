/// Ciphertext re-encrypted for a recipient public key.
///
/// Layout: header, anonymous-box overhead, then the sealed plaintext sized for
/// the widest supported width.
#[derive(Clone, PartialEq, Eq)]
pub struct SealedEnvelope {
    data: Vec<u8>,
}

impl SealedEnvelope {
    pub(crate) fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl std::fmt::Debug for SealedEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SealedEnvelope({} bytes)", self.data.len())
    }
}

/// The network public key, header included.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKeyBlob {
    data: Vec<u8>,
}

impl PublicKeyBlob {
    pub(crate) fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl std::fmt::Debug for PublicKeyBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKeyBlob({} bytes)", self.data.len())
    }
}
