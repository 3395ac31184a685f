//! Byte-level marshalling of coprocessor requests and responses.
//!
//! Every multi-byte integer is a fixed 32-byte big-endian word, and every
//! request is a concatenation of fixed-size fields. The only variable-length
//! field is the raw ciphertext of a verification request. No call site
//! builds a buffer by hand: requests are produced by [`Request`] and
//! responses are read through [`Response`]. The `decode_*` functions parse
//! requests on the service side and are used by backends.

use rug::{Integer, integer::Order};

use crate::layouts::{
    CoprocessorParams, ExternalCallFailed, Opcode, PublicKeyBlob, Result, SealedEnvelope, WORD_BYTES, WidthTag, Word, ZERO_WORD,
};

/// Scalar-flag byte: word B is a ciphertext handle.
pub const SCALAR_FLAG_CIPHERTEXT: u8 = 0x00;

/// Scalar-flag byte: word B is a plaintext value.
pub const SCALAR_FLAG_PLAINTEXT: u8 = 0x01;

/// Single byte sent with a public-key fetch, signalling a library caller.
pub const PUBLIC_KEY_MARKER: u8 = 0x01;

/// Size of a binary-operator request: two words and the scalar flag.
pub const BINARY_REQUEST_BYTES: usize = 2 * WORD_BYTES + 1;

#[inline]
pub fn is_zero_word(word: &Word) -> bool {
    *word == ZERO_WORD
}

pub fn word_from_u64(value: u64) -> Word {
    let mut word: Word = ZERO_WORD;
    word[WORD_BYTES - 8..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encodes `value` modulo `2^256` (negative values in two's complement).
pub fn word_from_integer(value: &Integer) -> Word {
    let reduced: Integer = value.clone().keep_bits(8 * WORD_BYTES as u32);
    let digits: Vec<u8> = reduced.to_digits::<u8>(Order::MsfBe);
    let mut word: Word = ZERO_WORD;
    word[WORD_BYTES - digits.len()..].copy_from_slice(&digits);
    word
}

pub fn word_to_integer(word: &Word) -> Integer {
    Integer::from_digits(word, Order::MsfBe)
}

/// A request to the coprocessor: an operation code, its payload and the
/// fixed size of the expected response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    opcode: Opcode,
    payload: Vec<u8>,
    response_len: usize,
}

impl Request {
    /// `a ‖ b ‖ scalar-flag`, answered by a handle.
    pub fn binary(opcode: Opcode, a: &Word, b: &Word, scalar: bool) -> Self {
        let mut payload: Vec<u8> = Vec::with_capacity(BINARY_REQUEST_BYTES);
        payload.extend_from_slice(a);
        payload.extend_from_slice(b);
        payload.push(if scalar {
            SCALAR_FLAG_PLAINTEXT
        } else {
            SCALAR_FLAG_CIPHERTEXT
        });
        Self {
            opcode,
            payload,
            response_len: WORD_BYTES,
        }
    }

    /// A single word, answered by a handle.
    pub fn unary(opcode: Opcode, a: &Word) -> Self {
        Self {
            opcode,
            payload: a.to_vec(),
            response_len: WORD_BYTES,
        }
    }

    /// A single word, no response.
    pub fn require(a: &Word) -> Self {
        Self {
            opcode: Opcode::Require,
            payload: a.to_vec(),
            response_len: 0,
        }
    }

    /// The concatenated words of a batch of optimistic assertions, no response.
    ///
    /// The payload holds one 32-byte handle word per registered assertion,
    /// `k * 32` bytes for `k` assertions. Backends must accept any non-zero
    /// multiple of 32 and fail the call if any entry is false.
    pub fn optimistic_require<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let payload: Vec<u8> = words.into_iter().flat_map(|w| w.iter().copied()).collect();
        Self {
            opcode: Opcode::OptimisticRequire,
            payload,
            response_len: 0,
        }
    }

    /// `handle ‖ target-tag`.
    pub fn cast(a: &Word, to: WidthTag) -> Self {
        Self::tagged(Opcode::Cast, a, to)
    }

    /// `value ‖ target-tag`.
    pub fn trivial_encrypt(value: &Word, to: WidthTag) -> Self {
        Self::tagged(Opcode::TrivialEncrypt, value, to)
    }

    /// `raw-ciphertext ‖ target-tag`.
    pub fn verify(raw: &[u8], to: WidthTag) -> Self {
        let mut payload: Vec<u8> = Vec::with_capacity(raw.len() + 1);
        payload.extend_from_slice(raw);
        payload.push(to.tag());
        Self {
            opcode: Opcode::Verify,
            payload,
            response_len: WORD_BYTES,
        }
    }

    /// `handle ‖ public-key`, answered by a sealed envelope.
    pub fn reencrypt(a: &Word, public_key: &Word, params: &CoprocessorParams) -> Self {
        let mut payload: Vec<u8> = Vec::with_capacity(2 * WORD_BYTES);
        payload.extend_from_slice(a);
        payload.extend_from_slice(public_key);
        Self {
            opcode: Opcode::Reencrypt,
            payload,
            response_len: params.envelope_bytes(),
        }
    }

    /// The marker byte, answered by the public-key blob.
    pub fn public_key(params: &CoprocessorParams) -> Self {
        Self {
            opcode: Opcode::FhePubKey,
            payload: vec![PUBLIC_KEY_MARKER],
            response_len: params.public_key_blob_bytes(),
        }
    }

    fn tagged(opcode: Opcode, a: &Word, to: WidthTag) -> Self {
        let mut payload: Vec<u8> = Vec::with_capacity(WORD_BYTES + 1);
        payload.extend_from_slice(a);
        payload.push(to.tag());
        Self {
            opcode,
            payload,
            response_len: WORD_BYTES,
        }
    }

    #[inline]
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    #[inline]
    pub fn response_len(&self) -> usize {
        self.response_len
    }
}

/// Bytes returned by the coprocessor for one [`Request`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    opcode: Opcode,
    bytes: Vec<u8>,
}

impl Response {
    pub fn new(opcode: Opcode, bytes: Vec<u8>) -> Self {
        Self { opcode, bytes }
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn handle_word(&self) -> Result<Word> {
        self.bytes
            .as_slice()
            .try_into()
            .map_err(|_| ExternalCallFailed::truncated(self.opcode, WORD_BYTES, self.bytes.len()))
    }

    pub fn into_envelope(self, params: &CoprocessorParams) -> Result<SealedEnvelope> {
        self.expect_len(params.envelope_bytes())?;
        Ok(SealedEnvelope::new(self.bytes))
    }

    pub fn into_public_key(self, params: &CoprocessorParams) -> Result<PublicKeyBlob> {
        self.expect_len(params.public_key_blob_bytes())?;
        Ok(PublicKeyBlob::new(self.bytes))
    }

    fn expect_len(&self, expected: usize) -> Result<()> {
        if self.bytes.len() != expected {
            return Err(ExternalCallFailed::truncated(self.opcode, expected, self.bytes.len()));
        }
        Ok(())
    }
}

/// Parsed binary-operator payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryPayload {
    pub a: Word,
    pub b: Word,
    pub scalar: bool,
}

pub fn decode_binary(payload: &[u8]) -> Option<BinaryPayload> {
    if payload.len() != BINARY_REQUEST_BYTES {
        return None;
    }
    let scalar: bool = match payload[2 * WORD_BYTES] {
        SCALAR_FLAG_CIPHERTEXT => false,
        SCALAR_FLAG_PLAINTEXT => true,
        _ => return None,
    };
    Some(BinaryPayload {
        a: payload[..WORD_BYTES].try_into().ok()?,
        b: payload[WORD_BYTES..2 * WORD_BYTES].try_into().ok()?,
        scalar,
    })
}

pub fn decode_word(payload: &[u8]) -> Option<Word> {
    payload.try_into().ok()
}

/// Parses `word ‖ target-tag`.
pub fn decode_tagged_word(payload: &[u8]) -> Option<(Word, WidthTag)> {
    let (tag, word) = payload.split_last()?;
    Some((word.try_into().ok()?, WidthTag::from_tag(*tag)?))
}

/// Parses `raw-ciphertext ‖ target-tag`. The raw part must not be empty.
pub fn decode_verify(payload: &[u8]) -> Option<(&[u8], WidthTag)> {
    let (tag, raw) = payload.split_last()?;
    if raw.is_empty() {
        return None;
    }
    Some((raw, WidthTag::from_tag(*tag)?))
}

/// Parses `handle ‖ public-key`.
pub fn decode_reencrypt(payload: &[u8]) -> Option<(Word, Word)> {
    if payload.len() != 2 * WORD_BYTES {
        return None;
    }
    Some((
        payload[..WORD_BYTES].try_into().ok()?,
        payload[WORD_BYTES..].try_into().ok()?,
    ))
}

/// Parses a non-empty concatenation of words.
pub fn decode_words(payload: &[u8]) -> Option<Vec<Word>> {
    if payload.is_empty() || payload.len() % WORD_BYTES != 0 {
        return None;
    }
    payload
        .chunks_exact(WORD_BYTES)
        .map(|chunk| chunk.try_into().ok())
        .collect()
}
