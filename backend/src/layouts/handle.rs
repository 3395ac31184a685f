use std::{fmt::Debug, marker::PhantomData};

use crate::layouts::{W8, W16, W32, Width, WidthTag};

/// Number of bytes of a wire word.
pub const WORD_BYTES: usize = 32;

/// A 256-bit big-endian word.
pub type Word = [u8; WORD_BYTES];

/// The all-zero word, reserved as the "absent" handle value.
pub const ZERO_WORD: Word = [0u8; WORD_BYTES];

/// Opaque reference to a ciphertext held by the coprocessor.
///
/// The width is a type-level tag only; it is never part of the encoded
/// bytes. A handle never changes width in place: producing another width
/// always goes through a cast, a verification or a trivial encryption, each
/// of which returns a new handle.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle<W: Width> {
    word: Word,
    _width: PhantomData<W>,
}

pub type Euint8 = Handle<W8>;
pub type Euint16 = Handle<W16>;
pub type Euint32 = Handle<W32>;

impl<W: Width> Handle<W> {
    /// The sentinel handle: no ciphertext yet.
    pub const ZERO: Self = Self::from_word(ZERO_WORD);

    #[inline]
    pub const fn from_word(word: Word) -> Self {
        Self {
            word,
            _width: PhantomData,
        }
    }

    #[inline]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    pub fn width(&self) -> WidthTag {
        W::TAG
    }

    /// Returns `true` unless this is the sentinel.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.word != ZERO_WORD
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        !self.is_initialized()
    }
}

impl<W: Width> Default for Handle<W> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<W: Width> Debug for Handle<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Handle<{}>(0x", W::TAG)?;
        for byte in self.word.iter() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// A plaintext operand, typed by the declared parameter width it is passed as.
///
/// Scalars are never promoted; the ciphertext they are paired with is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scalar<W: Width> {
    value: W::Plain,
}

impl<W: Width> Scalar<W> {
    #[inline]
    pub fn new(value: W::Plain) -> Self {
        Self { value }
    }

    /// Scalar holding `value` reduced modulo `2^W`.
    #[inline]
    pub fn truncating(value: u64) -> Self {
        Self::new(W::truncate(value))
    }

    #[inline]
    pub fn value(&self) -> W::Plain {
        self.value
    }

    #[inline]
    pub fn width(&self) -> WidthTag {
        W::TAG
    }
}
