use crate::{
    codec,
    layouts::{Handle, Scalar, Width, WidthTag, Word},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandKind {
    Ciphertext,
    Plaintext,
}

/// Width-erased view of an operand, as consumed by the generic dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operand {
    pub word: Word,
    pub width: WidthTag,
    pub kind: OperandKind,
}

impl Operand {
    pub fn ciphertext(word: Word, width: WidthTag) -> Self {
        Self {
            word,
            width,
            kind: OperandKind::Ciphertext,
        }
    }

    pub fn plaintext(value: u64, width: WidthTag) -> Self {
        Self {
            word: codec::word_from_u64(value),
            width,
            kind: OperandKind::Plaintext,
        }
    }

    #[inline]
    pub fn is_ciphertext(&self) -> bool {
        self.kind == OperandKind::Ciphertext
    }

    #[inline]
    pub fn is_plaintext(&self) -> bool {
        self.kind == OperandKind::Plaintext
    }

    /// A ciphertext operand holding the sentinel word.
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.is_ciphertext() && codec::is_zero_word(&self.word)
    }

    /// A plaintext operand whose value is zero.
    #[inline]
    pub fn is_zero_scalar(&self) -> bool {
        self.is_plaintext() && codec::is_zero_word(&self.word)
    }
}

/// Conversion of a typed handle or scalar into an [`Operand`].
pub trait AsOperand {
    type Width: Width;

    fn as_operand(&self) -> Operand;
}

impl<W: Width> AsOperand for Handle<W> {
    type Width = W;

    fn as_operand(&self) -> Operand {
        Operand::ciphertext(*self.word(), W::TAG)
    }
}

impl<W: Width> AsOperand for Scalar<W> {
    type Width = W;

    fn as_operand(&self) -> Operand {
        Operand::plaintext(self.value().into(), W::TAG)
    }
}
