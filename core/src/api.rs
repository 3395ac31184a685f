//! Operator traits, implemented for every [`Module`](backend::layouts::Module)
//! whose backend answers coprocessor calls.
//!
//! Each method issues its calls in a fixed order and stops at the first
//! failure. The returned handle is typed with the declared width of the
//! result.

use backend::layouts::{AsOperand, Handle, PublicKeyBlob, Result, SealedEnvelope, Width};
use rug::Integer;

use crate::{
    batch::DeferredAssertionBatch,
    promotion::{BinaryOperands, CastInto, Promote, Promoted},
};

/// Arithmetic, shifts and min/max.
///
/// Every method accepts handle-handle, handle-scalar and scalar-handle
/// pairs of any widths; the result has the wider width. `fhe_add` and
/// `fhe_sub` return the other operand unchanged, cast up when narrower,
/// when one side is zero.
///
/// Zero means the sentinel handle facing another handle, or a zero scalar.
/// The sentinel facing a non-zero scalar is not shortcut: it is sent to the
/// coprocessor as is, which rejects it as an unknown handle.
pub trait FheArithmetic {
    fn fhe_add<A, C>(&self, a: &A, b: &C) -> Result<Handle<A::Output>>
    where
        A: BinaryOperands<C>,
        C: AsOperand;

    /// `a - b`.
    ///
    /// With a sentinel handle on the left, returns `b`. With a scalar on the
    /// left, computes `b - a`.
    fn fhe_sub<A, C>(&self, a: &A, b: &C) -> Result<Handle<A::Output>>
    where
        A: BinaryOperands<C>,
        C: AsOperand;

    fn fhe_mul<A, C>(&self, a: &A, b: &C) -> Result<Handle<A::Output>>
    where
        A: BinaryOperands<C>,
        C: AsOperand;

    fn fhe_shl<A, C>(&self, a: &A, b: &C) -> Result<Handle<A::Output>>
    where
        A: BinaryOperands<C>,
        C: AsOperand;

    fn fhe_shr<A, C>(&self, a: &A, b: &C) -> Result<Handle<A::Output>>
    where
        A: BinaryOperands<C>,
        C: AsOperand;

    fn fhe_min<A, C>(&self, a: &A, b: &C) -> Result<Handle<A::Output>>
    where
        A: BinaryOperands<C>,
        C: AsOperand;

    fn fhe_max<A, C>(&self, a: &A, b: &C) -> Result<Handle<A::Output>>
    where
        A: BinaryOperands<C>,
        C: AsOperand;
}

/// Comparisons. The encrypted boolean result (0 or 1) has the resolved
/// width of the operands.
pub trait FheComparison {
    fn fhe_eq<A, C>(&self, a: &A, b: &C) -> Result<Handle<A::Output>>
    where
        A: BinaryOperands<C>,
        C: AsOperand;

    fn fhe_ne<A, C>(&self, a: &A, b: &C) -> Result<Handle<A::Output>>
    where
        A: BinaryOperands<C>,
        C: AsOperand;

    fn fhe_ge<A, C>(&self, a: &A, b: &C) -> Result<Handle<A::Output>>
    where
        A: BinaryOperands<C>,
        C: AsOperand;

    fn fhe_gt<A, C>(&self, a: &A, b: &C) -> Result<Handle<A::Output>>
    where
        A: BinaryOperands<C>,
        C: AsOperand;

    fn fhe_le<A, C>(&self, a: &A, b: &C) -> Result<Handle<A::Output>>
    where
        A: BinaryOperands<C>,
        C: AsOperand;

    fn fhe_lt<A, C>(&self, a: &A, b: &C) -> Result<Handle<A::Output>>
    where
        A: BinaryOperands<C>,
        C: AsOperand;
}

/// Bitwise operators, ciphertext operands only.
pub trait FheBitwise {
    fn fhe_and<L, R>(&self, a: &Handle<L>, b: &Handle<R>) -> Result<Handle<Promoted<L, R>>>
    where
        L: Promote<R>,
        R: Width;

    fn fhe_or<L, R>(&self, a: &Handle<L>, b: &Handle<R>) -> Result<Handle<Promoted<L, R>>>
    where
        L: Promote<R>,
        R: Width;

    fn fhe_xor<L, R>(&self, a: &Handle<L>, b: &Handle<R>) -> Result<Handle<Promoted<L, R>>>
    where
        L: Promote<R>,
        R: Width;
}

pub trait FheUnary {
    /// Two's complement negation modulo `2^W`.
    fn fhe_neg<W: Width>(&self, a: &Handle<W>) -> Result<Handle<W>>;

    /// Bitwise complement.
    fn fhe_not<W: Width>(&self, a: &Handle<W>) -> Result<Handle<W>>;
}

pub trait FheSelect {
    /// Encrypted multiplexer, `control * (if_true - if_false) + if_false`.
    ///
    /// `control` must hold 0 or 1; any other value yields an arithmetic
    /// combination, not a selection. Issues exactly three calls, Sub then
    /// Mul then Add, and stops at the first failure.
    fn fhe_cmux<W: Width>(&self, control: &Handle<W>, if_true: &Handle<W>, if_false: &Handle<W>) -> Result<Handle<W>>;
}

pub trait FheConvert {
    /// Re-declares a ciphertext at width `K`, truncating when narrowing.
    fn fhe_cast<J, K>(&self, a: &Handle<J>) -> Result<Handle<K>>
    where
        J: CastInto<K>,
        K: Width;

    /// Validates an externally produced ciphertext and registers it.
    fn fhe_verify<W: Width>(&self, ciphertext: &[u8]) -> Result<Handle<W>>;

    /// Encrypts a public constant without secret randomness. `value` is
    /// reduced to `W` by the coprocessor.
    fn fhe_trivial_encrypt<W: Width>(&self, value: &Integer) -> Result<Handle<W>>;
}

pub trait FheReencrypt {
    /// Seals the value behind `a` to a caller-supplied public key.
    ///
    /// The envelope always has the length of the widest width.
    fn fhe_reencrypt<W: Width>(&self, a: &Handle<W>, public_key: &[u8; 32]) -> Result<SealedEnvelope>;

    /// The coprocessor's network public key.
    fn fhe_public_key(&self) -> Result<PublicKeyBlob>;
}

pub trait FheRequire {
    /// Aborts the unit of work unless `a` decrypts to a non-zero value.
    fn fhe_require<W: Width>(&self, a: &Handle<W>) -> Result<()>;

    /// Registers `a` in `batch` for evaluation at the end of the unit of
    /// work.
    ///
    /// Handles narrower than the batch width are cast first, which is the
    /// only call this method may issue.
    fn fhe_optimistic_require<W: Width>(&self, batch: &mut DeferredAssertionBatch, a: &Handle<W>) -> Result<()>;
}
