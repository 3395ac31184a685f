//! Width promotion of mixed-width operands.
//!
//! Two widths resolve to the wider one, and the narrower ciphertext operand
//! is cast up before the call. Plaintext scalars are never cast: the scalar
//! flag tells the coprocessor to interpret them at the resolved width.

use backend::layouts::{AsOperand, Handle, Operand, Scalar, W8, W16, W32, Width, WidthTag};

use crate::operator::BinaryOp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastPlan {
    Keep,
    CastLhs,
    CastRhs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: WidthTag,
    pub plan: CastPlan,
}

/// Resolves the width of an operation on `lhs` and `rhs`.
pub const fn resolve(lhs: WidthTag, rhs: WidthTag) -> Resolution {
    let (l, r) = (lhs.bits(), rhs.bits());
    if l == r {
        Resolution {
            width: lhs,
            plan: CastPlan::Keep,
        }
    } else if l < r {
        Resolution {
            width: rhs,
            plan: CastPlan::CastLhs,
        }
    } else {
        Resolution {
            width: lhs,
            plan: CastPlan::CastRhs,
        }
    }
}

/// Type-level counterpart of [`resolve`].
pub trait Promote<Rhs: Width>: Width {
    type Output: Width;
}

pub type Promoted<L, R> = <L as Promote<R>>::Output;

macro_rules! promote {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;
            }
        )*
    };
}

promote! {
    W8, W8 => W8;
    W8, W16 => W16;
    W8, W32 => W32;
    W16, W8 => W16;
    W16, W16 => W16;
    W16, W32 => W32;
    W32, W8 => W32;
    W32, W16 => W32;
    W32, W32 => W32;
}

/// Operand pairs accepted by the arithmetic and comparison operators.
///
/// At least one side is a ciphertext handle: two plaintext scalars do not
/// form a valid pair.
pub trait BinaryOperands<Rhs: AsOperand>: AsOperand {
    type Output: Width;
}

impl<L: Promote<R>, R: Width> BinaryOperands<Handle<R>> for Handle<L> {
    type Output = Promoted<L, R>;
}

impl<L: Promote<R>, R: Width> BinaryOperands<Scalar<R>> for Handle<L> {
    type Output = Promoted<L, R>;
}

impl<L: Promote<R>, R: Width> BinaryOperands<Handle<R>> for Scalar<L> {
    type Output = Promoted<L, R>;
}

/// Explicit width conversions. Casting to the same width is not offered.
pub trait CastInto<K: Width>: Width {}

macro_rules! cast_into {
    ($($from:ty => $to:ty;)*) => {
        $(impl CastInto<$to> for $from {})*
    };
}

cast_into! {
    W8 => W16;
    W8 => W32;
    W16 => W8;
    W16 => W32;
    W32 => W8;
    W32 => W16;
}

/// How a binary operation is lowered to a single coprocessor call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryPlan {
    /// Operator actually sent, mirrored when the operands are swapped.
    pub op: BinaryOp,
    /// Resolved width, also the width of the result.
    pub width: WidthTag,
    pub cast_lhs: bool,
    pub cast_rhs: bool,
    /// Operands are sent in reverse order.
    pub swap: bool,
    /// Value of the scalar flag byte.
    pub scalar: bool,
}

/// Plans `op` on `lhs` and `rhs`.
///
/// A plaintext left operand is moved to the second word, so the ciphertext
/// always travels first and ordering comparisons are mirrored. A
/// ciphertext-ciphertext ordering comparison whose left operand needs the
/// cast is mirrored in the same way.
pub fn plan_binary(op: BinaryOp, lhs: &Operand, rhs: &Operand) -> BinaryPlan {
    debug_assert!(
        lhs.is_ciphertext() || rhs.is_ciphertext(),
        "two plaintext operands"
    );

    let Resolution { width, plan } = resolve(lhs.width, rhs.width);
    let scalar = lhs.is_plaintext() || rhs.is_plaintext();

    let swap = lhs.is_plaintext() || (!scalar && op.is_ordering() && plan == CastPlan::CastLhs);

    BinaryPlan {
        op: if swap { op.mirror() } else { op },
        width,
        cast_lhs: plan == CastPlan::CastLhs && lhs.is_ciphertext(),
        cast_rhs: plan == CastPlan::CastRhs && rhs.is_ciphertext(),
        swap,
        scalar: scalar && op.accepts_scalar(),
    }
}
