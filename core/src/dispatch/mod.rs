//! Lowering of typed operators to coprocessor calls.
//!
//! The functions here work on width-erased [`Operand`]s and raw words. The
//! trait implementations in the submodules wrap them with the handle types
//! fixed by [`crate::promotion`].

mod arithmetic;
mod convert;
mod reencrypt;
mod require;
mod select;
mod unary;

use backend::{
    api::CoprocessorCall,
    codec::{Request, is_zero_word},
    layouts::{Backend, Handle, Module, Opcode, Operand, OperandKind, Result, Width, WidthTag, Word},
};

use crate::{
    operator::{BinaryOp, UnaryOp},
    promotion::plan_binary,
};

/// Result word of an operation together with its resolved width.
pub(crate) type Output = (Word, WidthTag);

pub(crate) fn wrap<W: Width>((word, width): Output) -> Handle<W> {
    debug_assert_eq!(width, W::TAG, "declared width of the result");
    Handle::from_word(word)
}

/// Runs `op` on `lhs` and `rhs`: at most one cast and one operation call.
#[tracing::instrument(level = "trace", skip_all, fields(op = ?op, lhs = %lhs.width, rhs = %rhs.width))]
pub(crate) fn binary<B>(module: &Module<B>, op: BinaryOp, lhs: Operand, rhs: Operand) -> Result<Output>
where
    B: Backend,
    Module<B>: CoprocessorCall,
{
    let plan = plan_binary(op, &lhs, &rhs);

    if op.has_zero_shortcut() {
        if let Some(survivor) = zero_survivor(&lhs, &rhs) {
            tracing::trace!("zero operand, call skipped");
            return promote(module, &survivor, plan.width);
        }
    }

    let lhs_word: Word = if plan.cast_lhs {
        cast(module, &lhs.word, plan.width)?
    } else {
        lhs.word
    };
    let rhs_word: Word = if plan.cast_rhs {
        cast(module, &rhs.word, plan.width)?
    } else {
        rhs.word
    };
    let (a, b) = if plan.swap {
        (rhs_word, lhs_word)
    } else {
        (lhs_word, rhs_word)
    };

    let response = module.call(&Request::binary(plan.op.opcode(), &a, &b, plan.scalar))?;
    Ok((response.handle_word()?, plan.width))
}

/// The operand returned as is by Add and Sub when the other one is zero.
///
/// A sentinel handle on either side yields the other handle, which is why
/// `0 - b` evaluates to `b`. A zero scalar yields the handle.
fn zero_survivor(lhs: &Operand, rhs: &Operand) -> Option<Operand> {
    match (lhs.kind, rhs.kind) {
        (OperandKind::Ciphertext, OperandKind::Ciphertext) if lhs.is_sentinel() => Some(*rhs),
        (OperandKind::Ciphertext, OperandKind::Ciphertext) if rhs.is_sentinel() => Some(*lhs),
        (OperandKind::Ciphertext, OperandKind::Plaintext) if rhs.is_zero_scalar() => Some(*lhs),
        (OperandKind::Plaintext, OperandKind::Ciphertext) if lhs.is_zero_scalar() => Some(*rhs),
        _ => None,
    }
}

/// Brings a short-circuited ciphertext to the resolved width.
///
/// The sentinel is width-agnostic and is returned without a call.
fn promote<B>(module: &Module<B>, operand: &Operand, width: WidthTag) -> Result<Output>
where
    B: Backend,
    Module<B>: CoprocessorCall,
{
    if operand.width == width || is_zero_word(&operand.word) {
        Ok((operand.word, width))
    } else {
        Ok((cast(module, &operand.word, width)?, width))
    }
}

pub(crate) fn cast<B>(module: &Module<B>, word: &Word, to: WidthTag) -> Result<Word>
where
    B: Backend,
    Module<B>: CoprocessorCall,
{
    module.call(&Request::cast(word, to))?.handle_word()
}

pub(crate) fn unary<B>(module: &Module<B>, op: UnaryOp, word: &Word) -> Result<Word>
where
    B: Backend,
    Module<B>: CoprocessorCall,
{
    module.call(&Request::unary(op.opcode(), word))?.handle_word()
}

/// Raw ciphertext-ciphertext call, bypassing promotion and the zero
/// shortcut.
pub(crate) fn raw_binary<B>(module: &Module<B>, opcode: Opcode, a: &Word, b: &Word) -> Result<Word>
where
    B: Backend,
    Module<B>: CoprocessorCall,
{
    module.call(&Request::binary(opcode, a, b, false))?.handle_word()
}
