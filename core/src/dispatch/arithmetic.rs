use backend::{
    api::CoprocessorCall,
    layouts::{AsOperand, Backend, Handle, Module, Result, Width},
};

use crate::{
    api::{FheArithmetic, FheBitwise, FheComparison},
    dispatch::{binary, wrap},
    operator::BinaryOp,
    promotion::{BinaryOperands, Promote, Promoted},
};

fn typed<B, A, C>(module: &Module<B>, op: BinaryOp, a: &A, b: &C) -> Result<Handle<A::Output>>
where
    B: Backend,
    Module<B>: CoprocessorCall,
    A: BinaryOperands<C>,
    C: AsOperand,
{
    binary(module, op, a.as_operand(), b.as_operand()).map(wrap)
}

macro_rules! binary_methods {
    ($($name:ident => $op:expr;)*) => {
        $(
            fn $name<A, C>(&self, a: &A, b: &C) -> Result<Handle<A::Output>>
            where
                A: BinaryOperands<C>,
                C: AsOperand,
            {
                typed(self, $op, a, b)
            }
        )*
    };
}

impl<B> FheArithmetic for Module<B>
where
    B: Backend,
    Module<B>: CoprocessorCall,
{
    binary_methods! {
        fhe_add => BinaryOp::Add;
        fhe_sub => BinaryOp::Sub;
        fhe_mul => BinaryOp::Mul;
        fhe_shl => BinaryOp::Shl;
        fhe_shr => BinaryOp::Shr;
        fhe_min => BinaryOp::Min;
        fhe_max => BinaryOp::Max;
    }
}

impl<B> FheComparison for Module<B>
where
    B: Backend,
    Module<B>: CoprocessorCall,
{
    binary_methods! {
        fhe_eq => BinaryOp::Eq;
        fhe_ne => BinaryOp::Ne;
        fhe_ge => BinaryOp::Ge;
        fhe_gt => BinaryOp::Gt;
        fhe_le => BinaryOp::Le;
        fhe_lt => BinaryOp::Lt;
    }
}

impl<B> FheBitwise for Module<B>
where
    B: Backend,
    Module<B>: CoprocessorCall,
{
    fn fhe_and<L, R>(&self, a: &Handle<L>, b: &Handle<R>) -> Result<Handle<Promoted<L, R>>>
    where
        L: Promote<R>,
        R: Width,
    {
        binary(self, BinaryOp::And, a.as_operand(), b.as_operand()).map(wrap)
    }

    fn fhe_or<L, R>(&self, a: &Handle<L>, b: &Handle<R>) -> Result<Handle<Promoted<L, R>>>
    where
        L: Promote<R>,
        R: Width,
    {
        binary(self, BinaryOp::Or, a.as_operand(), b.as_operand()).map(wrap)
    }

    fn fhe_xor<L, R>(&self, a: &Handle<L>, b: &Handle<R>) -> Result<Handle<Promoted<L, R>>>
    where
        L: Promote<R>,
        R: Width,
    {
        binary(self, BinaryOp::Xor, a.as_operand(), b.as_operand()).map(wrap)
    }
}
