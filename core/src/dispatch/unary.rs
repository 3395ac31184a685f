use backend::{
    api::CoprocessorCall,
    layouts::{Backend, Handle, Module, Result, Width},
};

use crate::{api::FheUnary, dispatch::unary, operator::UnaryOp};

impl<B> FheUnary for Module<B>
where
    B: Backend,
    Module<B>: CoprocessorCall,
{
    fn fhe_neg<W: Width>(&self, a: &Handle<W>) -> Result<Handle<W>> {
        unary(self, UnaryOp::Negate, a.word()).map(Handle::from_word)
    }

    fn fhe_not<W: Width>(&self, a: &Handle<W>) -> Result<Handle<W>> {
        unary(self, UnaryOp::Not, a.word()).map(Handle::from_word)
    }
}
