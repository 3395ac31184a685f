use backend::{
    api::CoprocessorCall,
    layouts::{Backend, Handle, Module, Opcode, Result, Width, Word},
};

use crate::{api::FheSelect, dispatch::raw_binary};

impl<B> FheSelect for Module<B>
where
    B: Backend,
    Module<B>: CoprocessorCall,
{
    #[tracing::instrument(level = "trace", skip_all, fields(width = %W::TAG))]
    fn fhe_cmux<W: Width>(&self, control: &Handle<W>, if_true: &Handle<W>, if_false: &Handle<W>) -> Result<Handle<W>> {
        let diff: Word = raw_binary(self, Opcode::Subtract, if_true.word(), if_false.word())?;
        let scaled: Word = raw_binary(self, Opcode::Multiply, control.word(), &diff)?;
        raw_binary(self, Opcode::Add, &scaled, if_false.word()).map(Handle::from_word)
    }
}
