use backend::{
    api::CoprocessorCall,
    codec::{Request, word_from_integer},
    layouts::{Backend, Handle, Module, Result, Width},
};
use rug::Integer;

use crate::{api::FheConvert, dispatch::cast, promotion::CastInto};

impl<B> FheConvert for Module<B>
where
    B: Backend,
    Module<B>: CoprocessorCall,
{
    fn fhe_cast<J, K>(&self, a: &Handle<J>) -> Result<Handle<K>>
    where
        J: CastInto<K>,
        K: Width,
    {
        cast(self, a.word(), K::TAG).map(Handle::from_word)
    }

    fn fhe_verify<W: Width>(&self, ciphertext: &[u8]) -> Result<Handle<W>> {
        tracing::trace!(len = ciphertext.len(), width = %W::TAG, "verify");
        self.call(&Request::verify(ciphertext, W::TAG))?
            .handle_word()
            .map(Handle::from_word)
    }

    fn fhe_trivial_encrypt<W: Width>(&self, value: &Integer) -> Result<Handle<W>> {
        self.call(&Request::trivial_encrypt(&word_from_integer(value), W::TAG))?
            .handle_word()
            .map(Handle::from_word)
    }
}
