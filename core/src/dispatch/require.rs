use backend::{
    api::CoprocessorCall,
    codec::Request,
    layouts::{Backend, Handle, Module, Result, Width},
};

use crate::{
    api::FheRequire,
    batch::{Canonical, DeferredAssertionBatch},
    dispatch::cast,
};

impl<B> FheRequire for Module<B>
where
    B: Backend,
    Module<B>: CoprocessorCall,
{
    fn fhe_require<W: Width>(&self, a: &Handle<W>) -> Result<()> {
        self.call(&Request::require(a.word())).map(|_| ())
    }

    fn fhe_optimistic_require<W: Width>(&self, batch: &mut DeferredAssertionBatch, a: &Handle<W>) -> Result<()> {
        let canonical: Handle<Canonical> = if W::TAG == Canonical::TAG {
            Handle::from_word(*a.word())
        } else {
            Handle::from_word(cast(self, a.word(), Canonical::TAG)?)
        };
        batch.register(canonical);
        Ok(())
    }
}
