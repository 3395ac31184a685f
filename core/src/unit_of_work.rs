use backend::{
    api::CoprocessorCall,
    layouts::{Backend, Module, Result},
};

use crate::batch::DeferredAssertionBatch;

/// Runs `body` as one unit of work.
///
/// `body` gets a fresh [`DeferredAssertionBatch`]. If it succeeds, the batch
/// is finalized and `body`'s value is returned only when every optimistic
/// assertion holds. If it fails, the batch is dropped without a call and the
/// error is returned as is. Either error means the caller must discard every
/// effect of the unit of work.
pub fn run_unit_of_work<B, T, F>(module: &Module<B>, body: F) -> Result<T>
where
    B: Backend,
    Module<B>: CoprocessorCall,
    F: FnOnce(&Module<B>, &mut DeferredAssertionBatch) -> Result<T>,
{
    let mut batch = DeferredAssertionBatch::new();
    let value: T = body(module, &mut batch)?;
    batch.finalize(module)?;
    Ok(value)
}
