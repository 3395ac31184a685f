use backend::{
    api::CoprocessorCall,
    codec::Request,
    layouts::{Backend, Handle, Module, Result, W32},
};

/// Width of every handle held by a [`DeferredAssertionBatch`].
pub type Canonical = W32;

/// Optimistic assertions registered during one unit of work.
///
/// Registration issues no call. [`finalize`](Self::finalize) evaluates the
/// whole batch with a single call, so the unit of work fails there, after
/// all of its operations ran, if any registered value is zero.
#[derive(Debug, Default)]
pub struct DeferredAssertionBatch {
    pending: Vec<Handle<Canonical>>,
}

impl DeferredAssertionBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handle: Handle<Canonical>) {
        self.pending.push(handle);
        tracing::trace!(pending = self.pending.len(), "optimistic assertion registered");
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Registered handles, in registration order.
    pub fn pending(&self) -> &[Handle<Canonical>] {
        &self.pending
    }

    /// Checks every registered handle with one call. An empty batch issues
    /// no call.
    pub fn finalize<B>(self, module: &Module<B>) -> Result<()>
    where
        B: Backend,
        Module<B>: CoprocessorCall,
    {
        if self.pending.is_empty() {
            return Ok(());
        }

        let request = Request::optimistic_require(self.pending.iter().map(|h| h.word()));
        match module.call(&request) {
            Ok(_) => {
                tracing::debug!(count = self.pending.len(), "optimistic assertions hold");
                Ok(())
            }
            Err(err) => {
                tracing::debug!(count = self.pending.len(), %err, "optimistic assertions failed");
                Err(err)
            }
        }
    }
}
