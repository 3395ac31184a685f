use crate::{
    layouts::{Handle, Module, Width, Word},
    reference::{CallRecord, PlainRef, Plaintext},
};

/// Plaintext access to a backend, for tests.
///
/// Values are planted and read back without issuing calls. The call log and
/// fault injection give tests control over the call sequence.
pub trait ReferenceOracle {
    /// Creates a handle holding `value` reduced to `W`, without a call.
    fn encrypt_plain<W: Width>(&self, value: u64) -> Handle<W>;

    /// Value behind `handle`, or `None` if the handle is unknown or its
    /// stored width differs from `W`.
    fn decrypt<W: Width>(&self, handle: &Handle<W>) -> Option<u64>;

    fn plaintext(&self, word: &Word) -> Option<Plaintext>;

    fn calls(&self) -> Vec<CallRecord>;

    fn clear_calls(&self);

    /// Rejects the `n`-th call from now (1-based).
    fn fail_on_call(&self, n: usize);
}

impl ReferenceOracle for Module<PlainRef> {
    fn encrypt_plain<W: Width>(&self, value: u64) -> Handle<W> {
        Handle::from_word(self.state().borrow_mut().mint(Plaintext::new(W::TAG, value)))
    }

    fn decrypt<W: Width>(&self, handle: &Handle<W>) -> Option<u64> {
        self.plaintext(handle.word())
            .filter(|pt| pt.width == W::TAG)
            .map(|pt| pt.value)
    }

    fn plaintext(&self, word: &Word) -> Option<Plaintext> {
        self.state().borrow().get(word)
    }

    fn calls(&self) -> Vec<CallRecord> {
        self.state().borrow().calls().to_vec()
    }

    fn clear_calls(&self) {
        self.state().borrow_mut().clear_calls()
    }

    fn fail_on_call(&self, n: usize) {
        self.state().borrow_mut().fail_on_call(n)
    }
}
