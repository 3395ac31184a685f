use std::marker::PhantomData;

use crate::layouts::CoprocessorParams;

/// A coprocessor implementation.
///
/// `State` is whatever the backend needs to reach the service (a connection,
/// an in-process evaluator, ...). It is owned by the [`Module`].
pub trait Backend: Sized {
    type State;
}

/// Entry point of every operation: a backend state together with the
/// response sizes of the protocol.
///
/// A module is used by one unit of work at a time; no state is shared for
/// writing between concurrent units of work.
pub struct Module<B: Backend> {
    state: B::State,
    params: CoprocessorParams,
    _marker: PhantomData<B>,
}

impl<B: Backend> Module<B> {
    #[inline]
    pub fn from_state(state: B::State, params: CoprocessorParams) -> Self {
        Self {
            state,
            params,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn state(&self) -> &B::State {
        &self.state
    }

    #[inline]
    pub fn params(&self) -> &CoprocessorParams {
        &self.params
    }
}
