//! Plaintext reference backend.
//!
//! [`PlainRef`] evaluates every operation directly on plaintext values held
//! in an in-process table, so the algebraic behaviour of the operator layer
//! can be checked without a cryptographic backend. It records every call and
//! can be told to reject a given call, which makes it the correctness oracle
//! of the test suites.

mod eval;
mod oracle;
mod state;


use std::cell::RefCell;

pub use oracle::*;
pub use state::*;

use crate::{
    layouts::{Backend, CoprocessorParams, Module, Opcode, Rejection},
    oep::{CoprocessorCallImpl, ModuleNewImpl},
};

/// Seed of the handle source of a freshly created module.
pub const PLAIN_REF_SEED: [u8; 32] = [0u8; 32];

pub struct PlainRef {}

impl Backend for PlainRef {
    type State = RefCell<PlainRefState>;
}

impl ModuleNewImpl<Self> for PlainRef {
    fn new_impl(params: CoprocessorParams) -> Module<Self> {
        Module::from_state(RefCell::new(PlainRefState::new(PLAIN_REF_SEED)), params)
    }
}

impl CoprocessorCallImpl<Self> for PlainRef {
    fn call_impl(module: &Module<Self>, opcode: Opcode, input: &[u8], output_len: usize) -> Result<Vec<u8>, Rejection> {
        let mut state = module.state().borrow_mut();
        let index: usize = state.record(opcode, input);
        if state.should_fail(index) {
            return Err(Rejection::new(format!("injected failure on call #{index}")));
        }
        let output: Vec<u8> = eval::evaluate(&mut state, module.params(), opcode, input)?;
        debug_assert_eq!(output.len(), output_len, "{opcode:?}: response length");
        Ok(output)
    }
}
