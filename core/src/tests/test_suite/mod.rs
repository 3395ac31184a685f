mod bitwise;
mod convert;
mod require;
mod scenarios;
mod select;

pub use arithmetic::*;
pub use bitwise::*;
pub use comparison::*;
pub use convert::*;
pub use promotion::*;
pub use require::*;
pub use scenarios::*;
pub use select::*;

use backend::{
    api::ModuleNew,
    codec::BINARY_REQUEST_BYTES,
    layouts::{Backend, CoprocessorParams, Module, Opcode},
    reference::{CallRecord, ReferenceOracle},
};

pub(crate) const TEST_ITERATIONS: usize = 16;

pub(crate) fn new_module<BE: Backend>() -> Module<BE>
where
    Module<BE>: ModuleNew<BE>,
{
    Module::<BE>::new(CoprocessorParams::default())
}

pub(crate) fn opcodes<BE: Backend>(module: &Module<BE>) -> Vec<Opcode>
where
    Module<BE>: ReferenceOracle,
{
    module.calls().iter().map(|call| call.opcode).collect()
}

/// Scalar flag byte of a recorded binary call.
pub(crate) fn scalar_flag(call: &CallRecord) -> u8 {
    assert_eq!(call.input.len(), BINARY_REQUEST_BYTES, "{:?} is not binary", call.opcode);
    call.input[BINARY_REQUEST_BYTES - 1]
}
