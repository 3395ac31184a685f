use crate::layouts::{Backend, Module, Opcode, Rejection};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT
/// * See [crate::api::CoprocessorCall] for corresponding public API.
///
/// Performs one raw call: `opcode` applied to `input`, with room for
/// `output_len` response bytes. Implementations return the response bytes
/// (at least `output_len` of them) or a [`Rejection`]. Length checks and
/// error wrapping are done by the caller.
pub trait CoprocessorCallImpl<B: Backend> {
    fn call_impl(module: &Module<B>, opcode: Opcode, input: &[u8], output_len: usize) -> Result<Vec<u8>, Rejection>;
}
