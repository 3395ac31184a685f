use crate::{
    api::CoprocessorCall,
    codec::{Request, Response},
    layouts::{Backend, ExternalCallFailed, Module, Result},
    oep::CoprocessorCallImpl,
};

impl<B> CoprocessorCall for Module<B>
where
    B: Backend + CoprocessorCallImpl<B>,
{
    fn call(&self, request: &Request) -> Result<Response> {
        let opcode = request.opcode();
        let expected: usize = request.response_len();
        tracing::trace!(?opcode, input_len = request.payload().len(), expected, "coprocessor call");

        let mut output: Vec<u8> = B::call_impl(self, opcode, request.payload(), expected).map_err(|rejection| {
            tracing::debug!(?opcode, %rejection, "coprocessor call rejected");
            ExternalCallFailed::rejected(opcode, rejection.0)
        })?;

        if output.len() < expected {
            tracing::debug!(?opcode, expected, actual = output.len(), "coprocessor response truncated");
            return Err(ExternalCallFailed::truncated(opcode, expected, output.len()));
        }
        output.truncate(expected);
        Ok(Response::new(opcode, output))
    }
}
