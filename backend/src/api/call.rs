use crate::{
    codec::{Request, Response},
    layouts::Result,
};

/// The single synchronous call boundary to the coprocessor.
pub trait CoprocessorCall {
    /// Sends `request` and blocks until the coprocessor answers.
    ///
    /// Returns exactly [`Request::response_len`] bytes, or
    /// [`ExternalCallFailed`](crate::layouts::ExternalCallFailed) if the
    /// coprocessor signals failure or answers with fewer bytes.
    fn call(&self, request: &Request) -> Result<Response>;
}
