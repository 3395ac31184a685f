use crate::layouts::{Backend, CoprocessorParams, Module};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT
/// * See [crate::api::ModuleNew] for corresponding public API.
pub trait ModuleNewImpl<B: Backend> {
    fn new_impl(params: CoprocessorParams) -> Module<B>;
}
