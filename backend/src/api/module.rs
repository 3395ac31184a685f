use crate::layouts::{Backend, CoprocessorParams, Module};

pub trait ModuleNew<B: Backend> {
    fn new(params: CoprocessorParams) -> Module<B>;
}
