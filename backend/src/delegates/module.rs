use crate::{
    api::ModuleNew,
    layouts::{Backend, CoprocessorParams, Module},
    oep::ModuleNewImpl,
};

impl<B> ModuleNew<B> for Module<B>
where
    B: Backend + ModuleNewImpl<B>,
{
    fn new(params: CoprocessorParams) -> Self {
        B::new_impl(params)
    }
}
