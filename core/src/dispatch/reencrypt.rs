use backend::{
    api::CoprocessorCall,
    codec::Request,
    layouts::{Backend, Handle, Module, PublicKeyBlob, Result, SealedEnvelope, Width},
};

use crate::api::FheReencrypt;

impl<B> FheReencrypt for Module<B>
where
    B: Backend,
    Module<B>: CoprocessorCall,
{
    fn fhe_reencrypt<W: Width>(&self, a: &Handle<W>, public_key: &[u8; 32]) -> Result<SealedEnvelope> {
        let params = *self.params();
        self.call(&Request::reencrypt(a.word(), public_key, &params))?
            .into_envelope(&params)
    }

    fn fhe_public_key(&self) -> Result<PublicKeyBlob> {
        let params = *self.params();
        self.call(&Request::public_key(&params))?
            .into_public_key(&params)
    }
}
