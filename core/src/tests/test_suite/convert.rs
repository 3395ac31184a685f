use backend::{
    api::{CoprocessorCall, ModuleNew},
    codec::PUBLIC_KEY_MARKER,
    layouts::{Backend, CoprocessorParams, Handle, Module, Opcode, W8, W16, W32, WidthTag},
    reference::ReferenceOracle,
};
use rug::Integer;

use crate::{
    api::{FheConvert, FheReencrypt},
    tests::test_suite::{new_module, opcodes},
};

pub fn test_cast<BE: Backend>()
where
    Module<BE>: ModuleNew<BE> + CoprocessorCall + ReferenceOracle,
{
    let module: Module<BE> = new_module::<BE>();

    let a: Handle<W16> = module.encrypt_plain(300);
    let b: Handle<W8> = module.encrypt_plain(200);

    module.clear_calls();
    let narrow: Handle<W8> = module.fhe_cast(&a).unwrap();
    let wide: Handle<W32> = module.fhe_cast(&b).unwrap();
    assert_eq!(module.decrypt(&narrow), Some(300 & 0xFF));
    assert_eq!(module.decrypt(&wide), Some(200));

    assert_eq!(opcodes(&module), vec![Opcode::Cast, Opcode::Cast]);
    let calls = module.calls();
    assert_eq!(&calls[0].input[..32], a.word());
    assert_eq!(calls[0].input[32], WidthTag::Euint8.tag());
    assert_eq!(calls[1].input[32], WidthTag::Euint32.tag());
}

pub fn test_trivial_encrypt_and_verify<BE: Backend>()
where
    Module<BE>: ModuleNew<BE> + CoprocessorCall + ReferenceOracle,
{
    let module: Module<BE> = new_module::<BE>();

    let a: Handle<W32> = module.fhe_trivial_encrypt(&Integer::from(0x1_0000_0005u64)).unwrap();
    assert_eq!(module.decrypt(&a), Some(5));
    let b: Handle<W8> = module.fhe_trivial_encrypt(&Integer::from(300)).unwrap();
    assert_eq!(module.decrypt(&b), Some(44));

    module.clear_calls();
    let c: Handle<W16> = module.fhe_verify(&[0xAA, 0x12, 0x34]).unwrap();
    assert_eq!(module.decrypt(&c), Some(0x1234));
    let calls = module.calls();
    assert_eq!(calls[0].opcode, Opcode::Verify);
    assert_eq!(calls[0].input, vec![0xAA, 0x12, 0x34, WidthTag::Euint16.tag()]);
}

pub fn test_reencrypt<BE: Backend>()
where
    Module<BE>: ModuleNew<BE> + CoprocessorCall + ReferenceOracle,
{
    let module: Module<BE> = new_module::<BE>();
    let params: CoprocessorParams = *module.params();
    let public_key: [u8; 32] = [7u8; 32];

    let a: Handle<W8> = module.encrypt_plain(0xAB);
    let b: Handle<W32> = module.encrypt_plain(0xDEAD_BEEF);

    let ea = module.fhe_reencrypt(&a, &public_key).unwrap();
    let eb = module.fhe_reencrypt(&b, &public_key).unwrap();
    assert_eq!(ea.len(), params.envelope_bytes());
    assert_eq!(eb.len(), params.envelope_bytes());
    assert_eq!(&eb.as_bytes()[eb.len() - 4..], &[0xDE, 0xAD, 0xBE, 0xEF]);

    module.clear_calls();
    let pk = module.fhe_public_key().unwrap();
    assert_eq!(pk.len(), params.public_key_blob_bytes());
    assert_eq!(module.calls()[0].input, vec![PUBLIC_KEY_MARKER]);
    assert_eq!(module.fhe_public_key().unwrap().as_bytes(), pk.as_bytes());
}
