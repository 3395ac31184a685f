use backend::{
    api::{CoprocessorCall, ModuleNew},
    codec::SCALAR_FLAG_CIPHERTEXT,
    layouts::{Backend, Handle, Module, Opcode, W8, W16},
    reference::ReferenceOracle,
};
use sampling::source::Source;

use crate::{
    api::FheBitwise,
    tests::test_suite::{TEST_ITERATIONS, new_module, opcodes, scalar_flag},
};

pub fn test_bitwise<BE: Backend>()
where
    Module<BE>: ModuleNew<BE> + CoprocessorCall + ReferenceOracle,
{
    let module: Module<BE> = new_module::<BE>();
    let mut source: Source = Source::new([4u8; 32]);

    for _ in 0..TEST_ITERATIONS {
        let a: u64 = source.next_bits(8);
        let b: u64 = source.next_bits(16);
        let ha: Handle<W8> = module.encrypt_plain(a);
        let hb: Handle<W16> = module.encrypt_plain(b);

        module.clear_calls();
        let and: Handle<W16> = module.fhe_and(&ha, &hb).unwrap();
        let or: Handle<W16> = module.fhe_or(&hb, &ha).unwrap();
        let xor: Handle<W16> = module.fhe_xor(&ha, &hb).unwrap();

        assert_eq!(module.decrypt(&and), Some(a & b));
        assert_eq!(module.decrypt(&or), Some(a | b));
        assert_eq!(module.decrypt(&xor), Some(a ^ b));

        assert_eq!(
            opcodes(&module),
            vec![
                Opcode::Cast,
                Opcode::BitwiseAnd,
                Opcode::Cast,
                Opcode::BitwiseOr,
                Opcode::Cast,
                Opcode::BitwiseXor
            ]
        );
        module
            .calls()
            .iter()
            .filter(|call| call.opcode != Opcode::Cast)
            .for_each(|call| assert_eq!(scalar_flag(call), SCALAR_FLAG_CIPHERTEXT));
    }
}
