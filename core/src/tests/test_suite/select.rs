use backend::{
    api::{CoprocessorCall, ModuleNew},
    layouts::{Backend, Handle, Module, Opcode, W32},
    reference::ReferenceOracle,
};

use crate::{
    api::FheSelect,
    tests::test_suite::{new_module, opcodes},
};

pub fn test_cmux<BE: Backend>()
where
    Module<BE>: ModuleNew<BE> + CoprocessorCall + ReferenceOracle,
{
    let module: Module<BE> = new_module::<BE>();

    let one: Handle<W32> = module.encrypt_plain(1);
    let zero: Handle<W32> = module.encrypt_plain(0);
    let two: Handle<W32> = module.encrypt_plain(2);
    let a: Handle<W32> = module.encrypt_plain(10);
    let b: Handle<W32> = module.encrypt_plain(25);

    module.clear_calls();
    let res: Handle<W32> = module.fhe_cmux(&one, &a, &b).unwrap();
    assert_eq!(module.decrypt(&res), Some(10));
    assert_eq!(opcodes(&module), vec![Opcode::Subtract, Opcode::Multiply, Opcode::Add]);
    assert_eq!(&module.calls()[1].input[..32], one.word());

    let res: Handle<W32> = module.fhe_cmux(&zero, &a, &b).unwrap();
    assert_eq!(module.decrypt(&res), Some(25));

    // Non-boolean control: 2 * (10 - 25) + 25 mod 2^32.
    let res: Handle<W32> = module.fhe_cmux(&two, &a, &b).unwrap();
    assert_eq!(module.decrypt(&res), Some((2u64.wrapping_mul(10u64.wrapping_sub(25)) + 25) & 0xFFFF_FFFF));
}

pub fn test_cmux_fails_fast<BE: Backend>()
where
    Module<BE>: ModuleNew<BE> + CoprocessorCall + ReferenceOracle,
{
    let module: Module<BE> = new_module::<BE>();

    let control: Handle<W32> = module.encrypt_plain(1);
    let a: Handle<W32> = module.encrypt_plain(3);
    let b: Handle<W32> = module.encrypt_plain(4);

    let sequence: [Opcode; 3] = [Opcode::Subtract, Opcode::Multiply, Opcode::Add];

    for n in 1..=sequence.len() {
        module.clear_calls();
        module.fail_on_call(n);
        let err = module.fhe_cmux(&control, &a, &b).unwrap_err();
        assert_eq!(err.opcode, sequence[n - 1], "failing call {n}");
        assert_eq!(opcodes(&module), sequence[..n].to_vec(), "failing call {n}");
    }

    // Injected faults are one-shot: the next cmux completes.
    module.clear_calls();
    let res: Handle<W32> = module.fhe_cmux(&control, &a, &b).unwrap();
    assert_eq!(module.decrypt(&res), Some(3));
}
