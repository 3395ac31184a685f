use backend::{
    api::{CoprocessorCall, ModuleNew},
    layouts::{Backend, Handle, Module, Opcode, W8, W16, W32, WidthTag},
    reference::ReferenceOracle,
};

use crate::{
    api::{FheArithmetic, FheComparison, FheConvert, FheRequire, FheSelect},
    tests::test_suite::{new_module, opcodes},
    unit_of_work::run_unit_of_work,
};

/// Sentinel plus a wider handle returns the handle, without a call.
pub fn test_scenario_sentinel_add<BE: Backend>()
where
    Module<BE>: ModuleNew<BE> + CoprocessorCall + ReferenceOracle,
{
    let module: Module<BE> = new_module::<BE>();
    let h: Handle<W16> = module.encrypt_plain(4242);

    module.clear_calls();
    let res: Handle<W16> = module.fhe_add(&Handle::<W8>::ZERO, &h).unwrap();
    assert_eq!(res.word(), h.word());
    assert_eq!(res.width(), WidthTag::Euint16);
    assert!(module.calls().is_empty());
}

/// Verify at 32 bits then narrow to 8 bits.
pub fn test_scenario_verify_then_cast<BE: Backend>()
where
    Module<BE>: ModuleNew<BE> + CoprocessorCall + ReferenceOracle,
{
    let module: Module<BE> = new_module::<BE>();

    let wide: Handle<W32> = module.fhe_verify(&[0x01, 0x02, 0x03, 0x04]).unwrap();
    let narrow: Handle<W8> = module.fhe_cast(&wide).unwrap();
    assert_eq!(module.decrypt(&narrow), Some(0x04));

    let calls = module.calls();
    assert_eq!(opcodes(&module), vec![Opcode::Verify, Opcode::Cast]);
    assert_eq!(calls[0].input.last(), Some(&WidthTag::Euint32.tag()));
    assert_eq!(calls[1].input.last(), Some(&WidthTag::Euint8.tag()));
}

/// `ge` with a narrower left operand becomes `le` on reversed operands.
pub fn test_scenario_mixed_width_ge<BE: Backend>()
where
    Module<BE>: ModuleNew<BE> + CoprocessorCall + ReferenceOracle,
{
    let module: Module<BE> = new_module::<BE>();
    let a: Handle<W8> = module.encrypt_plain(3);
    let b: Handle<W16> = module.encrypt_plain(5);

    module.clear_calls();
    let res: Handle<W16> = module.fhe_ge(&a, &b).unwrap();
    assert_eq!(module.decrypt(&res), Some(0));
    assert_eq!(opcodes(&module), vec![Opcode::Cast, Opcode::LessThanOrEqual]);

    let calls = module.calls();
    assert_eq!(&calls[0].input[..32], a.word());
    assert_eq!(&calls[1].input[..32], b.word());
}

/// `cmux` with a true control returns the first branch.
pub fn test_scenario_cmux<BE: Backend>()
where
    Module<BE>: ModuleNew<BE> + CoprocessorCall + ReferenceOracle,
{
    let module: Module<BE> = new_module::<BE>();
    let control: Handle<W32> = module.encrypt_plain(1);
    let a: Handle<W32> = module.encrypt_plain(0xCAFE);
    let b: Handle<W32> = module.encrypt_plain(0xBEEF);

    module.clear_calls();
    let res: Handle<W32> = module.fhe_cmux(&control, &a, &b).unwrap();
    assert_eq!(module.decrypt(&res), module.decrypt(&a));
    assert_eq!(opcodes(&module), vec![Opcode::Subtract, Opcode::Multiply, Opcode::Add]);
}

/// Optimistic assertions of three widths evaluate in a single call.
pub fn test_scenario_optimistic_widths<BE: Backend>()
where
    Module<BE>: ModuleNew<BE> + CoprocessorCall + ReferenceOracle,
{
    let module: Module<BE> = new_module::<BE>();
    let x: Handle<W8> = module.encrypt_plain(1);
    let y: Handle<W16> = module.encrypt_plain(2);
    let z: Handle<W32> = module.encrypt_plain(3);

    module.clear_calls();
    run_unit_of_work(&module, |module, batch| {
        module.fhe_optimistic_require(batch, &x)?;
        module.fhe_optimistic_require(batch, &y)?;
        module.fhe_optimistic_require(batch, &z)?;
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.pending()[2].word(), z.word());
        Ok(())
    })
    .unwrap();

    assert_eq!(
        opcodes(&module),
        vec![Opcode::Cast, Opcode::Cast, Opcode::OptimisticRequire]
    );
    let calls = module.calls();
    assert_eq!(calls[0].input[32], WidthTag::Euint32.tag());
    assert_eq!(calls[1].input[32], WidthTag::Euint32.tag());
    assert_eq!(calls[2].input.len(), 3 * 32);
}
