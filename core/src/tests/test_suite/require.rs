use backend::{
    api::{CoprocessorCall, ModuleNew},
    layouts::{Backend, ExternalCallFailed, Handle, Module, Opcode, W8, W16, W32, WORD_BYTES},
    reference::ReferenceOracle,
};

use crate::{
    api::{FheArithmetic, FheRequire},
    batch::DeferredAssertionBatch,
    tests::test_suite::{new_module, opcodes},
    unit_of_work::run_unit_of_work,
};

pub fn test_require<BE: Backend>()
where
    Module<BE>: ModuleNew<BE> + CoprocessorCall + ReferenceOracle,
{
    let module: Module<BE> = new_module::<BE>();

    let yes: Handle<W8> = module.encrypt_plain(1);
    let no: Handle<W16> = module.encrypt_plain(0);

    assert!(module.fhe_require(&yes).is_ok());
    let err: ExternalCallFailed = module.fhe_require(&no).unwrap_err();
    assert_eq!(err.opcode, Opcode::Require);
}

pub fn test_optimistic_batch<BE: Backend>()
where
    Module<BE>: ModuleNew<BE> + CoprocessorCall + ReferenceOracle,
{
    let module: Module<BE> = new_module::<BE>();

    let a: Handle<W32> = module.encrypt_plain(1);
    let b: Handle<W32> = module.encrypt_plain(42);
    let c: Handle<W32> = module.encrypt_plain(0);

    // Empty batch: no call.
    module.clear_calls();
    DeferredAssertionBatch::new().finalize(&module).unwrap();
    assert!(opcodes(&module).is_empty());

    // Canonical width: registration is call free.
    let mut batch: DeferredAssertionBatch = DeferredAssertionBatch::new();
    module.fhe_optimistic_require(&mut batch, &a).unwrap();
    module.fhe_optimistic_require(&mut batch, &b).unwrap();
    assert!(opcodes(&module).is_empty());
    assert_eq!(batch.len(), 2);
    assert_eq!(batch.pending()[1].word(), b.word());

    batch.finalize(&module).unwrap();
    assert_eq!(opcodes(&module), vec![Opcode::OptimisticRequire]);
    let calls = module.calls();
    assert_eq!(calls[0].input.len(), 2 * WORD_BYTES);
    assert_eq!(&calls[0].input[..WORD_BYTES], a.word());
    assert_eq!(&calls[0].input[WORD_BYTES..], b.word());

    // One false value fails the whole batch, and only at finalization.
    module.clear_calls();
    let mut batch: DeferredAssertionBatch = DeferredAssertionBatch::new();
    module.fhe_optimistic_require(&mut batch, &a).unwrap();
    module.fhe_optimistic_require(&mut batch, &c).unwrap();
    module.fhe_optimistic_require(&mut batch, &b).unwrap();
    assert!(opcodes(&module).is_empty());
    let err: ExternalCallFailed = batch.finalize(&module).unwrap_err();
    assert_eq!(err.opcode, Opcode::OptimisticRequire);
    assert_eq!(opcodes(&module), vec![Opcode::OptimisticRequire]);
}

pub fn test_unit_of_work<BE: Backend>()
where
    Module<BE>: ModuleNew<BE> + CoprocessorCall + ReferenceOracle,
{
    let module: Module<BE> = new_module::<BE>();

    let a: Handle<W16> = module.encrypt_plain(5);
    let b: Handle<W16> = module.encrypt_plain(5);

    // Assertions hold: the body's value is returned after one evaluation.
    module.clear_calls();
    let sum: Handle<W16> = run_unit_of_work(&module, |module, batch| {
        let sum: Handle<W16> = module.fhe_add(&a, &b)?;
        module.fhe_optimistic_require(batch, &sum)?;
        Ok(sum)
    })
    .unwrap();
    assert_eq!(module.decrypt(&sum), Some(10));
    assert_eq!(opcodes(&module), vec![Opcode::Add, Opcode::Cast, Opcode::OptimisticRequire]);

    // Assertion fails at the end, after the body ran.
    module.clear_calls();
    let err: ExternalCallFailed = run_unit_of_work(&module, |module, batch| {
        let diff: Handle<W16> = module.fhe_sub(&a, &b)?;
        module.fhe_optimistic_require(batch, &diff)?;
        module.fhe_mul(&a, &b)
    })
    .unwrap_err();
    assert_eq!(err.opcode, Opcode::OptimisticRequire);
    assert_eq!(
        opcodes(&module),
        vec![Opcode::Subtract, Opcode::Cast, Opcode::Multiply, Opcode::OptimisticRequire]
    );

    // Body fails: the batch is dropped unevaluated.
    module.clear_calls();
    module.fail_on_call(2);
    let err: ExternalCallFailed = run_unit_of_work(&module, |module, batch| {
        let sum: Handle<W16> = module.fhe_add(&a, &b)?;
        module.fhe_optimistic_require(batch, &sum)?;
        module.fhe_mul(&a, &b)
    })
    .unwrap_err();
    assert_eq!(err.opcode, Opcode::Cast);
    assert_eq!(opcodes(&module), vec![Opcode::Add, Opcode::Cast]);
}
