//! # euint-core
//!
//! Encrypted unsigned integer operators of widths 8, 16 and 32 bits,
//! evaluated by an external coprocessor through [`backend::api::CoprocessorCall`].
//!
//! Every operator is a method of one of the traits in [`api`], implemented
//! for any [`Module`](backend::layouts::Module) whose backend answers calls:
//!
//! ```
//! use backend::{api::ModuleNew, layouts::{CoprocessorParams, Handle, Module, Scalar, W8, W16}, reference::{PlainRef, ReferenceOracle}};
//! use euint_core::api::{FheArithmetic, FheComparison};
//!
//! let module: Module<PlainRef> = Module::<PlainRef>::new(CoprocessorParams::default());
//! let a: Handle<W8> = module.encrypt_plain(200);
//! let b: Handle<W16> = module.encrypt_plain(300);
//!
//! let sum: Handle<W16> = module.fhe_add(&a, &b).unwrap();
//! let big: Handle<W16> = module.fhe_gt(&sum, &Scalar::<W16>::new(400)).unwrap();
//! assert_eq!(module.decrypt(&sum), Some(500));
//! assert_eq!(module.decrypt(&big), Some(1));
//! ```
//!
//! Mixed-width operands are promoted to the wider width ([`promotion`]);
//! the result type is fixed at compile time and two plaintext operands do
//! not type-check. Optimistic assertions are collected in a
//! [`batch::DeferredAssertionBatch`] and evaluated once at the end of a
//! unit of work ([`unit_of_work::run_unit_of_work`]).

pub mod api;
pub mod batch;
mod dispatch;
pub mod operator;
pub mod promotion;
pub mod unit_of_work;

#[cfg(test)]
mod tests;

pub use api::*;
pub use batch::{Canonical, DeferredAssertionBatch};
pub use unit_of_work::run_unit_of_work;
