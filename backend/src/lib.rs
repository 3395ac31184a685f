//! # euint-backend
//!
//! Call boundary and wire layouts for encrypted-integer operations evaluated
//! by an external homomorphic coprocessor.
//!
//! Callers never see plaintext: they hold [`layouts::Handle`]s, opaque
//! 256-bit references to ciphertexts stored by the coprocessor, tagged at the
//! type level with their integer width ([`layouts::W8`], [`layouts::W16`],
//! [`layouts::W32`]).
//!
//! ## Architecture
//!
//! 1. **[`api`]** -- Safe traits used by the operator layer
//!    ([`api::CoprocessorCall`], [`api::ModuleNew`]).
//! 2. **[`oep`]** -- Open extension points that backends implement
//!    ([`oep::CoprocessorCallImpl`], [`oep::ModuleNewImpl`]).
//! 3. **[`delegates`]** -- Blanket glue connecting each [`api`] trait to its
//!    [`oep`] counterpart on [`layouts::Module`]. The call delegate performs
//!    the response length checks and error wrapping once for every backend.
//! 4. **[`codec`]** -- Byte-level request and response marshalling. Every
//!    request goes through [`codec::Request`].
//! 5. **[`reference`]** -- [`reference::PlainRef`], a backend evaluating on
//!    plaintext values, used as a correctness oracle.
//!
//! ## Errors
//!
//! Every failure of the coprocessor, including a short response, surfaces as
//! [`layouts::ExternalCallFailed`]. Nothing in this crate retries.

pub mod api;
pub mod codec;
pub mod delegates;
pub mod layouts;
pub mod oep;
pub mod reference;
