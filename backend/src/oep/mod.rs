//! Open Extension Points (OEP) for backend crates.
//!
//! Each trait mirrors a safe trait in [`crate::api`], distinguished by an
//! `Impl` suffix (e.g. [`crate::api::CoprocessorCall`] is backed by
//! [`CoprocessorCallImpl`]). Backends implement these; callers never use
//! them directly.

mod call;
mod module;

pub use call::*;
pub use module::*;
