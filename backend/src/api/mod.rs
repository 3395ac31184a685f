//! Safe, user-facing traits of the call boundary.
//!
//! Operator crates program against these traits; the actual call is
//! dispatched to a backend via the [`oep`](crate::oep) extension points.

mod call;
mod module;

pub use call::*;
pub use module::*;
