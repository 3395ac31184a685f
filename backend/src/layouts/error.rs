use thiserror::Error;

use crate::layouts::Opcode;

/// Why an external call failed. Diagnostic only: every failure is the same
/// error kind to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// The coprocessor signalled failure.
    Rejected(String),
    /// The response was shorter than the operation's fixed response size.
    Truncated { expected: usize, actual: usize },
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Rejected(detail) => write!(f, "rejected: {detail}"),
            FailureReason::Truncated { expected, actual } => {
                write!(f, "truncated response: expected {expected} bytes, got {actual}")
            }
        }
    }
}

/// The single error kind of this crate.
///
/// It is never caught or retried internally: it aborts the enclosing unit of
/// work, which must discard all of its effects.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("external call {opcode:?} failed, {reason}")]
pub struct ExternalCallFailed {
    pub opcode: Opcode,
    pub reason: FailureReason,
}

impl ExternalCallFailed {
    pub fn rejected(opcode: Opcode, detail: impl Into<String>) -> Self {
        Self {
            opcode,
            reason: FailureReason::Rejected(detail.into()),
        }
    }

    pub fn truncated(opcode: Opcode, expected: usize, actual: usize) -> Self {
        Self {
            opcode,
            reason: FailureReason::Truncated { expected, actual },
        }
    }
}

pub type Result<T> = std::result::Result<T, ExternalCallFailed>;

/// Failure reported by a backend implementation of the call boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Rejection(pub String);

impl Rejection {
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}
