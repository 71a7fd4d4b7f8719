//! Error types for operations.

use thiserror::Error;

/// Errors produced while invoking an operation or callable.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OperationError {
    /// The operation was invoked but no behavior was ever supplied.
    #[error("not implemented: {operation} has no behavior")]
    Unimplemented {
        /// Name of the operation that was invoked.
        operation: String,
    },

    /// A fixed-arity callable received the wrong number of arguments.
    #[error("arity mismatch in {callable}: expected {expected} argument(s), got {got}")]
    Arity {
        /// Name of the callable.
        callable: String,
        /// Number of arguments it accepts.
        expected: usize,
        /// Number of arguments it was given.
        got: usize,
    },

    /// A behavior rejected one of its arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Catch-all for behavior failures. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl OperationError {
    /// Build an [`OperationError::Unimplemented`] for the named operation.
    pub fn unimplemented(operation: impl Into<String>) -> Self {
        Self::Unimplemented {
            operation: operation.into(),
        }
    }

    /// Whether this error reports a missing behavior.
    #[must_use]
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, Self::Unimplemented { .. })
    }
}
