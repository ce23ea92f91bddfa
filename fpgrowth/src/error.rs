//! Error types for FP-tree construction and mining.

use thiserror::Error;

/// Errors raised by the FP-growth core.
///
/// Both variants signal a contract violation by the caller. Nothing in the
/// core performs I/O, so no error is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FpError {
    /// An argument is outside its valid domain (zero minimum support,
    /// empty prefix-path set, empty prefix path).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A structural operation the tree forbids (touching the root's count,
    /// referencing a node of another tree).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for FP-growth operations.
pub type Result<T> = std::result::Result<T, FpError>;

impl FpError {
    /// Check if this is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FpError::InvalidArgument(_))
    }

    /// Check if this is an invalid-operation error.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, FpError::InvalidOperation(_))
    }
}
