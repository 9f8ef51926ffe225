//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant describes a deterministic failure of pure domain logic:
/// rejected input, a malformed formatting policy, or a broken invariant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required string argument was empty.
    #[error("{field} can't be empty")]
    EmptyInput { field: &'static str },

    /// A value matched neither side of a formatter.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// A format rule pattern failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn empty_input(field: &'static str) -> Self {
        Self::EmptyInput { field }
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn invalid_pattern(msg: impl Into<String>) -> Self {
        Self::InvalidPattern(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// True for the two input-rejection kinds raised by formatters.
    pub fn is_input_rejection(&self) -> bool {
        matches!(self, Self::EmptyInput { .. } | Self::InvalidFormat(_))
    }
}
