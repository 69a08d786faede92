//! Error types for the seeker crate.

use thiserror::Error;

/// Errors reported when validating a clause.
///
/// Evaluation itself never fails: a clause that cannot apply to a field
/// simply does not match. Validation lets callers catch such clauses early.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeekerError {
    /// Operator is not valid for the clause's value type.
    #[error("operator '{op}' is not valid for {value_type} values")]
    InvalidOperatorForType {
        op: &'static str,
        value_type: &'static str,
    },

    /// Field value type cannot be compared with the clause value.
    #[error("type mismatch on '{field}': clause expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
