//! Error types for the diff engine.

use cfgdiff_types::Kind;

/// Errors that abort a diff. No partial result is returned alongside them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// A top-level operand was missing.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The two operands have different shapes after optional unwrapping.
    #[error("not same type at {path:?}: {base} vs {actual}")]
    TypeMismatch {
        path: String,
        base: Kind,
        actual: Kind,
    },

    /// Two records of the same schema carry a different number of fields.
    #[error("not same number of fields at {path:?}: {base} vs {actual}")]
    ShapeMismatch {
        path: String,
        base: usize,
        actual: usize,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
