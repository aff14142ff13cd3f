//! Target-table error type.

use thiserror::Error;

use ppv_priority::PriorityError;

/// Errors produced by `ppv-targets`.
#[derive(Debug, Error)]
pub enum TargetError {
    /// `with_priorities` called on a table that already has the rank column.
    /// Derived columns are appended exactly once, never overwritten.
    #[error("table already carries a priority rank column")]
    AlreadyAnnotated,

    /// An externally supplied rank column does not match the table length.
    #[error("rank column has length {got}, expected {expected}")]
    RankColumnLength { expected: usize, got: usize },

    /// A row references a program the platerun ordering never listed.
    #[error(transparent)]
    Priority(#[from] PriorityError),
}

pub type TargetResult<T> = Result<T, TargetError>;
