//! Allocation-subsystem error type.

use thiserror::Error;

/// Errors produced by `ppv-alloc`.
///
/// All variants are data-integrity failures: allocation state is cumulative,
/// so the simulator fails at the first bad group rather than accumulating a
/// report over a half-applied run.
#[derive(Debug, Error)]
pub enum AllocError {
    /// The candidate table has no priority rank column; run
    /// `TargetSet::with_priorities` first.
    #[error("candidate table has no priority rank column")]
    MissingPriorities,

    /// A priority group mixes instruments.  Groups come from per-program
    /// target lists and must be homogeneous; a mix means the inputs were
    /// assembled wrong, and picking one instrument would corrupt budgets.
    #[error("priority group {rank} mixes instruments")]
    MixedInstrumentGroup { rank: u32 },

    /// A priority group mixes science rows with standards or skies.
    #[error("priority group {rank} mixes target types")]
    MixedTargetTypeGroup { rank: u32 },
}

pub type AllocResult<T> = Result<T, AllocError>;
