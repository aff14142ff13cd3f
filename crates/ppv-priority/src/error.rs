//! Priority-subsystem error type.

use thiserror::Error;

use ppv_core::Instrument;

/// Errors produced by `ppv-priority`.
///
/// A lookup miss is a data-integrity problem — the candidate table references
/// a program the platerun's order file never mentions — and is fatal to the
/// surrounding allocation, never retried or defaulted.
#[derive(Debug, Error)]
pub enum PriorityError {
    #[error("program {program:?} ({instrument}) not found in ordering")]
    ProgramNotFound {
        instrument: Instrument,
        program: String,
    },

    #[error("ordering parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PriorityResult<T> = Result<T, PriorityError>;
