//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `ppv-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// A region was constructed with an unusable center or radius.
    #[error("invalid region {name:?}: {reason}")]
    InvalidRegion { name: String, reason: String },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
