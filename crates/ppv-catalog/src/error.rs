//! Catalog-subsystem error type.

use thiserror::Error;

use ppv_core::PlateId;
use ppv_spatial::SpatialError;

/// Errors produced by `ppv-catalog`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The named platerun is not in the loaded summary.  Usually means the
    /// summary file is stale — reload it and try again.
    #[error("platerun {0:?} is not an available platerun")]
    PlateRunMissing(String),

    #[error("field {0:?} not found in plate summary")]
    FieldNotFound(String),

    #[error("plate {0} not found in plate summary")]
    PlateNotFound(PlateId),

    /// A summary row carries an unusable center or radius.
    #[error(transparent)]
    Region(#[from] SpatialError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
