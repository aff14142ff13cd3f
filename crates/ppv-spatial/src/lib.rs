//! `ppv-spatial` — sky regions, availability resolution, and hole matching.
//!
//! Answers the two positional questions of plate pre-validation: which
//! targets *could* a plate observe (inside its field of view), and which of
//! those *were* actually assigned a fiber (a drilled hole sits within
//! tolerance of the target).  Both answers are boolean masks over the full
//! target table and are cached per `(table, region)` key, because the same
//! region is queried many times while a platerun is inspected.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`region`]   | `Region` (named circular sky area), APO radius default |
//! | [`matcher`]  | `NearestMatcher` (R-tree NN), `MatchTolerance`        |
//! | [`resolver`] | `AvailabilityResolver` with per-key caches            |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                    |

pub mod error;
pub mod matcher;
pub mod region;
pub mod resolver;


pub use error::{SpatialError, SpatialResult};
pub use matcher::{MatchTolerance, NearestMatcher};
pub use region::{Region, APO_FIELD_RADIUS_DEG};
pub use resolver::AvailabilityResolver;
