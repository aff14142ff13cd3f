//! `ppv-core` — foundational types for the `ppv` plate pre-validation toolkit.
//!
//! This crate is a dependency of every other `ppv-*` crate.  It intentionally
//! has no `ppv-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).  Error enums live with the subsystems that raise them.
//!
//! # What lives here
//!
//! | Module    | Contents                                                 |
//! |-----------|----------------------------------------------------------|
//! | [`ids`]   | `CatalogId`, `PlateId`, `DesignId`                       |
//! | [`sky`]   | `SkyPoint`, great-circle separation, unit vectors        |
//! | [`types`] | `Instrument`, `TargetType`, `PerInstrument<T>`           |
//! | [`mask`]  | `Mask` — boolean membership array over a target table    |
//! | [`rng`]   | `DrawRng` — seeded, reproducible random draws            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod ids;
pub mod mask;
pub mod rng;
pub mod sky;
pub mod types;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{CatalogId, DesignId, PlateId};
pub use mask::Mask;
pub use rng::{DrawRng, DEFAULT_SEED};
pub use sky::{SkyPoint, DEFAULT_EPOCH};
pub use types::{Instrument, PerInstrument, TargetType};
