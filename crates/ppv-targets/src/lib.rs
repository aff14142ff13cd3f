//! `ppv-targets` — Structure-of-Arrays candidate target table.
//!
//! A [`TargetSet`] is the in-memory form of a loaded target list: one column
//! `Vec` per attribute, all of equal length, rows sorted by ascending
//! `catalog_id`.  Rows are immutable once built; derived data (the priority
//! rank column) is appended by producing a new table, never by overwriting.
//!
//! Every built table carries a process-unique [`TableId`].  Spatial caches
//! key on it, so replacing a table (e.g. after a catalog reload) can never
//! serve masks computed from the old rows.
//!
//! # Crate layout
//!
//! | Module      | Contents                                       |
//! |-------------|------------------------------------------------|
//! | [`set`]     | `TableId`, `TargetSet`                         |
//! | [`builder`] | `TargetRow`, `TargetSetBuilder`                |
//! | [`error`]   | `TargetError`, `TargetResult<T>`               |

pub mod builder;
pub mod error;
pub mod set;

#[cfg(test)]
mod tests;

pub use builder::{TargetRow, TargetSetBuilder};
pub use error::{TargetError, TargetResult};
pub use set::{TableId, TargetSet};
