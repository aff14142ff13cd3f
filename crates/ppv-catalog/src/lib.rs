//! `ppv-catalog` — plate summary bookkeeping and collaborator interfaces.
//!
//! This is the thin layer between the excluded I/O world and the core: an
//! external loader parses the survey's all-plate summary (whatever its
//! on-disk format) into plain [`SummaryRow`]s and hands them to a
//! [`SummaryContext`].  The context is an explicit service object with an
//! `init`/`reload` lifecycle — it is injected into consumers, never imported
//! as ambient global state — and answers the grouping questions: which
//! fields belong to a platerun, which plates to a field, and what sky
//! [`Region`] a field or plate covers.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`summary`]  | `SummaryRow`, `SummaryContext`                    |
//! | [`provider`] | `HoleSource` trait, in-memory `HoleTable`         |
//! | [`error`]    | `CatalogError`, `CatalogResult<T>`                |

pub mod error;
pub mod provider;
pub mod summary;


pub use error::{CatalogError, CatalogResult};
pub use provider::{HoleSource, HoleTable};
pub use summary::{SummaryContext, SummaryRow};
