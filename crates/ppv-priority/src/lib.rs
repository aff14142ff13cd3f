//! `ppv-priority` — program ordering and priority-rank lookup.
//!
//! Each platerun ships a fiber-filling order file: a totally-ordered list of
//! `(instrument, program)` entries.  A program's position in that list is its
//! allocation rank — lower rank means its targets are considered for fibers
//! first.  [`PriorityIndex`] is built once per platerun from that list and is
//! consumed by `ppv-targets` (to annotate candidate tables) and transitively
//! by the allocation simulator.
//!
//! # Crate layout
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`index`]  | `ProgramOrdering`, `PriorityIndex`                  |
//! | [`loader`] | `load_ordering_csv`, `load_ordering_reader`         |
//! | [`error`]  | `PriorityError`, `PriorityResult<T>`                |

pub mod error;
pub mod index;
pub mod loader;


pub use error::{PriorityError, PriorityResult};
pub use index::{PriorityIndex, ProgramOrdering};
pub use loader::{load_ordering_csv, load_ordering_reader};
