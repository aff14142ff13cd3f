//! `ppv-alloc` — greedy priority-capacity fiber allocation simulator.
//!
//! Predicts, ahead of physical plate drilling, which SCIENCE candidates will
//! receive a fiber given fixed per-instrument fiber budgets and the program
//! priority order.  This is an explicit **approximation** of the downstream
//! plate-design code: no fiber-collision geometry or hardware reachability is
//! modelled, only the priority/capacity bookkeeping.
//!
//! The walk is greedy and order-driven: priority groups are visited in
//! ascending rank, a group is taken whole if it fits the instrument's
//! remaining budget, and is otherwise down-sampled with a seeded draw.  One
//! instrument running out never stops the walk — later groups may feed the
//! other instrument.
//!
//! # Crate layout
//!
//! | Module        | Contents                                     |
//! |---------------|----------------------------------------------|
//! | [`budget`]    | `FiberBudget` running counters               |
//! | [`simulator`] | `simulate_design`, `Allocation`              |
//! | [`error`]     | `AllocError`, `AllocResult<T>`               |

pub mod budget;
pub mod error;
pub mod simulator;

#[cfg(test)]
mod tests;

pub use budget::FiberBudget;
pub use error::{AllocError, AllocResult};
pub use simulator::{simulate_design, Allocation};
