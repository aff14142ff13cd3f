//! Deterministic RNG wrapper for allocation draws.
//!
//! # Determinism strategy
//!
//! Every random decision in the toolkit goes through a `DrawRng` that is
//! explicitly seeded by the caller — never through ambient thread-local
//! randomness.  For fixed inputs and a fixed seed, an allocation run is
//! byte-identical across processes and machines.
//!
//! A `DrawRng` is local state owned by a single allocation call.  It is
//! `Send` but deliberately not shared: concurrent runs each seed their own.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Default seed for allocation runs that do not supply one.
///
/// Fixed so that repeated pre-validation passes over the same platerun
/// produce the same predicted plate.
pub const DEFAULT_SEED: u64 = 42;

/// Seeded RNG for reproducible draws.
pub struct DrawRng(SmallRng);

impl DrawRng {
    pub fn new(seed: u64) -> Self {
        DrawRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` adapters.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Draw `amount` distinct indices from `0..len` **without replacement**,
    /// returned in ascending order.
    ///
    /// Ascending order keeps the draw independent of `rand`'s internal
    /// ordering guarantees: only the *set* of sampled indices is taken from
    /// the generator, so the result is stable across `rand` point releases.
    ///
    /// # Panics
    ///
    /// Panics if `amount > len` (callers clamp to the remaining budget first).
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let mut picked = rand::seq::index::sample(&mut self.0, len, amount).into_vec();
        picked.sort_unstable();
        picked
    }
}

impl std::fmt::Debug for DrawRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DrawRng(..)")
    }
}
