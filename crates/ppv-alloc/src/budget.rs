//! Running fiber-budget counters.

/// Fiber budget for one instrument within one allocation run.
///
/// `assigned` only ever grows, and never past `goal`.  Both counters are
/// scoped to a single `simulate_design` call; they are not reset between
/// priority groups.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FiberBudget {
    goal: usize,
    assigned: usize,
}

impl FiberBudget {
    pub fn new(goal: usize) -> Self {
        Self { goal, assigned: 0 }
    }

    /// Fibers still unassigned.  Zero means every group on this instrument
    /// is skipped from here on.
    #[inline]
    pub fn needed(&self) -> usize {
        self.goal - self.assigned
    }

    /// Fibers assigned so far.
    #[inline]
    pub fn assigned(&self) -> usize {
        self.assigned
    }

    /// Record `n` fibers as assigned.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`needed`](Self::needed) — callers clamp to the
    /// remaining budget before drawing, so an overshoot is a simulator bug.
    pub fn take(&mut self, n: usize) {
        assert!(n <= self.needed(), "budget overshoot: take({n}) with {} needed", self.needed());
        self.assigned += n;
    }
}
