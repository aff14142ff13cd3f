//! Cached availability and assignment resolution.

use rustc_hash::FxHashMap;

use ppv_core::{Mask, SkyPoint};
use ppv_targets::{TableId, TargetSet};

use crate::{MatchTolerance, NearestMatcher, Region};

/// Cache key: the identity of a built table plus the region's name.
///
/// `TableId` is process-unique per built table, so a reloaded or re-derived
/// table can never be served a mask computed from older rows.  Entries are
/// never evicted within a run.
type CacheKey = (TableId, String);

/// Resolves per-region availability and fiber assignment for target tables,
/// memoising every answer.
///
/// Process-local and single-threaded by contract: methods take `&mut self`
/// because a miss populates the cache.  A future concurrent caller must wrap
/// the resolver in a lock — check-then-insert on a shared map is a race.
#[derive(Default)]
pub struct AvailabilityResolver {
    available: FxHashMap<CacheKey, Mask>,
    assigned: FxHashMap<CacheKey, Mask>,
}

impl AvailabilityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Availability ──────────────────────────────────────────────────────

    /// Mask of targets whose separation from `region`'s center is strictly
    /// less than its radius.  Cached; repeated calls with the same table and
    /// region return the stored mask without recomputation.
    pub fn available_in(&mut self, targets: &TargetSet, region: &Region) -> &Mask {
        let key = (targets.table_id(), region.name().to_owned());
        self.available
            .entry(key)
            .or_insert_with(|| compute_available(targets, region))
    }

    /// Mask of targets available in *any* of `regions` — the platerun-level
    /// question, an OR over its fields.  Per-region masks hit the cache;
    /// the union itself is cheap and is not cached.  An empty region list
    /// yields an all-false mask.
    pub fn available_in_any<'a>(
        &mut self,
        targets: &TargetSet,
        regions: impl IntoIterator<Item = &'a Region>,
    ) -> Mask {
        let mut union = Mask::falses(targets.len());
        for region in regions {
            union = union.or(self.available_in(targets, region));
        }
        union
    }

    // ── Assignment ────────────────────────────────────────────────────────

    /// Mask of targets that were actually assigned a fiber on `region`:
    /// for each drilled-hole coordinate the nearest *available* target is
    /// found, and marked iff the separation is below `tolerance`.
    ///
    /// Holes with no target within tolerance (sky and standard holes, or
    /// holes for objects outside this table) are silently ignored.  An empty
    /// `holes` slice yields an all-false mask, not an error.  The result is
    /// aligned to the full table and is a subset of
    /// [`available_in`](Self::available_in) by construction.
    ///
    /// Cached per `(table, region)`; the tolerance of the first call for a
    /// key is the one the cached mask reflects.
    pub fn assigned_in(
        &mut self,
        targets: &TargetSet,
        region: &Region,
        holes: &[SkyPoint],
        tolerance: MatchTolerance,
    ) -> &Mask {
        let key = (targets.table_id(), region.name().to_owned());
        if !self.assigned.contains_key(&key) {
            let available = self
                .available
                .entry(key.clone())
                .or_insert_with(|| compute_available(targets, region));
            let mask = compute_assigned(targets, available, holes, tolerance);
            self.assigned.insert(key.clone(), mask);
        }
        &self.assigned[&key]
    }

    /// Mask of targets that *could* have been observed on `region` but were
    /// not: `available AND NOT assigned`.
    pub fn not_assigned_in(
        &mut self,
        targets: &TargetSet,
        region: &Region,
        holes: &[SkyPoint],
        tolerance: MatchTolerance,
    ) -> Mask {
        let assigned = self.assigned_in(targets, region, holes, tolerance).clone();
        self.available_in(targets, region).and(&assigned.not())
    }

    // ── Introspection ─────────────────────────────────────────────────────

    /// Number of cached availability masks (test hook).
    pub fn cached_available(&self) -> usize {
        self.available.len()
    }

    /// Number of cached assignment masks (test hook).
    pub fn cached_assigned(&self) -> usize {
        self.assigned.len()
    }
}

// ── Mask computation ──────────────────────────────────────────────────────────

fn compute_available(targets: &TargetSet, region: &Region) -> Mask {
    Mask::from_vec(targets.sky_points().map(|p| region.contains(p)).collect())
}

fn compute_assigned(
    targets: &TargetSet,
    available: &Mask,
    holes: &[SkyPoint],
    tolerance: MatchTolerance,
) -> Mask {
    let mut mask = Mask::falses(targets.len());
    if holes.is_empty() {
        return mask;
    }

    // Match only against the available subset: targets outside the field of
    // view can never have a hole, and a far-away duplicate catalog entry
    // must not soak up a match.
    let matcher =
        NearestMatcher::new(available.indices().into_iter().map(|r| (r, targets.sky_point(r))));
    if matcher.is_empty() {
        return mask;
    }

    for &hole in holes {
        if let Some((row, sep_deg)) = matcher.nearest(hole) {
            if sep_deg < tolerance.deg() {
                mask.set(row);
            }
        }
    }
    mask
}
