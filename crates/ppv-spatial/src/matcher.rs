//! Nearest-neighbour matching between drilled holes and candidate targets.
//!
//! The index stores 3-D unit vectors rather than raw (ra, dec) pairs:
//! Euclidean (chord) distance between unit vectors is monotonic in angular
//! separation, so nearest-neighbour queries order correctly everywhere on
//! the sphere — no RA wraparound seam, no cos(dec) squeeze at the poles.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use ppv_core::sky::{deg_from_arcsec, SkyPoint, ARCSEC_PER_DEG};

// ── MatchTolerance ────────────────────────────────────────────────────────────

/// Maximum hole-to-target separation that still counts as "this hole was
/// drilled for that target".
///
/// The canonical default is 1 arcsecond.  Call sites wanting a stricter
/// match pass e.g. `MatchTolerance::arcsec(0.1)` explicitly.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchTolerance(f64);

impl MatchTolerance {
    pub fn arcsec(arcsec: f64) -> Self {
        MatchTolerance(deg_from_arcsec(arcsec))
    }

    pub fn deg(self) -> f64 {
        self.0
    }

    pub fn as_arcsec(self) -> f64 {
        self.0 * ARCSEC_PER_DEG
    }
}

impl Default for MatchTolerance {
    fn default() -> Self {
        MatchTolerance::arcsec(1.0)
    }
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a unit vector with the originating table row.
#[derive(Clone)]
struct TargetEntry {
    point: [f64; 3],
    sky: SkyPoint,
    row: usize,
}

impl RTreeObject for TargetEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for TargetEntry {
    /// Squared chord distance — monotonic in angular separation.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── NearestMatcher ────────────────────────────────────────────────────────────

/// Bulk-loaded nearest-neighbour index over a subset of target rows.
///
/// Built per `(table, region)` from the *available* rows only — matching
/// against the whole table would be wasted work and would risk pairing a
/// hole with a far-away duplicate of the same catalog object.
pub struct NearestMatcher {
    tree: RTree<TargetEntry>,
}

impl NearestMatcher {
    /// Build from `(row, coordinate)` pairs.  O(n log n) bulk load.
    pub fn new(points: impl IntoIterator<Item = (usize, SkyPoint)>) -> Self {
        let entries: Vec<TargetEntry> = points
            .into_iter()
            .map(|(row, sky)| TargetEntry { point: sky.unit_vector(), sky, row })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Row and exact angular separation (degrees) of the target nearest to
    /// `point`.  `None` only if the index is empty.
    pub fn nearest(&self, point: SkyPoint) -> Option<(usize, f64)> {
        self.tree
            .nearest_neighbor(&point.unit_vector())
            .map(|e| (e.row, e.sky.separation_deg(point)))
    }
}
