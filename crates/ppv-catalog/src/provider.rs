//! The fiber-hole provider interface.

use rustc_hash::FxHashMap;

use ppv_core::SkyPoint;

/// Source of actually-drilled fiber-hole coordinates, keyed by region name.
///
/// Implemented by the external layer that parses plate drilling files; the
/// core only ever sees the coordinates.  Returning `None` means the region
/// has no drilling data loaded — distinct from a drilled plate with zero
/// holes, which returns an empty slice.
pub trait HoleSource {
    fn holes_for(&self, region_name: &str) -> Option<&[SkyPoint]>;
}

/// In-memory `HoleSource` for tests, demos, and pre-parsed hole tables.
#[derive(Default)]
pub struct HoleTable {
    holes: FxHashMap<String, Vec<SkyPoint>>,
}

impl HoleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the drilled holes of one region, replacing any previous set.
    pub fn insert(&mut self, region_name: impl Into<String>, holes: Vec<SkyPoint>) {
        self.holes.insert(region_name.into(), holes);
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }
}

impl HoleSource for HoleTable {
    fn holes_for(&self, region_name: &str) -> Option<&[SkyPoint]> {
        self.holes.get(region_name).map(Vec::as_slice)
    }
}
