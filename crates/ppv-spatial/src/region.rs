//! Named circular sky regions.

use ppv_core::{SkyPoint, DEFAULT_EPOCH};

use crate::{SpatialError, SpatialResult};

/// Field-of-view radius of an APO-class plate, degrees.
pub const APO_FIELD_RADIUS_DEG: f64 = 1.49;

/// A named circular sky area — a plate or a field pointing.
///
/// Read-only value object once constructed; validation happens here so the
/// resolver can assume every region it sees is usable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    name: String,
    center: SkyPoint,
    radius_deg: f64,
    epoch: f64,
}

impl Region {
    /// Construct a region, validating center and radius.
    pub fn new(
        name: impl Into<String>,
        center: SkyPoint,
        radius_deg: f64,
        epoch: f64,
    ) -> SpatialResult<Region> {
        let name = name.into();
        if !center.is_valid() {
            return Err(SpatialError::InvalidRegion {
                name,
                reason: format!("center {center} is not a usable sky coordinate"),
            });
        }
        if !(radius_deg.is_finite() && radius_deg > 0.0) {
            return Err(SpatialError::InvalidRegion {
                name,
                reason: format!("radius {radius_deg} deg must be finite and positive"),
            });
        }
        Ok(Region { name, center, radius_deg, epoch })
    }

    /// Region with the standard APO plate radius and default epoch.
    pub fn apo(name: impl Into<String>, center: SkyPoint) -> SpatialResult<Region> {
        Region::new(name, center, APO_FIELD_RADIUS_DEG, DEFAULT_EPOCH)
    }

    /// Region name — the cache-key half identifying this sky area.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn center(&self) -> SkyPoint {
        self.center
    }

    pub fn radius_deg(&self) -> f64 {
        self.radius_deg
    }

    pub fn epoch(&self) -> f64 {
        self.epoch
    }

    /// `true` if `point` lies strictly inside the field of view.
    ///
    /// Strict `<`: a target exactly on the rim is *not* available.
    #[inline]
    pub fn contains(&self, point: SkyPoint) -> bool {
        self.center.separation_deg(point) < self.radius_deg
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Region({:?}, {}, r={} deg)", self.name, self.center, self.radius_deg)
    }
}
