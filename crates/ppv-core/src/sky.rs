//! Sky coordinate type and angular geometry.
//!
//! `SkyPoint` stores ICRS-like RA/Dec in **degrees** as `f64`.  Double
//! precision is required here: fiber-hole matching works at a ~1 arcsecond
//! tolerance (≈ 2.8e-4 deg), well below what `f32` resolves at RA ≈ 360°.

/// Arcseconds per degree.
pub const ARCSEC_PER_DEG: f64 = 3_600.0;

/// Default catalog epoch (decimal year) for target and hole coordinates.
pub const DEFAULT_EPOCH: f64 = 2015.5;

/// Convert an arcsecond quantity to degrees.
#[inline]
pub fn deg_from_arcsec(arcsec: f64) -> f64 {
    arcsec / ARCSEC_PER_DEG
}

/// An ICRS-like sky coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkyPoint {
    /// Right ascension, degrees, `[0, 360)`.
    pub ra: f64,
    /// Declination, degrees, `[-90, +90]`.
    pub dec: f64,
}

impl SkyPoint {
    #[inline]
    pub fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// `true` if both components are finite and dec is on the sphere.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.ra.is_finite() && self.dec.is_finite() && self.dec.abs() <= 90.0
    }

    /// Great-circle angular separation in **degrees**.
    ///
    /// Uses the atan2 form of the vincenty formula, which stays accurate at
    /// both arcsecond separations and antipodal points (the plain
    /// `acos(dot)` form loses digits exactly where hole matching operates).
    pub fn separation_deg(self, other: SkyPoint) -> f64 {
        let (sin_d1, cos_d1) = self.dec.to_radians().sin_cos();
        let (sin_d2, cos_d2) = other.dec.to_radians().sin_cos();
        let d_ra = (other.ra - self.ra).to_radians();
        let (sin_dra, cos_dra) = d_ra.sin_cos();

        let num = ((cos_d2 * sin_dra).powi(2)
            + (cos_d1 * sin_d2 - sin_d1 * cos_d2 * cos_dra).powi(2))
        .sqrt();
        let den = sin_d1 * sin_d2 + cos_d1 * cos_d2 * cos_dra;

        num.atan2(den).to_degrees()
    }

    /// Angular separation in arcseconds.
    #[inline]
    pub fn separation_arcsec(self, other: SkyPoint) -> f64 {
        self.separation_deg(other) * ARCSEC_PER_DEG
    }

    /// Cartesian unit vector on the celestial sphere.
    ///
    /// Chord distance between unit vectors is monotonic in angular
    /// separation, so nearest-neighbour queries over these points order
    /// correctly with no RA-wraparound or cos(dec) distortion.
    pub fn unit_vector(self) -> [f64; 3] {
        let (sin_ra, cos_ra) = self.ra.to_radians().sin_cos();
        let (sin_dec, cos_dec) = self.dec.to_radians().sin_cos();
        [cos_dec * cos_ra, cos_dec * sin_ra, sin_dec]
    }

    /// Chord length subtended by an angle of `deg` degrees on the unit
    /// sphere.  Used to translate an angular tolerance into the squared
    /// chord-distance space of the nearest-neighbour index.
    #[inline]
    pub fn chord_for_angle_deg(deg: f64) -> f64 {
        2.0 * (deg.to_radians() * 0.5).sin()
    }
}

impl std::fmt::Display for SkyPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.ra, self.dec)
    }
}
