//! Reference ellipsoid model and its radii of curvature.

/// Oblate spheroid described by its defining constants, with the derived
/// quantities computed once at construction.
///
/// ```
/// use geodesy_core::ellipsoid::Ellipsoid;
///
/// let wgs84 = Ellipsoid::wgs84();
/// assert!((wgs84.b - 6_356_752.314_245).abs() < 1e-6);
/// assert!((wgs84.e2 - 0.006_694_379_990_14).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis in meters (equatorial radius).
    pub a: f64,
    /// Flattening.
    pub f: f64,
    /// Semi-minor axis in meters (polar radius), `(1 - f) * a`.
    pub b: f64,
    /// First eccentricity squared, `1 - b²/a²`.
    pub e2: f64,
}

impl Ellipsoid {
    /// Builds an ellipsoid from its semi-major axis in meters and its
    /// flattening.
    pub const fn new(a: f64, f: f64) -> Self {
        let b = (1.0 - f) * a;
        let e2 = 1.0 - (b * b) / (a * a);
        Self { a, f, b, e2 }
    }

    /// The WGS-84 datum parameters.
    pub const fn wgs84() -> Self {
        Self::new(6_378_137.0, 1.0 / 298.257_223_563)
    }

    /// Meridional (north-south) radius of curvature in meters at a geodetic
    /// latitude in degrees.
    pub fn meridional_radius(&self, latitude: f64) -> f64 {
        let (sin, cos) = latitude.to_radians().sin_cos();
        let squared = (self.a * cos).powi(2) + (self.b * sin).powi(2);
        (self.a * self.b).powi(2) / (squared * squared.sqrt())
    }

    /// Prime-vertical (east-west) radius of curvature in meters at a
    /// geodetic latitude in degrees.
    pub fn prime_vertical_radius(&self, latitude: f64) -> f64 {
        let (sin, cos) = latitude.to_radians().sin_cos();
        self.a * self.a / ((self.a * cos).powi(2) + (self.b * sin).powi(2)).sqrt()
    }

    /// Gaussian mean radius of curvature in meters at a geodetic latitude
    /// in degrees.
    ///
    /// Geometric mean of the meridional and prime-vertical radii: the
    /// radius of the sphere that locally best fits the ellipsoid.
    pub fn gaussian_radius(&self, latitude: f64) -> f64 {
        let sin = latitude.to_radians().sin();
        self.a * (1.0 - self.e2).sqrt() / (1.0 - self.e2 * sin * sin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WGS84: Ellipsoid = Ellipsoid::wgs84();

    #[test]
    fn wgs84_derived_constants() {
        assert!((WGS84.b - 6_356_752.314_245).abs() < 1e-6);
        assert!((WGS84.e2 - 0.006_694_379_990_14).abs() < 1e-12);
        assert!((WGS84.f * 298.257_223_563 - 1.0).abs() < 1e-15);
    }

    #[test]
    fn radii_at_the_equator() {
        assert!((WGS84.prime_vertical_radius(0.0) - WGS84.a).abs() < 1e-6);
        // meridional curvature at the equator is b²/a
        assert!((WGS84.meridional_radius(0.0) - 6_335_439.33).abs() < 0.1);
        // the gaussian mean degenerates to the polar radius there
        assert!((WGS84.gaussian_radius(0.0) - WGS84.b).abs() < 1e-6);
    }

    #[test]
    fn radii_at_the_poles() {
        // all three curvatures collapse to a²/b at the poles
        let polar = WGS84.a * WGS84.a / WGS84.b;
        assert!((WGS84.meridional_radius(90.0) - polar).abs() < 1e-3);
        assert!((WGS84.prime_vertical_radius(-90.0) - polar).abs() < 1e-3);
        assert!((WGS84.gaussian_radius(90.0) - polar).abs() < 1e-3);
    }

    #[test]
    fn gaussian_radius_grows_toward_the_poles() {
        let mut previous = WGS84.gaussian_radius(0.0);
        for latitude in [15.0, 30.0, 45.0, 60.0, 75.0, 90.0] {
            let current = WGS84.gaussian_radius(latitude);
            assert!(current > previous, "not monotonic at {latitude}");
            previous = current;
        }
    }

    #[test]
    fn gaussian_radius_is_symmetric_in_latitude() {
        for latitude in [10.0, 35.0, 62.5, 85.0] {
            let north = WGS84.gaussian_radius(latitude);
            let south = WGS84.gaussian_radius(-latitude);
            assert!((north - south).abs() < 1e-6);
        }
    }

    #[test]
    fn prime_vertical_always_exceeds_meridional_off_the_poles() {
        for latitude in [0.0, 20.0, 45.0, 70.0, 89.0] {
            assert!(WGS84.prime_vertical_radius(latitude) > WGS84.meridional_radius(latitude));
        }
    }
}
