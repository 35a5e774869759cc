//! Unit surface-normal vectors (n-vectors) for stable angular separation.
//!
//! The central angle computed as `atan2(|v1 x v2|, v1 . v2)` keeps its
//! accuracy where the spherical law of cosines loses digits, at
//! near-coincident and near-antipodal separations.

/// Unit normal to the reference sphere at a surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl NVector {
    /// Surface normal for a geodetic latitude and longitude in degrees.
    pub fn from_lat_lon(latitude: f64, longitude: f64) -> Self {
        let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = longitude.to_radians().sin_cos();

        Self {
            x: cos_lat * cos_lon,
            y: cos_lat * sin_lon,
            z: sin_lat,
        }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Central angle to `other` in radians, in `[0, π]`.
    ///
    /// ```
    /// use geodesy_core::nvector::NVector;
    ///
    /// let greenwich = NVector::from_lat_lon(0.0, 0.0);
    /// let north_pole = NVector::from_lat_lon(90.0, 0.0);
    ///
    /// let angle = greenwich.angle(north_pole);
    /// assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn angle(self, other: Self) -> f64 {
        self.cross(other).norm().atan2(self.dot(other))
    }
}

impl std::ops::Add for NVector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}
