use std::{fmt, str::FromStr};

use anyhow::{Context as _, anyhow, bail, ensure};

use crate::{angle::normalize_longitude, dms, error::GeoError};

const DEGREE_SUFFIX: char = '\u{00BA}';

/// Geodetic latitude in degrees, validated to `[-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Latitude(f64);

impl Latitude {
    /// Validates a latitude in degrees.
    ///
    /// # Example
    ///
    /// ```
    /// use geodesy_core::Latitude;
    ///
    /// let latitude = Latitude::from_degrees(48.8534).unwrap();
    /// assert_eq!(latitude.as_degrees(), 48.8534);
    ///
    /// assert!(Latitude::from_degrees(90.5).is_err());
    /// assert!(Latitude::from_degrees(f64::NAN).is_err());
    /// ```
    pub fn from_degrees(degrees: f64) -> Result<Self, GeoError> {
        if !degrees.is_finite() {
            return Err(GeoError::NonFiniteCoordinate { value: degrees });
        }
        if !(-90.0..=90.0).contains(&degrees) {
            return Err(GeoError::InvalidLatitude { value: degrees });
        }
        Ok(Self(degrees))
    }

    pub fn as_degrees(self) -> f64 {
        self.0
    }

    /// True for the exact poles only.
    pub fn is_pole(self) -> bool {
        self.0 == 90.0 || self.0 == -90.0
    }

    pub(crate) fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}{DEGREE_SUFFIX}", self.0)
    }
}

impl FromStr for Latitude {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degrees = dms::parse_coordinate(s)
            .and_then(dms::ParsedCoordinate::latitude_degrees)
            .context("Failed to parse Latitude")?;
        Self::from_degrees(degrees).map_err(|error| anyhow!("Failed to parse Latitude: {error}"))
    }
}

/// Geodetic longitude in degrees, wrapped into `[-180, 180)` on
/// construction. The antimeridian is always carried as `-180`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Longitude(f64);

impl Longitude {
    /// Validates and normalizes a longitude in degrees.
    ///
    /// # Example
    ///
    /// ```
    /// use geodesy_core::Longitude;
    ///
    /// let longitude = Longitude::from_degrees(190.0).unwrap();
    /// assert_eq!(longitude.as_degrees(), -170.0);
    ///
    /// let seam = Longitude::from_degrees(180.0).unwrap();
    /// assert_eq!(seam.as_degrees(), -180.0);
    /// ```
    pub fn from_degrees(degrees: f64) -> Result<Self, GeoError> {
        if !degrees.is_finite() {
            return Err(GeoError::NonFiniteCoordinate { value: degrees });
        }
        Ok(Self(normalize_longitude(degrees)))
    }

    pub fn as_degrees(self) -> f64 {
        self.0
    }

    pub(crate) fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}{DEGREE_SUFFIX}", self.0)
    }
}

impl FromStr for Longitude {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degrees = dms::parse_coordinate(s)
            .and_then(dms::ParsedCoordinate::longitude_degrees)
            .context("Failed to parse Longitude")?;
        Self::from_degrees(degrees).map_err(|error| anyhow!("Failed to parse Longitude: {error}"))
    }
}

/// A geodetic position on the surface of the reference ellipsoid.
///
/// # Example
///
/// ```
/// use geodesy_core::Position;
///
/// let paris: Position = "48.8534, 2.3488".parse().unwrap();
/// assert_eq!(paris.to_string(), "48.8534º, 2.3488º");
///
/// let sydney: Position = r#"33°52'8"S, 151°12'33"E"#.parse().unwrap();
/// assert!(sydney.latitude.as_degrees() < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: Latitude,
    pub longitude: Longitude,
}

impl Position {
    pub fn new(latitude: Latitude, longitude: Longitude) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validates a latitude/longitude pair in degrees.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        Ok(Self {
            latitude: Latitude::from_degrees(latitude)?,
            longitude: Longitude::from_degrees(longitude)?,
        })
    }

    /// Latitude and longitude in radians, in that order.
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl FromStr for Position {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');

        let Some(latitude) = parts.next() else {
            bail!("Failed to parse Position: missing latitude");
        };
        let Some(longitude) = parts.next() else {
            bail!("Failed to parse Position: expected a comma separated latitude and longitude");
        };
        ensure!(
            parts.next().is_none(),
            "Failed to parse Position: expected a single comma separator"
        );

        let latitude = latitude.parse().context("Failed to parse Position")?;
        let longitude = longitude.parse().context("Failed to parse Position")?;

        Ok(Self {
            latitude,
            longitude,
        })
    }
}
