use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude out of range [-90, 90] degrees: {value}")]
    InvalidLatitude { value: f64 },
    #[error("coordinate must be a finite number of degrees, got {value}")]
    NonFiniteCoordinate { value: f64 },
    #[error("points are antipodal or nearly so, no reliable azimuth exists")]
    AntipodalUnsupported,
}
