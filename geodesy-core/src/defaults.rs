//! Tuning constants for the inverse solvers.
//!
//! The band, margin and range bounds are empirical. They live here so that
//! re-validating them against a reference dataset only touches one place.

/// Convergence threshold for the Vincenty λ iteration, in radians.
///
/// The iteration stops once λ moves by less than this between passes,
/// which corresponds to a sub-millimeter position change.
pub const DEFAULT_PRECISION: f64 = 1e-12;

/// Iteration cap for the Vincenty λ iteration.
///
/// Nearly antipodal pairs oscillate instead of converging; the cap turns
/// them into a recoverable signal after a bounded amount of work.
pub const DEFAULT_MAX_ITERATIONS: usize = 500;

/// Latitude magnitude in degrees beyond which a point counts as polar.
///
/// Meridians converge inside this band, which breaks the flat-earth
/// polynomials, so short-range recovery switches to the Gaussian sphere.
pub const POLAR_BAND_LATITUDE: f64 = 80.0;

/// How close, in radians of central angle, a pair may get to exact
/// antipodes before recovery gives up and reports
/// [`GeoError::AntipodalUnsupported`](crate::GeoError::AntipodalUnsupported).
pub const ANTIPODAL_MARGIN: f64 = 0.1;

/// Surface distance in meters under which recovery prefers local
/// approximations (flat-earth polynomials, or the Gaussian sphere near the
/// poles) over the spherical great-circle estimate.
///
/// Kept well inside [`PLANAR_VALIDITY_RANGE`]:
///
/// ```
/// # use geodesy_core::defaults::*;
/// assert!(NEAR_RANGE_CUTOFF < PLANAR_VALIDITY_RANGE);
/// ```
pub const NEAR_RANGE_CUTOFF: f64 = 400_000.0;

/// Upper bound in meters on where the flat-earth polynomial approximation
/// holds to useful accuracy, away from the poles.
pub const PLANAR_VALIDITY_RANGE: f64 = 475_000.0;
