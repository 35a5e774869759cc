//! Inverse geodetic problem: distance and forward azimuths between two
//! positions.
//!
//! [`InverseEngine`] drives Vincenty's formulae and recovers the pairs the
//! iteration cannot settle through spherical and planar approximations.
//! Pairs too close to exact antipodes are rejected rather than answered
//! with an unreliable azimuth.

mod fallback;
mod vincenty;

use crate::{ellipsoid::Ellipsoid, error::GeoError, position::Position};

use self::vincenty::{VincentyInverse, VincentyOutcome};

/// Solution of the inverse problem.
///
/// Azimuths are degrees clockwise from true north in `[-180, 180)`, except
/// for pairs that start or end on a pole, which report the fixed
/// meridional bearings `0` and `180`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseResult {
    /// Geodesic surface distance in meters.
    pub distance_meters: f64,
    /// Forward azimuth at the first point.
    pub initial_azimuth: f64,
    /// Forward azimuth at the second point.
    pub final_azimuth: f64,
}

impl InverseResult {
    /// The exact solution for coincident points.
    pub const ZERO: Self = Self {
        distance_meters: 0.0,
        initial_azimuth: 0.0,
        final_azimuth: 0.0,
    };
}

/// External geodesic solver the engine defers to entirely when one is
/// injected.
///
/// Implementations are expected to answer every pair, including the nearly
/// antipodal ones the built-in pipeline refuses.
///
/// ```
/// use geodesy_core::{HighAccuracySolver, InverseEngine, InverseResult, Position};
///
/// struct Precomputed;
///
/// impl HighAccuracySolver for Precomputed {
///     fn inverse(&self, _p1: Position, _p2: Position) -> InverseResult {
///         InverseResult::ZERO
///     }
/// }
///
/// let engine = InverseEngine::with_high_accuracy(Precomputed);
/// assert!(engine.high_accuracy_available());
/// ```
pub trait HighAccuracySolver {
    fn inverse(&self, point1: Position, point2: Position) -> InverseResult;
}

/// Stand-in solver type for engines built without one. Uninhabited, so it
/// costs nothing and can never be called.
#[derive(Debug, Clone, Copy)]
pub enum NoHighAccuracy {}

impl HighAccuracySolver for NoHighAccuracy {
    fn inverse(&self, _point1: Position, _point2: Position) -> InverseResult {
        match *self {}
    }
}

/// Inverse problem engine.
///
/// Pairs are answered in this order: an injected high accuracy solver when
/// available, an exact zero for coincident points, fixed meridional
/// azimuths for pole endpoints, Vincenty's iteration, and finally the
/// recovery chain for pairs the iteration gave up on.
///
/// # Example
///
/// ```
/// use geodesy_core::{InverseEngine, Position};
///
/// let engine = InverseEngine::new();
/// let sfo = Position::from_degrees(37.6188, -122.3750).unwrap();
/// let jfk = Position::from_degrees(40.6413, -73.7781).unwrap();
///
/// let solution = engine.inverse(sfo, jfk).unwrap();
/// assert!(solution.distance_meters > 4_000_000.0);
/// assert!(solution.initial_azimuth > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct InverseEngine<S = NoHighAccuracy> {
    vincenty: VincentyInverse,
    ellipsoid: Ellipsoid,
    high_accuracy: Option<S>,
}

impl InverseEngine<NoHighAccuracy> {
    /// Engine with the default Vincenty tuning on WGS-84 and no high
    /// accuracy solver.
    pub fn new() -> Self {
        Self {
            vincenty: VincentyInverse::default(),
            ellipsoid: Ellipsoid::wgs84(),
            high_accuracy: None,
        }
    }
}

impl Default for InverseEngine<NoHighAccuracy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: HighAccuracySolver> InverseEngine<S> {
    /// Engine that defers every pair to the given solver.
    pub fn with_high_accuracy(solver: S) -> Self {
        Self {
            vincenty: VincentyInverse::default(),
            ellipsoid: Ellipsoid::wgs84(),
            high_accuracy: Some(solver),
        }
    }

    /// Set the convergence threshold of the λ iteration, in radians.
    pub fn set_precision(mut self, precision: f64) -> Self {
        self.vincenty.precision = precision;
        self
    }

    /// Set the iteration cap of the λ iteration.
    pub fn set_max_iterations(mut self, max_iterations: usize) -> Self {
        self.vincenty.max_iterations = max_iterations;
        self
    }

    /// Set the reference ellipsoid.
    pub fn set_ellipsoid(mut self, ellipsoid: Ellipsoid) -> Self {
        self.ellipsoid = ellipsoid;
        self
    }

    /// True when an injected solver will answer instead of the built-in
    /// pipeline.
    pub fn high_accuracy_available(&self) -> bool {
        self.high_accuracy.is_some()
    }

    /// Solves the inverse problem between two positions.
    ///
    /// # Errors
    ///
    /// [`GeoError::AntipodalUnsupported`] when the pair is too close to
    /// exact antipodes for any of the built-in methods to report a
    /// trustworthy azimuth. Injecting a [`HighAccuracySolver`] lifts that
    /// restriction.
    pub fn inverse(&self, point1: Position, point2: Position) -> Result<InverseResult, GeoError> {
        if let Some(solver) = &self.high_accuracy {
            return Ok(solver.inverse(point1, point2));
        }

        if coincident(point1, point2) {
            return Ok(InverseResult::ZERO);
        }

        if let Some((initial_azimuth, final_azimuth)) = fallback::polar_azimuths(point1, point2) {
            let distance_meters = match self.vincenty.solve(point1, point2, self.ellipsoid) {
                VincentyOutcome::Converged(solution) => solution.distance_meters,
                VincentyOutcome::Unconverged | VincentyOutcome::DegenerateArithmetic => {
                    fallback::gaussian_estimate(point1, point2, self.ellipsoid)
                }
            };
            return Ok(InverseResult {
                distance_meters,
                initial_azimuth,
                final_azimuth,
            });
        }

        match self.vincenty.solve(point1, point2, self.ellipsoid) {
            VincentyOutcome::Converged(solution) => Ok(solution),
            VincentyOutcome::Unconverged | VincentyOutcome::DegenerateArithmetic => {
                fallback::recover(point1, point2, self.ellipsoid)
            }
        }
    }
}

// Two looks at the same pole are the same point whatever their longitudes.
fn coincident(point1: Position, point2: Position) -> bool {
    point1 == point2 || (point1.latitude.is_pole() && point1.latitude == point2.latitude)
}

/// Solves the inverse problem with a default engine.
///
/// # Example
///
/// ```
/// use geodesy_core::{Position, inverse};
///
/// let paris = Position::from_degrees(48.8566, 2.3522).unwrap();
/// let london = Position::from_degrees(51.5074, -0.1278).unwrap();
///
/// let solution = inverse(paris, london).unwrap();
/// assert!((solution.distance_meters - 344_000.0).abs() < 1_000.0);
/// ```
pub fn inverse(point1: Position, point2: Position) -> Result<InverseResult, GeoError> {
    InverseEngine::new().inverse(point1, point2)
}

/// Geodesic surface distance in meters between two positions. Shorthand
/// for [`inverse`] when the azimuths are not needed.
pub fn distance_between_positions(point1: Position, point2: Position) -> Result<f64, GeoError> {
    Ok(inverse(point1, point2)?.distance_meters)
}
