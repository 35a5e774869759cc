//! Recovery chain for pairs the primary solver cannot settle.
//!
//! Everything here works on a sphere or on a local plane, so the results
//! are approximations. They are only ever used when Vincenty reports
//! [`Unconverged`](super::vincenty::VincentyOutcome::Unconverged) or
//! [`DegenerateArithmetic`](super::vincenty::VincentyOutcome::DegenerateArithmetic).

use crate::{
    angle::{delta_longitude, delta_longitude_east, normalize_azimuth},
    defaults::{ANTIPODAL_MARGIN, NEAR_RANGE_CUTOFF, POLAR_BAND_LATITUDE},
    ellipsoid::Ellipsoid,
    error::GeoError,
    nvector::NVector,
    position::Position,
};

use super::InverseResult;

/// Central angle between two positions in radians, computed through
/// n-vectors so that it stays stable near coincidence and near antipodes.
pub(crate) fn central_angle(point1: Position, point2: Position) -> f64 {
    let v1 = NVector::from_lat_lon(
        point1.latitude.as_degrees(),
        point1.longitude.as_degrees(),
    );
    let v2 = NVector::from_lat_lon(
        point2.latitude.as_degrees(),
        point2.longitude.as_degrees(),
    );
    v1.angle(v2)
}

/// First-order distance estimate in meters: the central angle scaled by
/// the Gaussian radius of curvature at the mean latitude.
pub(crate) fn gaussian_estimate(point1: Position, point2: Position, ellipsoid: Ellipsoid) -> f64 {
    gaussian_distance(point1, point2, ellipsoid, central_angle(point1, point2))
}

fn gaussian_distance(
    point1: Position,
    point2: Position,
    ellipsoid: Ellipsoid,
    central_angle: f64,
) -> f64 {
    let mean_latitude = (point1.latitude.as_degrees() + point2.latitude.as_degrees()) / 2.0;
    ellipsoid.gaussian_radius(mean_latitude) * central_angle
}

/// Flat-earth distance in meters from degree-length polynomials evaluated
/// at the mean latitude. Only trustworthy for short ranges away from the
/// poles.
pub(crate) fn planar_distance(point1: Position, point2: Position) -> f64 {
    let mean_latitude = ((point1.latitude.as_degrees() + point2.latitude.as_degrees()) / 2.0)
        .to_radians();

    // length of one degree of latitude and longitude, in kilometers
    let k1 = 111.13209 - 0.56605 * (2.0 * mean_latitude).cos()
        + 0.00120 * (4.0 * mean_latitude).cos();
    let k2 = 111.41513 * mean_latitude.cos() - 0.09455 * (3.0 * mean_latitude).cos()
        + 0.00012 * (5.0 * mean_latitude).cos();

    let delta_latitude = point2.latitude.as_degrees() - point1.latitude.as_degrees();
    let delta_lon = delta_longitude(
        point1.longitude.as_degrees(),
        point2.longitude.as_degrees(),
    );

    1000.0 * (k1 * delta_latitude).hypot(k2 * delta_lon)
}

/// Forward azimuths of the great circle through both points, in degrees in
/// `[-180, 180)`, or `None` when the direction is undefined (coincident
/// points or two looks at the same pole).
pub(crate) fn great_circle_azimuths(point1: Position, point2: Position) -> Option<(f64, f64)> {
    if point1 == point2 {
        return None;
    }
    if point1.latitude.is_pole() && point1.latitude == point2.latitude {
        return None;
    }
    if let Some(azimuths) = polar_azimuths(point1, point2) {
        return Some(azimuths);
    }

    let phi1 = point1.latitude.to_radians();
    let phi2 = point2.latitude.to_radians();
    let delta = delta_longitude_east(
        point1.longitude.as_degrees(),
        point2.longitude.as_degrees(),
    )
    .to_radians();
    let (sin_delta, cos_delta) = delta.sin_cos();
    let (sin_phi1, cos_phi1) = phi1.sin_cos();
    let (sin_phi2, cos_phi2) = phi2.sin_cos();

    let initial = (sin_delta * cos_phi2).atan2(cos_phi1 * sin_phi2 - sin_phi1 * cos_phi2 * cos_delta);
    let reverse_final =
        (sin_delta * cos_phi1).atan2(cos_phi1 * sin_phi2 * cos_delta - sin_phi1 * cos_phi2);

    Some((
        normalize_azimuth(initial.to_degrees()),
        normalize_azimuth(reverse_final.to_degrees()),
    ))
}

/// Azimuths are direction-less at the poles, so pairs that start or end on
/// one get fixed meridional bearings instead of computed ones.
pub(crate) fn polar_azimuths(point1: Position, point2: Position) -> Option<(f64, f64)> {
    let lat1 = point1.latitude.as_degrees();
    let lat2 = point2.latitude.as_degrees();

    if lat1 == 90.0 || lat2 == -90.0 {
        // heading away from the north pole, or into the south pole
        Some((180.0, 180.0))
    } else if lat1 == -90.0 || lat2 == 90.0 {
        Some((0.0, 0.0))
    } else {
        None
    }
}

fn in_polar_band(point: Position) -> bool {
    point.latitude.as_degrees().abs() > POLAR_BAND_LATITUDE
}

/// Approximates the inverse solution for a pair the primary solver gave up
/// on.
///
/// Short separations take a local approximation: the flat-earth polynomials
/// in general, or the Gaussian sphere when both endpoints sit inside the
/// polar band where those polynomials break down. Everything else takes the
/// great-circle estimate, except pairs within [`ANTIPODAL_MARGIN`] of exact
/// antipodes, for which no approximation yields a trustworthy azimuth.
pub(crate) fn recover(
    point1: Position,
    point2: Position,
    ellipsoid: Ellipsoid,
) -> Result<InverseResult, GeoError> {
    let theta = central_angle(point1, point2);
    let estimate = gaussian_distance(point1, point2, ellipsoid, theta);

    if estimate < NEAR_RANGE_CUTOFF {
        let distance_meters = if in_polar_band(point1) && in_polar_band(point2) {
            estimate
        } else {
            planar_distance(point1, point2)
        };
        let Some((initial_azimuth, final_azimuth)) = great_circle_azimuths(point1, point2) else {
            return Ok(InverseResult::ZERO);
        };
        return Ok(InverseResult {
            distance_meters,
            initial_azimuth,
            final_azimuth,
        });
    }

    if std::f64::consts::PI - theta < ANTIPODAL_MARGIN {
        return Err(GeoError::AntipodalUnsupported);
    }

    let Some((initial_azimuth, final_azimuth)) = great_circle_azimuths(point1, point2) else {
        return Ok(InverseResult::ZERO);
    };
    Ok(InverseResult {
        distance_meters: estimate,
        initial_azimuth,
        final_azimuth,
    })
}
