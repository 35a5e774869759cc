//! Degree wrapping helpers shared by the solvers.
//!
//! Azimuths and longitudes both live in the half-open interval
//! `[-180, 180)`: the antimeridian and the due-south bearing are always
//! represented by `-180`, never by `+180`.

/// Wraps an azimuth in degrees into `[-180, 180)`.
///
/// # Example
///
/// ```
/// use geodesy_core::angle::normalize_azimuth;
///
/// assert_eq!(normalize_azimuth(90.0), 90.0);
/// assert_eq!(normalize_azimuth(190.0), -170.0);
/// assert_eq!(normalize_azimuth(-190.0), 170.0);
/// assert_eq!(normalize_azimuth(180.0), -180.0);
/// assert_eq!(normalize_azimuth(540.0), -180.0);
/// ```
pub fn normalize_azimuth(degrees: f64) -> f64 {
    wrap_degrees(degrees)
}

/// Wraps a longitude in degrees into `[-180, 180)`.
///
/// # Example
///
/// ```
/// use geodesy_core::angle::normalize_longitude;
///
/// assert_eq!(normalize_longitude(190.0), -170.0);
/// assert_eq!(normalize_longitude(-360.0), 0.0);
/// assert_eq!(normalize_longitude(180.0), -180.0);
/// ```
pub fn normalize_longitude(degrees: f64) -> f64 {
    wrap_degrees(degrees)
}

/// Signed eastward longitude difference `to - from` in degrees, wrapped
/// into `[-180, 180)`.
///
/// Antisymmetric everywhere except dead on the seam, where both directions
/// report `-180`.
pub fn delta_longitude(from: f64, to: f64) -> f64 {
    wrap_degrees(to - from)
}

/// Same difference as [`delta_longitude`] with the opposite seam
/// tie-break: the result lives in `(-180, 180]` and an exact antimeridian
/// crossing reports `+180`.
pub fn delta_longitude_east(from: f64, to: f64) -> f64 {
    let delta = wrap_degrees(to - from);
    if delta == -180.0 { 180.0 } else { delta }
}

fn wrap_degrees(degrees: f64) -> f64 {
    // `%` keeps the sign of the dividend, so this lands in (-360, 360)
    let mut wrapped = degrees % 360.0;
    if wrapped < -180.0 {
        wrapped += 360.0;
    } else if wrapped >= 180.0 {
        wrapped -= 360.0;
    }
    // the seam itself belongs to the negative side
    if wrapped == 180.0 { -180.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_full_turns() {
        assert_eq!(normalize_azimuth(360.0), 0.0);
        assert_eq!(normalize_azimuth(-360.0), 0.0);
        assert_eq!(normalize_azimuth(720.0), 0.0);
        assert_eq!(normalize_azimuth(359.0), -1.0);
    }

    #[test]
    fn seam_belongs_to_the_negative_side() {
        assert_eq!(normalize_azimuth(180.0), -180.0);
        assert_eq!(normalize_azimuth(-180.0), -180.0);
        assert_eq!(normalize_azimuth(540.0), -180.0);
        assert_eq!(normalize_azimuth(-540.0), -180.0);
        assert_eq!(normalize_longitude(180.0), -180.0);
    }

    #[test]
    fn keeps_in_range_values_untouched() {
        assert_eq!(normalize_longitude(179.9999), 179.9999);
        assert_eq!(normalize_longitude(-180.0), -180.0);
        assert_eq!(normalize_azimuth(90.0), 90.0);
        assert_eq!(normalize_azimuth(-90.0), -90.0);
        assert_eq!(normalize_azimuth(0.0), 0.0);
    }

    #[test]
    fn normalized_range_holds_on_a_grid() {
        let mut degrees = -1080.0;
        while degrees <= 1080.0 {
            let wrapped = normalize_longitude(degrees);
            assert!(
                (-180.0..180.0).contains(&wrapped),
                "{degrees} wrapped to {wrapped}"
            );
            degrees += 0.37;
        }
    }

    #[test]
    fn delta_longitude_is_antisymmetric_off_the_seam() {
        let pairs = [(10.0, 20.0), (-170.0, 170.0), (5.0, -30.0), (179.0, -179.0)];
        for (from, to) in pairs {
            assert_eq!(
                delta_longitude(from, to),
                -delta_longitude(to, from),
                "{from} {to}"
            );
        }
    }

    #[test]
    fn delta_longitude_crosses_the_antimeridian_the_short_way() {
        assert_eq!(delta_longitude(179.0, -179.0), 2.0);
        assert_eq!(delta_longitude(-179.0, 179.0), -2.0);
        assert_eq!(delta_longitude(170.0, -170.0), 20.0);
    }

    #[test]
    fn delta_longitude_tie_breaks_at_the_seam() {
        assert_eq!(delta_longitude(0.0, 180.0), -180.0);
        assert_eq!(delta_longitude(0.0, -180.0), -180.0);
        assert_eq!(delta_longitude(90.0, -90.0), -180.0);
        assert_eq!(delta_longitude_east(0.0, 180.0), 180.0);
        assert_eq!(delta_longitude_east(0.0, -180.0), 180.0);
        assert_eq!(delta_longitude_east(90.0, -90.0), 180.0);
    }

    #[test]
    fn delta_longitude_east_matches_off_the_seam() {
        for (from, to) in [(2.3522, -0.1278), (151.2093, -74.006), (0.0, 90.0)] {
            assert_eq!(delta_longitude(from, to), delta_longitude_east(from, to));
        }
    }
}
