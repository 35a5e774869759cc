use crate::{
    angle::{delta_longitude, normalize_azimuth},
    defaults::{DEFAULT_MAX_ITERATIONS, DEFAULT_PRECISION},
    ellipsoid::Ellipsoid,
    position::Position,
};

use super::InverseResult;

/// Outcome of a single Vincenty inverse run.
///
/// Both failure tags are recoverable: the engine hands them to the fallback
/// chain and neither ever reaches the public API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum VincentyOutcome {
    Converged(InverseResult),
    /// The λ iteration hit the cap without settling. Expected for nearly
    /// antipodal pairs.
    Unconverged,
    /// An intermediate quantity collapsed: vanishing sin σ, a non-finite λ
    /// or a non-finite distance.
    DegenerateArithmetic,
}

/// Vincenty's inverse formulae, parametrized by convergence precision and
/// iteration cap.
///
/// [Wikipedia Vincenty](https://en.wikipedia.org/wiki/Vincenty%27s_formulae)
#[derive(Debug, Clone)]
pub(crate) struct VincentyInverse {
    pub(crate) precision: f64,
    pub(crate) max_iterations: usize,
}

impl Default for VincentyInverse {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl VincentyInverse {
    /// Runs the inverse problem between two positions on the given
    /// ellipsoid.
    pub(crate) fn solve(
        &self,
        point1: Position,
        point2: Position,
        ellipsoid: Ellipsoid,
    ) -> VincentyOutcome {
        let a = ellipsoid.a;
        let b = ellipsoid.b;
        let f = ellipsoid.f;

        let p1 = point1.to_radians();
        let p2 = point2.to_radians();

        let difference_longitudes = delta_longitude(
            point1.longitude.as_degrees(),
            point2.longitude.as_degrees(),
        )
        .to_radians();

        // u = 'reduced latitude'
        let (tan_u1, tan_u2) = ((1.0 - f) * p1.0.tan(), (1.0 - f) * p2.0.tan());
        let (cos_u1, cos_u2) = (
            1.0 / (1.0 + tan_u1 * tan_u1).sqrt(),
            1.0 / (1.0 + tan_u2 * tan_u2).sqrt(),
        );
        let (sin_u1, sin_u2) = (tan_u1 * cos_u1, tan_u2 * cos_u2);

        let mut lambda = difference_longitudes;
        let mut iterations_left = self.max_iterations;

        let mut cos_sq_alpha = 0.0;
        let mut sin_sigma = 0.0;
        let mut cos_sigma = 0.0;
        let mut cos2_sigma_m = 0.0;
        let mut sigma = 0.0;

        while iterations_left > 0 {
            let sin_lambda = lambda.sin();
            let cos_lambda = lambda.cos();
            let sin_sq_sigma = (cos_u2 * sin_lambda) * (cos_u2 * sin_lambda)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda)
                    * (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);

            // sin σ vanished: the separation sits below what the
            // trigonometry resolves. Coincident inputs are filtered out
            // before the solver runs.
            if sin_sq_sigma == 0.0 {
                return VincentyOutcome::DegenerateArithmetic;
            }

            sin_sigma = sin_sq_sigma.sqrt();
            cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            cos2_sigma_m = if cos_sq_alpha != 0.0 {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            } else {
                // both points on the equator
                0.0
            };
            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
            let lambda_prime = lambda;
            lambda = difference_longitudes
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos2_sigma_m
                                + c * cos_sigma * (-1.0 + 2.0 * cos2_sigma_m * cos2_sigma_m)));

            if !lambda.is_finite() {
                return VincentyOutcome::DegenerateArithmetic;
            }

            // leave the loop if it has converged
            if (lambda - lambda_prime).abs() <= self.precision {
                break;
            }

            iterations_left -= 1;
        }

        if iterations_left == 0 {
            return VincentyOutcome::Unconverged;
        }

        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let cap_a =
            1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let cap_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

        let delta_sigma = cap_b
            * sin_sigma
            * (cos2_sigma_m
                + cap_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos2_sigma_m * cos2_sigma_m)
                        - cap_b / 6.0
                            * cos2_sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos2_sigma_m * cos2_sigma_m)));

        let distance = b * cap_a * (sigma - delta_sigma);
        if !distance.is_finite() || distance < 0.0 {
            return VincentyOutcome::DegenerateArithmetic;
        }

        let sin_lambda = lambda.sin();
        let cos_lambda = lambda.cos();
        let initial_azimuth =
            (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
        let final_azimuth =
            (cos_u1 * sin_lambda).atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda);

        VincentyOutcome::Converged(InverseResult {
            distance_meters: distance,
            initial_azimuth: normalize_azimuth(initial_azimuth.to_degrees()),
            final_azimuth: normalize_azimuth(final_azimuth.to_degrees()),
        })
    }
}
