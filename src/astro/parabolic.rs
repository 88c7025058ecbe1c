//! Near-parabolic orbits, |e - 1| <= delta.
//!
//! Kepler's equation degenerates close to e = 1, so both sides of the
//! boundary are solved with Barker's equation generalised by a power series
//! in x = (e - 1) / (e + 1) * D^2, where D = tan(nu / 2):
//!
//! M = sqrt(2 / (1 + e)) * D + sqrt(2 / (1 + e)^3) * D^3 * S(x)
//! S(x) = sum over k of (e - 1 / (2k + 3)) * x^k
//!
//! https://doi.org/10.1007/s10569-013-9476-9 (Farnocchia et al. 2013, section 4)

use crate::config::SolverConfig;
use crate::math::{newton_approx, NoConvergence};
use crate::Num;

/// Sums the series until a term drops below `tolerance`.
///
/// The series only converges for |x| < 1, outside that NaN is returned
/// instead of summing forever.
fn series(e: Num, x: Num, tolerance: Num, weighted: bool) -> Num {
    if !(x.abs() < 1.0) {
        return Num::NAN;
    }

    let mut sum = 0.0;
    let mut power = 1.0;
    let mut k = 0.0;

    loop {
        let order = 2.0 * k + 3.0;
        let mut term = (e - 1.0 / order) * power;
        if weighted {
            term *= order;
        }

        sum += term;

        if term.abs() < tolerance || term.is_nan() {
            return sum;
        }

        power *= x;
        k += 1.0;
    }
}

pub fn series_argument(D: Num, e: Num) -> Num {
    (e - 1.0) / (e + 1.0) * D.powi(2)
}

/// Mean anomaly as a function of D
pub fn kepler(D: Num, e: Num, tolerance: Num) -> Num {
    let s = series(e, series_argument(D, e), tolerance, false);

    (2.0 / (1.0 + e)).sqrt() * D + (2.0 / (1.0 + e).powi(3)).sqrt() * D.powi(3) * s
}

/// d/dD of [`kepler`], the weighted series is 3S + 2xS'
pub fn kepler_prime(D: Num, e: Num, tolerance: Num) -> Num {
    let s = series(e, series_argument(D, e), tolerance, true);

    (2.0 / (1.0 + e)).sqrt() + (2.0 / (1.0 + e).powi(3)).sqrt() * D.powi(2) * s
}

pub fn estimate_anomaly(
    M: Num,
    e: Num,
    D0: Num,
    config: &SolverConfig,
) -> Result<Num, NoConvergence> {
    let tolerance = config.series_tolerance;

    newton_approx(
        |D| kepler(D, e, tolerance) - M,
        |D| kepler_prime(D, e, tolerance),
        D0,
        config.tolerance,
        config.max_iterations,
    )
}

/// Exact solution of Barker's equation M = D + D^3 / 3
pub fn initial_guess(M: Num) -> Num {
    let B = 3.0 * M / 2.0;
    let A = (B + (1.0 + B.powi(2)).sqrt()).powf(2.0 / 3.0);

    2.0 * A * B / (1.0 + A + A.powi(2))
}

/// Parabolic mean motion from the periapsis distance `q`
pub fn mean_motion(mu: Num, q: Num) -> Num {
    (mu / (2.0 * q.powi(3))).sqrt()
}

pub fn mean_anomaly(nu: Num, e: Num, tolerance: Num) -> Num {
    kepler((nu / 2.0).tan(), e, tolerance)
}

pub fn true_anomaly(D: Num) -> Num {
    2.0 * D.atan()
}
