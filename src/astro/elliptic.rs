use crate::config::SolverConfig;
use crate::constants::PI;
use crate::math::{newton_approx, NoConvergence};
use crate::Num;

/// Eccentric Anomaly (E) is given by the equation:
/// M = E - e * sin(E)
/// where
/// M is the mean anomaly
/// e is the eccentricity
///
/// https://orbital-mechanics.space/time-since-periapsis-and-keplers-equation/elliptical-orbits.html#equation-eq-keplers-equation-ellipse
pub fn estimate_anomaly(
    // Mean anomaly
    M: Num,
    // Eccentricity
    e: Num,
    // Initial guess
    E0: Num,
    config: &SolverConfig,
) -> Result<Num, NoConvergence> {
    newton_approx(
        // f(E) = E - e*sin(E) - M
        |E| E - (e * E.sin()) - M,
        // f'(E) = 1 - e*cos(E)
        |E| 1.0 - (e * E.cos()),
        E0,
        config.tolerance,
        config.max_iterations,
    )
}

/// Starting point for [`estimate_anomaly`].
///
/// Newton's method started at M can overshoot and cycle for e close to 1,
/// starting at +-pi converges for every M in [-pi, pi].
pub fn initial_guess(M: Num, e: Num) -> Num {
    if e > 0.8 {
        PI.copysign(M)
    } else {
        M
    }
}

/// Mean motion
/// https://en.wikipedia.org/wiki/Mean_motion
pub fn mean_motion(mu: Num, a: Num) -> Num {
    (mu / a.powi(3).abs()).sqrt()
}

pub fn eccentric_anomaly(nu: Num, e: Num) -> Num {
    2.0 * (((1.0 - e) / (1.0 + e)).sqrt() * (nu / 2.0).tan()).atan()
}

pub fn mean_anomaly(nu: Num, e: Num) -> Num {
    let E = eccentric_anomaly(nu, e);

    E - e * E.sin()
}

pub fn true_anomaly(E: Num, e: Num) -> Num {
    // https://orbital-mechanics.space/time-since-periapsis-and-keplers-equation/elliptical-orbits.html#equation-eq-eccentric-anomaly-true-anomaly-ellipse
    2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (E / 2.0).tan()).atan()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn solves_keplers_equation() {
        let e = 0.3;
        let M = 1.0;

        let E = estimate_anomaly(M, e, M, &SolverConfig::default()).unwrap();

        assert_abs_diff_eq!(E - e * E.sin(), M, epsilon = 1e-12);
    }

    #[test]
    fn high_eccentricity_converges_from_mean_anomaly() {
        let e = 0.9901593;
        let M = 0.01;

        let E = estimate_anomaly(M, e, initial_guess(M, e), &SolverConfig::default()).unwrap();

        assert_abs_diff_eq!(E - e * E.sin(), M, epsilon = 1e-10);
    }

    #[test_case(0.99, 1e-4 ; "just past periapsis")]
    #[test_case(0.99, -0.05 ; "approaching periapsis")]
    #[test_case(0.998, 0.3 ; "very eccentric")]
    #[test_case(0.85, PI ; "apoapsis")]
    #[test_case(0.85, 0.0 ; "periapsis")]
    fn high_eccentricity_converges_from_guess(e: Num, M: Num) {
        let E = estimate_anomaly(M, e, initial_guess(M, e), &SolverConfig::default()).unwrap();

        assert_abs_diff_eq!(E - e * E.sin(), M, epsilon = 1e-10);
    }

    #[test]
    fn eccentric_and_true_anomaly_are_inverse() {
        let e = 0.6;
        let nu = 2.2;

        assert_abs_diff_eq!(true_anomaly(eccentric_anomaly(nu, e), e), nu, epsilon = 1e-12);
    }
}
