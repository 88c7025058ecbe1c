use crate::config::SolverConfig;
use crate::math::{newton_approx, NoConvergence};
use crate::Num;

/// Hyperbolic Anomaly (F) is given by the equation:
/// M = e * sinh(F) - F
/// where
/// M is the hyperbolic mean anomaly
/// e is the eccentricity
///
/// https://orbital-mechanics.space/time-since-periapsis-and-keplers-equation/hyperbolic-trajectories.html#equation-eq-hyperbolic-keplers-equation
pub fn estimate_anomaly(
    M: Num,
    e: Num,
    F0: Num,
    config: &SolverConfig,
) -> Result<Num, NoConvergence> {
    newton_approx(
        // f(F) = e * sinh(F) - F - M
        |F| (e * F.sinh()) - F - M,
        // f'(F) = e * cosh(F) - 1
        |F| e * F.cosh() - 1.0,
        F0,
        config.tolerance,
        config.max_iterations,
    )
}

pub fn initial_guess(M: Num, e: Num) -> Num {
    (M / e).asinh()
}

/// Hyperbolic mean motion, `a` is the magnitude of the semi-major axis
/// SRC: https://orbital-mechanics.space/time-since-periapsis-and-keplers-equation/hyperbolic-trajectories.html#equation-eq-hyperbolic-mean-anomaly
pub fn mean_motion(mu: Num, a: Num) -> Num {
    (mu / a.powi(3).abs()).sqrt()
}

/// NaN once `nu` lies beyond the asymptote of the hyperbola.
pub fn hyperbolic_anomaly(nu: Num, e: Num) -> Num {
    let plus = (e + 1.0).sqrt();
    let minus = (e - 1.0).sqrt() * (nu / 2.0).tan();

    ((plus + minus) / (plus - minus)).ln()
}

pub fn mean_anomaly(nu: Num, e: Num) -> Num {
    let F = hyperbolic_anomaly(nu, e);

    e * F.sinh() - F
}

pub fn true_anomaly(F: Num, e: Num) -> Num {
    // (exp(F) - 1) / (exp(F) + 1) written as tanh(F / 2) so large F does not overflow
    // https://orbital-mechanics.space/time-since-periapsis-and-keplers-equation/hyperbolic-trajectories.html#equation-eq-eccentric-anomaly-true-anomaly-hyperbola
    2.0 * (((e + 1.0) / (e - 1.0)).sqrt() * (F / 2.0).tanh()).atan()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn solves_hyperbolic_keplers_equation() {
        let e = 2.5;
        let M = 40.0;

        let F = estimate_anomaly(M, e, initial_guess(M, e), &SolverConfig::default()).unwrap();

        assert_abs_diff_eq!(e * F.sinh() - F, M, epsilon = 1e-9);
    }

    #[test]
    fn true_anomaly_matches_exponential_form() {
        let e: Num = 1.8;
        let F: Num = 1.3;

        let expected = 2.0
            * ((F.exp() * (e + 1.0).sqrt() - (e + 1.0).sqrt())
                / (F.exp() * (e - 1.0).sqrt() + (e - 1.0).sqrt()))
            .atan();

        assert_abs_diff_eq!(true_anomaly(F, e), expected, epsilon = 1e-12);
    }

    #[test]
    fn true_anomaly_approaches_asymptote() {
        let e: Num = 1.8;
        let asymptote = (-1.0 / e).acos();

        assert_abs_diff_eq!(true_anomaly(800.0, e), asymptote, epsilon = 1e-12);
    }
}
