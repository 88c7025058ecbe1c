use std::fmt;

use crate::config::SolverConfig;
use crate::constants::{PI, TWO_PI};
use crate::error::{Error, Result};
use crate::math::NoConvergence;
use crate::Num;

pub mod elliptic;
pub mod hyperbolic;
pub mod parabolic;

/// Which form of Kepler's equation an orbit is solved with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Regime {
    Elliptic,
    /// |e - 1| <= delta, solved with the series form of Barker's equation
    Parabolic,
    Hyperbolic,
}

impl Regime {
    pub fn of(e: Num, delta: Num) -> Self {
        if e < 1.0 - delta {
            Regime::Elliptic
        } else if e > 1.0 + delta {
            Regime::Hyperbolic
        } else {
            Regime::Parabolic
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::Elliptic => write!(f, "elliptic"),
            Regime::Parabolic => write!(f, "parabolic"),
            Regime::Hyperbolic => write!(f, "hyperbolic"),
        }
    }
}

/// Solves Kepler's equation of the given regime for the anomaly whose mean
/// anomaly is `M`, starting Newton's method at `x0`.
///
/// Returns E, D or F for the elliptic, parabolic and hyperbolic regimes.
pub fn solve_kepler(
    regime: Regime,
    e: Num,
    M: Num,
    x0: Num,
    config: &SolverConfig,
) -> Result<Num> {
    let estimate = match regime {
        Regime::Elliptic => elliptic::estimate_anomaly(M, e, x0, config),
        Regime::Parabolic => parabolic::estimate_anomaly(M, e, x0, config),
        Regime::Hyperbolic => hyperbolic::estimate_anomaly(M, e, x0, config),
    };

    estimate.map_err(|NoConvergence { iterations, last }| Error::NonConvergence {
        regime,
        iterations,
        last,
    })
}

/// Closed form starting point for [`solve_kepler`].
pub fn initial_guess(regime: Regime, M: Num, e: Num) -> Num {
    match regime {
        Regime::Elliptic => elliptic::initial_guess(M, e),
        Regime::Parabolic => parabolic::initial_guess(M),
        Regime::Hyperbolic => hyperbolic::initial_guess(M, e),
    }
}

/// Mean anomaly (or its parabolic / hyperbolic equivalent) of a body at
/// true anomaly `nu`.
pub fn to_mean_anomaly(nu: Num, e: Num, config: &SolverConfig) -> Result<Num> {
    let regime = Regime::of(e, config.delta);

    let M = match regime {
        Regime::Elliptic => elliptic::mean_anomaly(nu, e),
        Regime::Parabolic => parabolic::mean_anomaly(nu, e, config.series_tolerance),
        Regime::Hyperbolic => hyperbolic::mean_anomaly(nu, e),
    };

    if M.is_finite() {
        Ok(M)
    } else {
        Err(Error::degenerate(format!(
            "true anomaly {nu} has no {regime} mean anomaly for e = {e}"
        )))
    }
}

/// True anomaly of a body at mean anomaly `M`, the inverse of [`to_mean_anomaly`].
///
/// Elliptic results lie in (-pi, pi], the mean anomaly is reduced to that
/// range before solving.
pub fn from_mean_anomaly(M: Num, e: Num, config: &SolverConfig) -> Result<Num> {
    let regime = Regime::of(e, config.delta);

    let M = match regime {
        Regime::Elliptic => reduce_angle(M),
        _ => M,
    };

    let x0 = initial_guess(regime, M, e);
    let anomaly = solve_kepler(regime, e, M, x0, config)?;

    Ok(match regime {
        Regime::Elliptic => elliptic::true_anomaly(anomaly, e),
        Regime::Parabolic => parabolic::true_anomaly(anomaly),
        Regime::Hyperbolic => hyperbolic::true_anomaly(anomaly, e),
    })
}

/// Rate at which the mean anomaly advances (rad/s) around a parent with
/// gravitational parameter `mu`.
///
/// `a` is the semi-major axis magnitude, for the near-parabolic regime the
/// rate is taken from the periapsis distance a * |1 - e|.
pub fn mean_motion(mu: Num, a: Num, e: Num, config: &SolverConfig) -> Num {
    match Regime::of(e, config.delta) {
        Regime::Elliptic => elliptic::mean_motion(mu, a),
        Regime::Parabolic => parabolic::mean_motion(mu, a * (1.0 - e).abs()),
        Regime::Hyperbolic => hyperbolic::mean_motion(mu, a),
    }
}

/// https://en.wikipedia.org/wiki/Orbital_period
pub fn period(a: Num, mu: Num) -> Num {
    TWO_PI * (a.powi(3) / mu).sqrt()
}

/// Wraps an angle into (-pi, pi]
pub fn reduce_angle(angle: Num) -> Num {
    let wrapped = angle.rem_euclid(TWO_PI);

    if wrapped > PI {
        wrapped - TWO_PI
    } else {
        wrapped
    }
}
