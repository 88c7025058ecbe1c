use thiserror::Error;

use crate::astro::Regime;
use crate::Num;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown rotation axis '{0}', expected one of x, y, z")]
    InvalidAxis(String),

    #[error("{regime} Kepler solver did not converge after {iterations} iterations (last estimate {last})")]
    NonConvergence {
        regime: Regime,
        iterations: usize,
        last: Num,
    },

    #[error("Degenerate orbit: {0}")]
    DegenerateOrbit(String),

    #[error("Orbit with eccentricity {eccentricity} is unbound and has no period")]
    Unbound { eccentricity: Num },

    #[error("Invalid position line: {0}")]
    InvalidPosition(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateOrbit(reason.into())
    }
}
