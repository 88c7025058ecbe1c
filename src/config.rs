use crate::constants::{DELTA, MAX_ITERATIONS, NEWTON_TOLERANCE, SERIES_TOLERANCE};
use crate::Num;

/// Numerical knobs of the Kepler solver.
///
/// The defaults are the values the propagation engine is tested against,
/// override them only to study convergence behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Orbits with |e - 1| <= delta use the near-parabolic solver
    pub delta: Num,
    /// Terms of the near-parabolic series smaller than this are dropped
    pub series_tolerance: Num,
    /// Newton iteration stops once a step is smaller than this
    pub tolerance: Num,
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            delta: DELTA,
            series_tolerance: SERIES_TOLERANCE,
            tolerance: NEWTON_TOLERANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    pub fn with_tolerance(self, tolerance: Num) -> Self {
        Self { tolerance, ..self }
    }
}
