//! Mean motion propagation of unperturbed two-body orbits.

use std::iter::FusedIterator;

use chrono::Duration;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::astro::{self, Regime};
use crate::config::SolverConfig;
use crate::elements::Orbit;
use crate::error::{Error, Result};
use crate::state_vectors::{orbit_to_position, Position};
use crate::utils::{duration_seconds, normalize_angle, seconds_to_duration};
use crate::Num;

/// Propagates orbits around a parent body.
///
/// Holds no mutable state, a single propagator can be shared by any number
/// of threads.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Propagator {
    /// Gravitational parameter of the parent (km^3/s^2)
    pub mu: Num,
    #[cfg_attr(feature = "serde", serde(default))]
    pub config: SolverConfig,
}

impl Propagator {
    pub fn new(mu: Num) -> Self {
        Self::with_config(mu, SolverConfig::default())
    }

    pub fn with_config(mu: Num, config: SolverConfig) -> Self {
        Self { mu, config }
    }

    /// Advances `orbit` by `elapsed` using the mean motion method.
    ///
    /// Returns a copy of `orbit` with a new true anomaly and epoch, all other
    /// elements are constant under two-body motion. Elliptic anomalies are
    /// reported in [0, 2pi).
    pub fn mean_motion(&self, orbit: &Orbit, elapsed: Duration) -> Result<Orbit> {
        orbit.validate()?;

        if elapsed == Duration::zero() {
            return Ok(orbit.clone());
        }

        let e = orbit.eccentricity;
        let config = &self.config;

        let M0 = astro::to_mean_anomaly(orbit.anomaly_at_epoch, e, config)?;
        let n = astro::mean_motion(self.mu, orbit.semi_major_axis, e, config);
        let M = M0 + n * duration_seconds(elapsed);

        let nu = astro::from_mean_anomaly(M, e, config)?;
        let nu = match orbit.regime(config) {
            Regime::Elliptic => normalize_angle(nu),
            Regime::Parabolic | Regime::Hyperbolic => nu,
        };

        let epoch = orbit.epoch.checked_add_signed(elapsed).ok_or_else(|| {
            Error::degenerate(format!(
                "{}: epoch {} + {elapsed} is out of range",
                orbit.id, orbit.epoch
            ))
        })?;

        Ok(Orbit {
            anomaly_at_epoch: nu,
            epoch,
            ..orbit.clone()
        })
    }

    /// `count + 1` orbits, `step` apart, starting with `orbit` itself.
    ///
    /// Every entry is propagated straight from `orbit`, errors do not carry
    /// over from one step to the next.
    pub fn stepped<'a>(
        &self,
        orbit: &'a Orbit,
        step: Duration,
        count: usize,
    ) -> SteppedPropagation<'a> {
        SteppedPropagation {
            propagator: *self,
            orbit,
            step,
            index: 0,
            count,
        }
    }

    /// One full period of `orbit` sampled in `count` equal steps.
    pub fn full_orbit<'a>(
        &self,
        orbit: &'a Orbit,
        count: usize,
    ) -> Result<SteppedPropagation<'a>> {
        let period = orbit.period(self.mu)?;

        let step = if count == 0 {
            Duration::zero()
        } else {
            seconds_to_duration(period / count as Num)
        };

        Ok(self.stepped(orbit, step, count))
    }

    /// Positions of `orbit` at `count + 1` epochs, `step` apart.
    pub fn trajectory(
        &self,
        orbit: &Orbit,
        step: Duration,
        count: usize,
    ) -> Result<Vec<Position>> {
        self.stepped(orbit, step, count)
            .map(|propagated| orbit_to_position(&propagated?))
            .collect()
    }

    /// Computes the [`trajectory`](Self::trajectory) of every orbit of a catalog
    /// on the rayon thread pool.
    ///
    /// Results come back in input order. A record that fails to propagate
    /// leaves its error in its slot and does not stop the rest of the batch.
    pub fn propagate_catalog(
        &self,
        orbits: &[Orbit],
        step: Duration,
        count: usize,
    ) -> Vec<Result<Vec<Position>>> {
        debug!(records = orbits.len(), count, "propagating catalog");

        let results: Vec<_> = orbits
            .par_iter()
            .map(|orbit| {
                let trajectory = self.trajectory(orbit, step, count);

                if let Err(err) = &trajectory {
                    warn!(
                        id = %orbit.id,
                        regime = %orbit.regime(&self.config),
                        %err,
                        "failed to propagate orbit"
                    );
                }

                trajectory
            })
            .collect();

        let failed = results.iter().filter(|result| result.is_err()).count();
        debug!(records = results.len(), failed, "catalog propagated");

        results
    }
}

/// Orbital period of `orbit` around a parent with gravitational parameter `mu`.
pub fn orbital_period(orbit: &Orbit, mu: Num) -> Result<Duration> {
    orbit.period(mu).map(seconds_to_duration)
}

/// Lazy sequence of propagated orbits in increasing time order, see
/// [`Propagator::stepped`]. Clone it before iterating to walk it twice.
#[derive(Debug, Clone)]
pub struct SteppedPropagation<'a> {
    propagator: Propagator,
    orbit: &'a Orbit,
    step: Duration,
    index: usize,
    count: usize,
}

impl SteppedPropagation<'_> {
    pub fn step(&self) -> Duration {
        self.step
    }
}

impl Iterator for SteppedPropagation<'_> {
    type Item = Result<Orbit>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index > self.count {
            return None;
        }

        let k = self.index;
        self.index += 1;

        if k == 0 {
            return Some(Ok(self.orbit.clone()));
        }

        let offset = i32::try_from(k)
            .ok()
            .and_then(|k| self.step.checked_mul(k))
            .ok_or_else(|| {
                Error::degenerate(format!(
                    "{}: step {} times {k} is out of range",
                    self.orbit.id, self.step
                ))
            });

        Some(offset.and_then(|offset| self.propagator.mean_motion(self.orbit, offset)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.saturating_add(1).saturating_sub(self.index);

        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SteppedPropagation<'_> {}

impl FusedIterator for SteppedPropagation<'_> {}
