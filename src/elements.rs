use std::fmt;

use chrono::{DateTime, Utc};

use crate::astro::{self, Regime};
use crate::config::SolverConfig;
use crate::error::{Error, Result};
use crate::Num;

/// Osculating Keplerian elements of one body at an epoch.
///
/// Angles are in radians, distances in km. Propagation never mutates an
/// orbit, every step produces a fresh clone with a new anomaly and epoch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orbit {
    pub id: String,
    pub epoch: DateTime<Utc>,
    /// ν, catalogs label it the mean anomaly at epoch but the engine
    /// treats it as the true anomaly
    pub anomaly_at_epoch: Num,
    /// ω
    pub argument_of_periapsis: Num,
    /// Ω
    pub longitude_of_ascending_node: Num,
    pub inclination: Num,
    pub eccentricity: Num,
    /// Magnitude of the semi-major axis, also for hyperbolic orbits
    pub semi_major_axis: Num,
    pub absolute_magnitude: Num,
    pub slope: Num,
    pub mean_daily_motion: Num,
}

impl Orbit {
    /// An orbit with only the geometry set, auxiliary catalog values are zero.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        epoch: DateTime<Utc>,
        anomaly_at_epoch: Num,
        argument_of_periapsis: Num,
        longitude_of_ascending_node: Num,
        inclination: Num,
        eccentricity: Num,
        semi_major_axis: Num,
    ) -> Self {
        Self {
            id: id.into(),
            epoch,
            anomaly_at_epoch,
            argument_of_periapsis,
            longitude_of_ascending_node,
            inclination,
            eccentricity,
            semi_major_axis,
            absolute_magnitude: 0.0,
            slope: 0.0,
            mean_daily_motion: 0.0,
        }
    }

    /// Rejects element sets the propagation engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        let e = self.eccentricity;
        let a = self.semi_major_axis;

        let angles = [
            self.anomaly_at_epoch,
            self.argument_of_periapsis,
            self.longitude_of_ascending_node,
            self.inclination,
        ];
        if !angles.iter().all(|angle| angle.is_finite()) {
            return Err(Error::degenerate(format!("{}: non-finite angle", self.id)));
        }

        if !(e.is_finite() && e >= 0.0) {
            return Err(Error::degenerate(format!(
                "{}: eccentricity {e} must be >= 0",
                self.id
            )));
        }

        if !(a.is_finite() && a > 0.0) {
            return Err(Error::degenerate(format!(
                "{}: semi-major axis {a} must be > 0",
                self.id
            )));
        }

        // The semi-latus rectum a * |1 - e^2| collapses to zero
        if e == 1.0 {
            return Err(Error::degenerate(format!(
                "{}: eccentricity of exactly 1 has no semi-major axis",
                self.id
            )));
        }

        if 1.0 + e * self.anomaly_at_epoch.cos() <= 0.0 {
            return Err(Error::degenerate(format!(
                "{}: true anomaly {} lies beyond the asymptote",
                self.id, self.anomaly_at_epoch
            )));
        }

        Ok(())
    }

    pub fn regime(&self, config: &SolverConfig) -> Regime {
        Regime::of(self.eccentricity, config.delta)
    }

    pub fn is_bound(&self) -> bool {
        self.eccentricity < 1.0
    }

    /// p = a * |1 - e^2|
    pub fn semi_latus_rectum(&self) -> Num {
        self.semi_major_axis * (1.0 - self.eccentricity.powi(2)).abs()
    }

    /// q = a * |1 - e|
    pub fn periapsis_distance(&self) -> Num {
        self.semi_major_axis * (1.0 - self.eccentricity).abs()
    }

    /// Orbital period in seconds around a parent with gravitational parameter `mu`
    pub fn period(&self, mu: Num) -> Result<Num> {
        if !self.is_bound() {
            return Err(Error::Unbound {
                eccentricity: self.eccentricity,
            });
        }

        Ok(astro::period(self.semi_major_axis, mu))
    }
}

impl fmt::Display for Orbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: \"{}\" nu: {} w: {} omega: {} i: {} e: {} a: {}",
            self.id,
            self.anomaly_at_epoch,
            self.argument_of_periapsis,
            self.longitude_of_ascending_node,
            self.inclination,
            self.eccentricity,
            self.semi_major_axis,
        )
    }
}
