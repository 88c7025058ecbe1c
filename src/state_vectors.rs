use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::elements::Orbit;
use crate::error::{Error, Result};
use crate::rotation::orbit_rotation;
use crate::{vec3, Num, Vec3};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateVectors {
    /// km
    pub position: Vec3,
    /// km/s
    pub velocity: Vec3,
}

impl StateVectors {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Sum of the position (km) and velocity (km/s) distances
    pub fn abs_diff(&self, other: &Self) -> Num {
        self.position.distance(other.position) + self.velocity.distance(other.velocity)
    }
}

/// Position in the perifocal frame, x towards periapsis.
///
/// `a` is the semi-major axis magnitude, the orbit equation uses the
/// semi-latus rectum p = a * |1 - e^2| for every regime.
#[inline]
pub fn perifocal_position(a: Num, e: Num, nu: Num) -> Vec3 {
    let p = a * (1.0 - e.powi(2)).abs();
    let (sin_nu, cos_nu) = nu.sin_cos();

    let r = p / (1.0 + e * cos_nu);

    vec3(cos_nu, sin_nu, 0.0) * r
}

#[inline]
pub fn perifocal_velocity(mu: Num, a: Num, e: Num, nu: Num) -> Vec3 {
    let p = a * (1.0 - e.powi(2)).abs();
    let (sin_nu, cos_nu) = nu.sin_cos();

    vec3(-sin_nu, e + cos_nu, 0.0) * (mu / p).sqrt()
}

/// Inertial-frame position and velocity of `orbit` at its epoch, around a
/// parent with gravitational parameter `mu`.
pub fn orbit_to_vector(orbit: &Orbit, mu: Num) -> Result<StateVectors> {
    orbit.validate()?;

    let a = orbit.semi_major_axis;
    let e = orbit.eccentricity;
    let nu = orbit.anomaly_at_epoch;

    let rotation = orbit_rotation(
        orbit.argument_of_periapsis,
        orbit.inclination,
        orbit.longitude_of_ascending_node,
    );

    Ok(StateVectors::new(
        rotation.mul_vec3(perifocal_position(a, e, nu)),
        rotation.mul_vec3(perifocal_velocity(mu, a, e, nu)),
    ))
}

/// Where `orbit` puts its body at the orbit's epoch.
pub fn orbit_to_position(orbit: &Orbit) -> Result<Position> {
    orbit.validate()?;

    let rotation = orbit_rotation(
        orbit.argument_of_periapsis,
        orbit.inclination,
        orbit.longitude_of_ascending_node,
    );
    let r = rotation.mul_vec3(perifocal_position(
        orbit.semi_major_axis,
        orbit.eccentricity,
        orbit.anomaly_at_epoch,
    ));

    Ok(Position {
        id: orbit.id.clone(),
        epoch: orbit.epoch,
        x: r.x,
        y: r.y,
        z: r.z,
    })
}

/// Location of a body in the inertial (ecliptic) frame at an epoch, in km.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub id: String,
    pub epoch: DateTime<Utc>,
    pub x: Num,
    pub y: Num,
    pub z: Num,
}

impl Position {
    pub fn vector(&self) -> Vec3 {
        vec3(self.x, self.y, self.z)
    }

    pub fn distance(&self, other: &Position) -> Num {
        self.vector().distance(other.vector())
    }
}

/// `ID,epoch,X,Y,Z` with an RFC 3339 epoch, the line format of position files
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.id,
            self.epoch.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            self.x,
            self.y,
            self.z
        )
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.trim().split(',').collect();

        let &[id, epoch, x, y, z] = parts.as_slice() else {
            return Err(Error::InvalidPosition(format!(
                "expected 5 fields, got {} in '{line}'",
                parts.len()
            )));
        };

        let epoch = DateTime::parse_from_rfc3339(epoch)
            .map_err(|err| Error::InvalidPosition(format!("epoch '{epoch}': {err}")))?
            .with_timezone(&Utc);

        let coordinate = |value: &str| {
            value
                .trim()
                .parse::<Num>()
                .map_err(|err| Error::InvalidPosition(format!("coordinate '{value}': {err}")))
        };

        Ok(Position {
            id: id.to_string(),
            epoch,
            x: coordinate(x)?,
            y: coordinate(y)?,
            z: coordinate(z)?,
        })
    }
}
