#![allow(non_snake_case)]

//! Two-body propagation of Keplerian orbits.
//!
//! An [`Orbit`] holds the osculating elements of one body at an epoch. The
//! [`Propagator`] advances it by an elapsed time with the mean motion method,
//! solving Kepler's equation in the elliptic, near-parabolic or hyperbolic
//! form depending on the eccentricity, and [`orbit_to_vector`] /
//! [`orbit_to_position`] turn the result into inertial-frame coordinates.

pub mod astro;
pub mod bodies;
pub mod config;
pub mod constants;
pub mod elements;
pub mod error;
pub mod math;
pub mod propagate;
pub mod rotation;
pub mod state_vectors;
pub mod units;
pub mod utils;

pub use self::config::SolverConfig;
pub use self::constants::*;
pub use self::elements::Orbit;
pub use self::error::{Error, Result};
pub use self::propagate::{orbital_period, Propagator, SteppedPropagation};
pub use self::rotation::Axis;
pub use self::state_vectors::{orbit_to_position, orbit_to_vector, Position, StateVectors};

pub type Num = f64;
pub type Vec3 = glam::DVec3;
pub type Mat3 = glam::DMat3;

#[inline]
pub const fn vec3(x: Num, y: Num, z: Num) -> Vec3 {
    Vec3::new(x, y, z)
}
