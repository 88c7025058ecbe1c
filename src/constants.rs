use std::time::{Duration, UNIX_EPOCH};

use chrono::{DateTime, Utc};

use crate::Num;

/// Astronomical unit in km
pub const AU: Num = 149_598_000.0;

pub use std::f64::consts::PI;

pub const TWO_PI: Num = 2.0 * PI;

/// IAU 2009 heliocentric gravitational parameter (km^3/s^2)
pub const SUN_GRAV: Num = 132_712_442_099.000_02;
pub const MERCURY_GRAV: Num = 22_032.09;
pub const VENUS_GRAV: Num = 324_858.592;
pub const EARTH_GRAV: Num = 398_600.441_800_000_03;
pub const MOON_GRAV: Num = 4_902.799_81;
pub const MARS_GRAV: Num = 42_828.374_4;
pub const JUPITER_GRAV: Num = 126_712_762.53;
pub const SATURN_GRAV: Num = 37_931_207.7;
pub const URANUS_GRAV: Num = 5_793_939.300_000_001;
pub const NEPTUNE_GRAV: Num = 6_836_527.100_580_397;

/// Half-width of the band around e = 1 handled by the near-parabolic solver
pub const DELTA: Num = 1e-3;

/// Magnitude below which a term of the near-parabolic series is dropped
pub const SERIES_TOLERANCE: Num = 1e-16;

/// Step size at which Newton's method is considered converged
pub const NEWTON_TOLERANCE: Num = 1.48e-8;

pub const MAX_ITERATIONS: usize = 100;

/// 2000-01-01T00:00:00Z
pub fn j2000() -> DateTime<Utc> {
    DateTime::from(UNIX_EPOCH + Duration::from_secs(946_684_800))
}
