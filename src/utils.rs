use chrono::Duration;

use crate::constants::TWO_PI;
use crate::Num;

/// Wraps an angle into [0, 2pi)
pub fn normalize_angle(angle: Num) -> Num {
    let wrapped = angle.rem_euclid(TWO_PI);

    // rem_euclid can round up to exactly 2pi for tiny negative angles
    if wrapped >= TWO_PI {
        0.0
    } else {
        wrapped
    }
}

pub fn duration_seconds(duration: Duration) -> Num {
    match duration.num_nanoseconds() {
        Some(nanos) => nanos as Num * 1e-9,
        None => duration.num_milliseconds() as Num * 1e-3,
    }
}

/// Rounds to whole microseconds, saturating at the range of [`Duration`]
pub fn seconds_to_duration(seconds: Num) -> Duration {
    Duration::microseconds((seconds * 1e6).round() as i64)
}
