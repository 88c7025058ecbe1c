//! Rotations between the perifocal and the inertial (ecliptic) frame.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::{Mat3, Num, Vec3};

/// One of the three cartesian axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

impl TryFrom<char> for Axis {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'x' => Ok(Axis::X),
            'y' => Ok(Axis::Y),
            'z' => Ok(Axis::Z),
            _ => Err(Error::InvalidAxis(c.to_string())),
        }
    }
}

/// Axis by index, 0 is X
impl TryFrom<usize> for Axis {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(Error::InvalidAxis(index.to_string())),
        }
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => Axis::try_from(c),
            _ => Err(Error::InvalidAxis(s.to_string())),
        }
    }
}

/// Right handed rotation of `angle` radians about `axis`
pub fn rotation_matrix(angle: Num, axis: Axis) -> Mat3 {
    match axis {
        Axis::X => Mat3::from_rotation_x(angle),
        Axis::Y => Mat3::from_rotation_y(angle),
        Axis::Z => Mat3::from_rotation_z(angle),
    }
}

pub fn rotate_vector(vector: Vec3, angle: Num, axis: Axis) -> Vec3 {
    rotation_matrix(angle, axis).mul_vec3(vector)
}

/// Perifocal to inertial rotation Rz(Ω) * Rx(i) * Rz(ω), multiplied out.
///
/// Equivalent to rotating by ω about Z, then by i about X, then by Ω about Z,
/// at the cost of six trigonometric calls instead of three matrix products.
pub fn orbit_rotation(ω: Num, i: Num, Ω: Num) -> Mat3 {
    let (sw, cw) = ω.sin_cos();
    let (si, ci) = i.sin_cos();
    let (so, co) = Ω.sin_cos();

    // glam matrices are column major
    Mat3::from_cols(
        Vec3::new(co * cw - so * ci * sw, so * cw + co * ci * sw, si * sw),
        Vec3::new(-co * sw - so * ci * cw, -so * sw + co * ci * cw, si * cw),
        Vec3::new(so * si, -co * si, ci),
    )
}

/// The three rotations of [`orbit_rotation`] applied one after the other.
pub fn rotate_orbit_sequential(vector: Vec3, ω: Num, i: Num, Ω: Num) -> Vec3 {
    let v = rotate_vector(vector, ω, Axis::Z);
    let v = rotate_vector(v, i, Axis::X);

    rotate_vector(v, Ω, Axis::Z)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    use super::*;
    use crate::constants::PI;
    use crate::vec3;

    #[test_case(Axis::X, vec3(0.0, 1.0, 0.0), vec3(0.0, 0.0, 1.0) ; "x turns y into z")]
    #[test_case(Axis::Y, vec3(0.0, 0.0, 1.0), vec3(1.0, 0.0, 0.0) ; "y turns z into x")]
    #[test_case(Axis::Z, vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0) ; "z turns x into y")]
    fn quarter_turns(axis: Axis, input: Vec3, expected: Vec3) {
        let rotated = rotate_vector(input, PI / 2.0, axis);

        assert!(rotated.abs_diff_eq(expected, 1e-15), "{rotated:?} != {expected:?}");
    }

    #[test]
    fn rotation_preserves_length() {
        let v = vec3(5e9, -3e9, 1e9);
        let rotated = rotate_vector(v, 0.83, Axis::Y);

        assert_abs_diff_eq!(rotated.length(), v.length(), epsilon = 1e-3);
    }

    #[test_case('x' => Ok(Axis::X))]
    #[test_case('Y' => Ok(Axis::Y))]
    #[test_case('z' => Ok(Axis::Z))]
    #[test_case('w' => Err(Error::InvalidAxis("w".to_string())))]
    fn axis_from_char(c: char) -> Result<Axis, Error> {
        Axis::try_from(c)
    }

    #[test]
    fn axis_from_index() {
        assert_eq!(Axis::try_from(2usize), Ok(Axis::Z));
        assert_eq!(Axis::try_from(3usize), Err(Error::InvalidAxis("3".to_string())));
    }

    #[test]
    fn axis_from_str() {
        assert_eq!("y".parse::<Axis>(), Ok(Axis::Y));
        assert!(matches!("xy".parse::<Axis>(), Err(Error::InvalidAxis(_))));
        assert!(matches!("".parse::<Axis>(), Err(Error::InvalidAxis(_))));
    }

    #[test]
    fn composed_rotation_matches_sequential_rotations() {
        let v = vec3(5e9, 5e9, 0.0);

        for step in 0..1800 {
            let angle = (step as Num / 10.0).to_radians();

            let composed = orbit_rotation(angle, angle, angle).mul_vec3(v);
            let sequential = rotate_orbit_sequential(v, angle, angle, angle);

            let error = (composed - sequential).length() / v.length();
            assert!(error < 1e-7, "angle {angle}: {composed:?} != {sequential:?}");
        }
    }

    #[test]
    fn composed_rotation_with_distinct_angles() {
        let v = vec3(1.0e4, -2.5e4, 3.0e3);

        for w in 0..12 {
            for i in 0..12 {
                for o in 0..12 {
                    let (ω, inc, Ω) = (w as Num * 0.26, i as Num * 0.26, o as Num * 0.26);

                    let composed = orbit_rotation(ω, inc, Ω).mul_vec3(v);
                    let sequential = rotate_orbit_sequential(v, ω, inc, Ω);

                    assert!(
                        composed.abs_diff_eq(sequential, 1e-9 * v.length()),
                        "ω {ω} i {inc} Ω {Ω}: {composed:?} != {sequential:?}"
                    );
                }
            }
        }
    }
}
