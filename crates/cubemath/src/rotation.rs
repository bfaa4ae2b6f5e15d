//! Rotations about a principal axis.
//!
//! All rotations follow the right-hand rule: a positive angle about an axis
//! turns counterclockwise when viewed from the positive end of that axis.

use cgmath::{Deg, Matrix3, Vector3};
use thiserror::Error;

use crate::{Axis, Float, Vec3i};

/// Error produced when converting an angle to a discrete rotation.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AngleError {
    /// Angle is not a multiple of 90 degrees
    #[error("angle {0}° is not a multiple of 90°")]
    NotRightAngle(i32),
}

/// Rotation by a whole number of quarter turns, counted modulo 4.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct QuarterTurns(u8);
impl QuarterTurns {
    /// Identity rotation.
    pub const ZERO: Self = Self(0);
    /// Single positive quarter turn (90°).
    pub const POSITIVE: Self = Self(1);
    /// Single negative quarter turn (-90°).
    pub const NEGATIVE: Self = Self(3);

    /// Constructs a rotation from a signed number of quarter turns.
    pub const fn new(count: i32) -> Self {
        Self(count.rem_euclid(4) as u8)
    }
    /// Constructs a rotation from an angle in degrees, which must be a
    /// multiple of 90.
    pub const fn from_degrees(angle: i32) -> Result<Self, AngleError> {
        if angle % 90 == 0 {
            Ok(Self::new(angle / 90))
        } else {
            Err(AngleError::NotRightAngle(angle))
        }
    }

    /// Returns the number of positive quarter turns, from 0 to 3.
    pub const fn count(self) -> u8 {
        self.0
    }
    /// Returns the angle in degrees, from -90 to 180.
    pub const fn degrees(self) -> i32 {
        match self.0 {
            3 => -90,
            n => n as i32 * 90,
        }
    }
    /// Returns the inverse rotation.
    #[must_use]
    pub const fn rev(self) -> Self {
        Self::new(-(self.0 as i32))
    }

    /// Rotates a vector about `axis`.
    ///
    /// Each quarter turn is a coordinate swap with one negation, so the result
    /// is exact.
    #[must_use]
    pub fn rotate(self, axis: Axis, mut v: Vec3i) -> Vec3i {
        let [a, b] = axis.perpendiculars();
        for _ in 0..self.0 {
            let (old_a, old_b) = (v[a], v[b]);
            v[a] = -old_b;
            v[b] = old_a;
        }
        v
    }
}

/// Rotates an integer vector about `axis` by `angle` degrees.
///
/// Returns an error if `angle` is not a multiple of 90. Use
/// [`rotate_vector_continuous()`] for arbitrary angles.
pub fn rotate_vector(vec: Vec3i, axis: Axis, angle: i32) -> Result<Vec3i, AngleError> {
    Ok(QuarterTurns::from_degrees(angle)?.rotate(axis, vec))
}

/// Returns the rotation matrix for a rotation about `axis` by `angle`
/// degrees.
pub fn rotation_matrix(axis: Axis, angle: Float) -> Matrix3<Float> {
    let angle = Deg(angle);
    match axis {
        Axis::X => Matrix3::from_angle_x(angle),
        Axis::Y => Matrix3::from_angle_y(angle),
        Axis::Z => Matrix3::from_angle_z(angle),
    }
}

/// Rotates a vector about `axis` by `angle` degrees, which may be any value.
pub fn rotate_vector_continuous(vec: Vector3<Float>, axis: Axis, angle: Float) -> Vector3<Float> {
    rotation_matrix(axis, angle) * vec
}
