//! Principal axes.

use std::fmt;

use crate::Vec3i;

/// 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl Axis {
    /// All axes, in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub const fn index(self) -> usize {
        self as usize
    }
    /// Returns the name of the axis as an uppercase character.
    pub const fn name(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }

    /// Returns the perpendicular axes from this one, using the right-hand
    /// rule. A positive quarter turn about `self` takes the first returned
    /// axis to the second.
    pub const fn perpendiculars(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z], // X+ => rotate from Y+ to Z+.
            Axis::Y => [Axis::Z, Axis::X], // Y+ => rotate from Z+ to X+.
            Axis::Z => [Axis::X, Axis::Y], // Z+ => rotate from X+ to Y+.
        }
    }

    /// Returns an iterator over all axes.
    pub fn iter() -> impl Clone + Iterator<Item = Axis> {
        Self::ALL.into_iter()
    }

    /// Returns the unit vector along this axis.
    pub const fn unit_vector(self) -> Vec3i {
        match self {
            Axis::X => Vec3i::new(1, 0, 0),
            Axis::Y => Vec3i::new(0, 1, 0),
            Axis::Z => Vec3i::new(0, 0, 1),
        }
    }
}
