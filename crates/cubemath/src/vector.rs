use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::{Axis, Float, Sign};

/// 3-dimensional vector with integer coordinates.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec3i(pub [i32; 3]);
impl fmt::Display for Vec3i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x}, {y}, {z})")
    }
}
impl Index<Axis> for Vec3i {
    type Output = i32;

    fn index(&self, axis: Axis) -> &i32 {
        &self.0[axis.index()]
    }
}
impl IndexMut<Axis> for Vec3i {
    fn index_mut(&mut self, axis: Axis) -> &mut i32 {
        &mut self.0[axis.index()]
    }
}
impl Neg for Vec3i {
    type Output = Vec3i;

    fn neg(self) -> Vec3i {
        Vec3i(self.0.map(|x| -x))
    }
}
impl Add for Vec3i {
    type Output = Vec3i;

    fn add(self, rhs: Vec3i) -> Vec3i {
        Vec3i(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}
impl Sub for Vec3i {
    type Output = Vec3i;

    fn sub(self, rhs: Vec3i) -> Vec3i {
        self + -rhs
    }
}
impl Mul<i32> for Vec3i {
    type Output = Vec3i;

    fn mul(self, rhs: i32) -> Vec3i {
        Vec3i(self.0.map(|x| x * rhs))
    }
}
impl From<[i32; 3]> for Vec3i {
    fn from(value: [i32; 3]) -> Self {
        Vec3i(value)
    }
}
impl From<Vec3i> for cgmath::Vector3<Float> {
    fn from(value: Vec3i) -> Self {
        let [x, y, z] = value.0;
        cgmath::vec3(x as Float, y as Float, z as Float)
    }
}

impl Vec3i {
    /// Zero vector.
    pub const ZERO: Vec3i = Vec3i([0; 3]);

    /// Constructs a vector from its coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self([x, y, z])
    }

    /// Returns the X coordinate.
    pub const fn x(self) -> i32 {
        self.0[0]
    }
    /// Returns the Y coordinate.
    pub const fn y(self) -> i32 {
        self.0[1]
    }
    /// Returns the Z coordinate.
    pub const fn z(self) -> i32 {
        self.0[2]
    }

    /// Returns the dot product of two vectors.
    pub fn dot(self, other: Vec3i) -> i32 {
        (0..3).map(|i| self.0[i] * other.0[i]).sum()
    }

    /// Returns the axis and sign of the vector if it is a unit vector along a
    /// single axis.
    pub fn as_signed_unit(self) -> Option<(Axis, Sign)> {
        let mut found = None;
        for axis in Axis::iter() {
            match self[axis] {
                0 => (),
                c @ (-1 | 1) if found.is_none() => found = Some((axis, Sign::of(c))),
                _ => return None,
            }
        }
        found
    }

    /// Returns the vector rounded from floating-point coordinates.
    pub fn round_from(v: cgmath::Vector3<Float>) -> Self {
        Self::new(v.x.round() as i32, v.y.round() as i32, v.z.round() as i32)
    }

    /// Returns an iterator over the 27 points of `{-1, 0, 1}³`, with X
    /// varying slowest and Z fastest.
    pub fn grid_points() -> impl Clone + Iterator<Item = Vec3i> {
        Sign::iter().flat_map(|x| {
            Sign::iter()
                .flat_map(move |y| Sign::iter().map(move |z| Vec3i::new(x.int(), y.int(), z.int())))
        })
    }
}
