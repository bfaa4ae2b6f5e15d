use std::fmt;

use cubemath::{Axis, QuarterTurns, Sign, Vec3i};

use crate::{GeometryError, Rgb};

/// Face of the cube, identified by its outward normal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum FaceLabel {
    /// Top face (Y+).
    Up = 0,
    /// Bottom face (Y-).
    Down = 1,
    /// Face toward the camera (Z+).
    Front = 2,
    /// Face away from the camera (Z-).
    Back = 3,
    /// Left face (X-).
    Left = 4,
    /// Right face (X+).
    Right = 5,
}
impl fmt::Display for FaceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl FaceLabel {
    /// All faces, in canonical order.
    pub const ALL: [FaceLabel; 6] = [
        FaceLabel::Up,
        FaceLabel::Down,
        FaceLabel::Front,
        FaceLabel::Back,
        FaceLabel::Left,
        FaceLabel::Right,
    ];

    /// Returns the index of the face in [`FaceLabel::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the axis that the face rotates around.
    pub const fn axis(self) -> Axis {
        use FaceLabel::*;

        match self {
            Up | Down => Axis::Y,
            Front | Back => Axis::Z,
            Left | Right => Axis::X,
        }
    }
    /// Returns the direction of the face along its axis.
    pub const fn sign(self) -> Sign {
        use FaceLabel::*;

        match self {
            Up | Front | Right => Sign::Pos,
            Down | Back | Left => Sign::Neg,
        }
    }
    /// Returns the coordinate along [`FaceLabel::axis()`] of the layer turned
    /// by this face (either -1 or 1).
    pub const fn layer(self) -> i32 {
        self.sign().int()
    }
    /// Returns the outward unit normal of the face.
    pub fn normal(self) -> Vec3i {
        let mut ret = Vec3i::ZERO;
        ret[self.axis()] = self.layer();
        ret
    }
    /// Returns the display color of stickers belonging to this face.
    pub const fn color(self) -> Rgb {
        use FaceLabel::*;

        match self {
            Up => Rgb::WHITE,
            Down => Rgb::YELLOW,
            Front => Rgb::GREEN,
            Back => Rgb::BLUE,
            Left => Rgb::ORANGE,
            Right => Rgb::RED,
        }
    }
    /// Returns the face on the opposite side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        use FaceLabel::*;

        match self {
            Up => Down,
            Down => Up,
            Front => Back,
            Back => Front,
            Left => Right,
            Right => Left,
        }
    }

    /// Returns the single-letter notation symbol for the face.
    pub const fn symbol(self) -> char {
        use FaceLabel::*;

        match self {
            Up => 'U',
            Down => 'D',
            Front => 'F',
            Back => 'B',
            Left => 'L',
            Right => 'R',
        }
    }
    /// Returns the face with the given notation symbol. Symbols are
    /// case-sensitive.
    pub const fn from_symbol(c: char) -> Option<Self> {
        use FaceLabel::*;

        match c {
            'U' => Some(Up),
            'D' => Some(Down),
            'F' => Some(Front),
            'B' => Some(Back),
            'L' => Some(Left),
            'R' => Some(Right),
            _ => None,
        }
    }

    /// Returns the face on the given side of an axis, or `None` for
    /// [`Sign::Zero`].
    pub const fn from_axis_sign(axis: Axis, sign: Sign) -> Option<Self> {
        use FaceLabel::*;

        match (axis, sign) {
            (_, Sign::Zero) => None,
            (Axis::X, Sign::Pos) => Some(Right),
            (Axis::X, Sign::Neg) => Some(Left),
            (Axis::Y, Sign::Pos) => Some(Up),
            (Axis::Y, Sign::Neg) => Some(Down),
            (Axis::Z, Sign::Pos) => Some(Front),
            (Axis::Z, Sign::Neg) => Some(Back),
        }
    }
    /// Returns the face whose outward normal is exactly `normal`.
    pub fn from_normal(normal: Vec3i) -> Option<Self> {
        let (axis, sign) = normal.as_signed_unit()?;
        Self::from_axis_sign(axis, sign)
    }

    /// Returns the face that this face's normal points toward after rotating
    /// about `axis`.
    pub fn rotated(self, axis: Axis, rot: QuarterTurns) -> Result<Self, GeometryError> {
        let v = rot.rotate(axis, self.normal());
        Self::from_normal(v).ok_or(GeometryError::NoFaceWithNormal(v))
    }
}
