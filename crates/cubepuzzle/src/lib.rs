//! 3x3x3 twisty puzzle cube backend.
//!
//! A [`Cube`] is a fixed set of 27 [`Cubelet`]s. Each cubelet has a grid
//! position in `{-1, 0, 1}³` and a set of stickers keyed by the face they
//! point toward. [`Cube::apply_move()`] turns one face layer by a quarter
//! turn, and [`MoveSequence`] handles notation, inversion, and scrambles.

mod cube;
mod cubelet;
mod errors;
mod face;
mod moves;
mod rgb;
mod scramble;
mod twist;

#[cfg(test)]
mod tests;

/// Re-export of `cubemath`.
pub use cubemath;
pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use cubemath::{Axis, QuarterTurns, Sign, Vec3i};

    pub use crate::cube::Cube;
    pub use crate::cubelet::{Cubelet, CubeletKind, Stickers};
    pub use crate::errors::{GeometryError, ParseMoveError, ParseSequenceError};
    pub use crate::face::FaceLabel;
    pub use crate::moves::{Direction, Move, MoveSequence};
    pub use crate::rgb::Rgb;
    pub use crate::scramble::{
        DEFAULT_SCRAMBLE_LENGTH, ScrambleParams, ScrambledCube, generate_scramble,
        generate_scramble_with_rng,
    };
}

/// Number of cubelets in a cube, including the core.
pub const CUBELET_COUNT: usize = 27;

/// Number of cubelets in a single face layer.
pub const LAYER_SIZE: usize = 9;

/// Number of stickers on a cube.
pub const STICKER_COUNT: usize = 54;
