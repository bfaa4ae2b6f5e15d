//! Integer vectors and exact quarter-turn rotations for cube puzzles.
//!
//! Discrete puzzle state only ever rotates by multiples of 90 degrees, so
//! [`rotate_vector()`] works entirely in integers. The floating-point path in
//! [`rotation`] exists for interpolated rendering.

pub use cgmath;

/// Floating-point type used for continuous rotations.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

mod axis;
pub mod rotation;
mod sign;
mod vector;

pub use axis::Axis;
pub use rotation::{AngleError, QuarterTurns, rotate_vector};
pub use sign::Sign;
pub use vector::Vec3i;
