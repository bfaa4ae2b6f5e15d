//! Error types.

use cubemath::Vec3i;
use thiserror::Error;

/// Error produced when a rotated direction does not correspond to any face.
///
/// This can only happen if the face tables are wrong, so callers treat it as a
/// fatal logic error.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryError {
    /// Vector is not the outward normal of any face
    #[error("no face has outward normal {0}")]
    NoFaceWithNormal(Vec3i),
}

/// Error produced when parsing a single move token such as `R` or `F'`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseMoveError {
    /// Empty token
    #[error("empty move token")]
    Empty,
    /// First character is not a face symbol
    #[error("unknown face {0:?}; expected one of U, D, F, B, L, R")]
    UnknownFace(char),
    /// Face symbol is followed by something other than `'`
    #[error("invalid move token {token:?}; expected a face optionally followed by '")]
    InvalidSuffix {
        /// Full token.
        token: String,
    },
}

/// Error produced when parsing a whitespace-separated move sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("move #{} ({token:?}): {source}", .index + 1)]
pub struct ParseSequenceError {
    /// Index of the offending token.
    pub index: usize,
    /// Offending token.
    pub token: String,
    /// Reason the token was rejected.
    pub source: ParseMoveError,
}
