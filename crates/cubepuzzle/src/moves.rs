//! Move notation.
//!
//! A move is a face symbol optionally followed by `'` for a counterclockwise
//! turn, such as `R` or `F'`. Sequences are whitespace-separated.

use std::fmt;
use std::str::FromStr;

use cubemath::Sign;
use itertools::Itertools;

use crate::{FaceLabel, ParseMoveError, ParseSequenceError};

/// Rotation direction, as seen from outside the face being turned.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Clockwise.
    #[default]
    Clockwise,
    /// Counterclockwise.
    CounterClockwise,
}
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl Direction {
    /// Returns the reverse direction.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
    /// Returns the sign of this rotation, according to the mathematical
    /// convention of counterclockwise being positive and clockwise being
    /// negative.
    pub const fn sign(self) -> Sign {
        match self {
            Self::Clockwise => Sign::Neg,
            Self::CounterClockwise => Sign::Pos,
        }
    }
    /// Returns the notation suffix for this direction.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Clockwise => "",
            Self::CounterClockwise => "'",
        }
    }
}

/// Quarter turn of a single face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face to turn.
    pub face: FaceLabel,
    /// Direction to turn the face.
    pub direction: Direction,
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.direction)
    }
}
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let first = chars.next().ok_or(ParseMoveError::Empty)?;
        let face = FaceLabel::from_symbol(first).ok_or(ParseMoveError::UnknownFace(first))?;
        let direction = match chars.as_str() {
            "" => Direction::Clockwise,
            "'" => Direction::CounterClockwise,
            _ => {
                return Err(ParseMoveError::InvalidSuffix {
                    token: token.to_owned(),
                });
            }
        };
        Ok(Self { face, direction })
    }
}
impl Move {
    /// Constructs a move.
    pub const fn new(face: FaceLabel, direction: Direction) -> Self {
        Self { face, direction }
    }
    /// Constructs a clockwise move.
    pub const fn cw(face: FaceLabel) -> Self {
        Self::new(face, Direction::Clockwise)
    }
    /// Constructs a counterclockwise move.
    pub const fn ccw(face: FaceLabel) -> Self {
        Self::new(face, Direction::CounterClockwise)
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.rev(),
        }
    }
}

/// Ordered list of moves.
///
/// Sequences are immutable once constructed; derive new ones with
/// [`MoveSequence::inverse()`] or [`MoveSequence::concat()`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct MoveSequence(Vec<Move>);
impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}
impl FromStr for MoveSequence {
    type Err = ParseSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                token.parse::<Move>().map_err(|source| ParseSequenceError {
                    index,
                    token: token.to_owned(),
                    source,
                })
            })
            .collect()
    }
}
impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}
impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
impl MoveSequence {
    /// Returns the moves in order.
    pub fn moves(&self) -> &[Move] {
        &self.0
    }
    /// Returns an iterator over the moves in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }
    /// Returns the number of moves.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Returns whether there are no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the sequence that undoes this one: the moves in reverse order,
    /// each inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.0.iter().rev().map(|m| m.inverse()).collect()
    }
    /// Returns this sequence followed by `other`.
    #[must_use]
    pub fn concat(&self, other: &MoveSequence) -> Self {
        self.0.iter().chain(&other.0).copied().collect()
    }
}
