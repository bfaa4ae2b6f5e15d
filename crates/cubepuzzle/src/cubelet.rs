use std::ops::Index;

use cubemath::{Axis, QuarterTurns, Vec3i};

use crate::{FaceLabel, GeometryError, Rgb};

/// Stickers on a single cubelet, keyed by the face each sticker points
/// toward.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Stickers([Option<Rgb>; 6]);
impl Index<FaceLabel> for Stickers {
    type Output = Option<Rgb>;

    fn index(&self, face: FaceLabel) -> &Self::Output {
        &self.0[face.index()]
    }
}
impl FromIterator<(FaceLabel, Rgb)> for Stickers {
    fn from_iter<T: IntoIterator<Item = (FaceLabel, Rgb)>>(iter: T) -> Self {
        let mut ret = Self::default();
        for (face, color) in iter {
            ret.0[face.index()] = Some(color);
        }
        ret
    }
}
impl Stickers {
    /// Returns the color of the sticker pointing toward `face`, if there is
    /// one.
    pub fn get(&self, face: FaceLabel) -> Option<Rgb> {
        self[face]
    }
    /// Returns the number of stickers.
    pub fn len(&self) -> usize {
        self.0.iter().flatten().count()
    }
    /// Returns whether there are no stickers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns an iterator over stickers, in the order of [`FaceLabel::ALL`].
    pub fn iter(&self) -> impl '_ + Iterator<Item = (FaceLabel, Rgb)> {
        FaceLabel::ALL
            .into_iter()
            .filter_map(|face| Some((face, self[face]?)))
    }

    /// Returns the stickers after rotating the cubelet about `axis`.
    ///
    /// Each sticker keeps its color and is relabeled with the face that its
    /// rotated normal points toward.
    pub fn rotated(&self, axis: Axis, rot: QuarterTurns) -> Result<Self, GeometryError> {
        self.iter()
            .map(|(face, color)| Ok((face.rotated(axis, rot)?, color)))
            .collect()
    }
}

/// Type of cubelet, determined by its number of stickers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CubeletKind {
    /// Hidden cubelet at the center of the cube with no stickers.
    Core,
    /// Cubelet at the center of a face with one sticker.
    Center,
    /// Cubelet on an edge with two stickers.
    Edge,
    /// Cubelet on a corner with three stickers.
    Corner,
}

/// Single sub-cube of the puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cubelet {
    position: Vec3i,
    stickers: Stickers,
}
impl Cubelet {
    /// Constructs the cubelet that belongs at `position` on a solved cube.
    ///
    /// Each coordinate at ±1 contributes one sticker on the corresponding
    /// face.
    pub fn new(position: Vec3i) -> Self {
        let stickers = FaceLabel::ALL
            .into_iter()
            .filter(|face| position[face.axis()] == face.layer())
            .map(|face| (face, face.color()))
            .collect();
        Self { position, stickers }
    }

    /// Returns the current grid position of the cubelet.
    pub fn position(&self) -> Vec3i {
        self.position
    }
    /// Returns the stickers on the cubelet.
    pub fn stickers(&self) -> &Stickers {
        &self.stickers
    }
    /// Returns the type of cubelet.
    pub fn kind(&self) -> CubeletKind {
        match self.stickers.len() {
            0 => CubeletKind::Core,
            1 => CubeletKind::Center,
            2 => CubeletKind::Edge,
            _ => CubeletKind::Corner,
        }
    }

    /// Returns whether the cubelet is in the layer turned by `face`.
    pub fn is_in_layer(&self, face: FaceLabel) -> bool {
        self.position[face.axis()] == face.layer()
    }

    /// Rotates the cubelet's position and stickers about `axis`.
    ///
    /// The cubelet is left unmodified if an error occurs.
    pub(crate) fn rotate(&mut self, axis: Axis, rot: QuarterTurns) -> Result<(), GeometryError> {
        let stickers = self.stickers.rotated(axis, rot)?;
        self.position = rot.rotate(axis, self.position);
        self.stickers = stickers;
        Ok(())
    }
}
