use cubemath::Vec3i;

use crate::{Cubelet, FaceLabel, Rgb};

/// State of a 3x3x3 cube.
///
/// Cubelets are stored in a fixed order that never changes; moves only update
/// the position and stickers of each cubelet. Two cubes are equal if every
/// cubelet has the same position and stickers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    pub(crate) cubelets: Vec<Cubelet>,
}
impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}
impl Cube {
    /// Returns a new solved cube.
    ///
    /// Cubelets are ordered by their home position, with X varying slowest
    /// and Z fastest.
    pub fn solved() -> Self {
        Self {
            cubelets: Vec3i::grid_points().map(Cubelet::new).collect(),
        }
    }

    /// Returns all cubelets, including the core.
    pub fn cubelets(&self) -> &[Cubelet] {
        &self.cubelets
    }
    /// Returns an iterator over all cubelets.
    pub fn iter(&self) -> std::slice::Iter<'_, Cubelet> {
        self.cubelets.iter()
    }
    /// Returns the cubelet currently at `position`, if there is one.
    pub fn cubelet_at(&self, position: Vec3i) -> Option<&Cubelet> {
        self.cubelets.iter().find(|c| c.position() == position)
    }
    /// Returns the cubelets currently in the layer turned by `face`.
    pub fn layer(&self, face: FaceLabel) -> impl '_ + Iterator<Item = &'_ Cubelet> {
        self.cubelets.iter().filter(move |c| c.is_in_layer(face))
    }
    /// Returns the color of the sticker at `position` pointing toward `face`,
    /// if there is one.
    pub fn sticker_at(&self, face: FaceLabel, position: Vec3i) -> Option<Rgb> {
        self.cubelet_at(position)?.stickers().get(face)
    }
    /// Returns the total number of stickers on the cube.
    pub fn sticker_count(&self) -> usize {
        self.cubelets.iter().map(|c| c.stickers().len()).sum()
    }

    /// Returns whether every cubelet is at its home position with its
    /// original stickers.
    pub fn is_solved(&self) -> bool {
        self.cubelets
            .iter()
            .zip(Vec3i::grid_points())
            .all(|(cubelet, home)| *cubelet == Cubelet::new(home))
    }
}
impl<'a> IntoIterator for &'a Cube {
    type Item = &'a Cubelet;
    type IntoIter = std::slice::Iter<'a, Cubelet>;

    fn into_iter(self) -> Self::IntoIter {
        self.cubelets.iter()
    }
}
