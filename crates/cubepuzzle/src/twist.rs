//! Applying moves to a cube.

use cubemath::{Axis, QuarterTurns};

use crate::{Cube, LAYER_SIZE, Move, MoveSequence};

impl Move {
    /// Returns the axis that the move rotates around.
    pub const fn axis(self) -> Axis {
        self.face.axis()
    }
    /// Returns the coordinate along [`Move::axis()`] of the layer that the
    /// move turns.
    pub const fn layer(self) -> i32 {
        self.face.layer()
    }
    /// Returns the rotation about the positive end of [`Move::axis()`].
    ///
    /// A clockwise turn as seen from outside a face is a negative rotation
    /// about that face's outward normal, so faces on the negative end of an
    /// axis rotate the opposite way around the axis.
    pub fn quarter_turns(self) -> QuarterTurns {
        QuarterTurns::new((self.face.sign() * self.direction.sign()).int())
    }
    /// Returns the rotation angle in degrees about the positive end of
    /// [`Move::axis()`]. This is always either 90 or -90.
    pub fn angle(self) -> i32 {
        self.quarter_turns().degrees()
    }
    /// Returns the axis and angle in degrees of the rotation, for use by
    /// animation.
    pub fn rotation(self) -> (Axis, i32) {
        (self.axis(), self.angle())
    }
}

impl Cube {
    /// Turns one face layer by a quarter turn.
    ///
    /// Exactly the nine cubelets in the layer move. Each one has its position
    /// rotated and each of its stickers relabeled with the face that the
    /// sticker points toward after the rotation.
    pub fn apply_move(&mut self, mv: Move) {
        let axis = mv.axis();
        let layer = mv.layer();
        let rot = mv.quarter_turns();
        log::trace!("applying {mv}: {}° about {axis} at layer {layer}", rot.degrees());

        let mut moved = 0;
        for cubelet in &mut self.cubelets {
            if cubelet.position()[axis] == layer {
                if let Err(e) = cubelet.rotate(axis, rot) {
                    panic!("geometry invariant violated while applying {mv}: {e}");
                }
                moved += 1;
            }
        }
        debug_assert_eq!(moved, LAYER_SIZE, "wrong number of cubelets in layer");
    }

    /// Applies every move in a sequence, in order.
    pub fn apply_sequence(&mut self, moves: &MoveSequence) {
        for &mv in moves {
            self.apply_move(mv);
        }
    }
}
