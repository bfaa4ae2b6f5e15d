use std::time::Duration;

use cubepuzzle::{Cube, Move, MoveSequence};

use crate::{AnimationPrefs, TwistAnimation, TwistAnimationState};

/// Steps through a move sequence at a fixed pace, applying each move to a
/// cube and queueing its animation.
#[derive(Debug, Clone)]
pub struct Simulation {
    cube: Cube,
    moves: MoveSequence,
    /// Index of the next move to apply.
    cursor: usize,
    move_interval: Duration,
    since_last_move: Duration,
    animation_prefs: AnimationPrefs,
    animations: TwistAnimationState,
}
impl Simulation {
    /// Constructs a simulation that will apply `moves` to `cube`, one every
    /// `move_interval`. The first move is applied on the first step.
    pub fn new(
        cube: Cube,
        moves: MoveSequence,
        move_interval: Duration,
        animation_prefs: AnimationPrefs,
    ) -> Self {
        Self {
            cube,
            moves,
            cursor: 0,
            move_interval,
            since_last_move: move_interval,
            animation_prefs,
            animations: TwistAnimationState::default(),
        }
    }

    /// Advances time by `delta`. Returns the move applied during this step,
    /// if any.
    ///
    /// At most one move is applied per step.
    pub fn step(&mut self, delta: Duration) -> Option<Move> {
        self.animations.proceed(delta, &self.animation_prefs);
        self.since_last_move += delta;
        if self.since_last_move < self.move_interval {
            return None;
        }

        let mv = *self.moves.moves().get(self.cursor)?;
        self.animations.push(TwistAnimation {
            mv,
            state_before: self.cube.clone(),
        });
        self.cube.apply_move(mv);
        self.cursor += 1;
        self.since_last_move = Duration::ZERO;
        log::debug!("move {}/{}: {mv}", self.cursor, self.moves.len());
        Some(mv)
    }

    /// Applies all remaining moves immediately without animating them.
    /// Returns the moves that were applied.
    pub fn skip_to_end(&mut self) -> &[Move] {
        let start = self.cursor;
        for &mv in &self.moves.moves()[start..] {
            self.cube.apply_move(mv);
        }
        self.cursor = self.moves.len();
        self.animations.catch_up();
        &self.moves.moves()[start..]
    }

    /// Finishes all queued animations immediately.
    pub fn catch_up(&mut self) {
        self.animations.catch_up();
    }

    /// Returns whether every move has been applied and animated.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.moves.len() && self.animations.is_empty()
    }

    /// Returns the cube with every applied move.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    /// Returns the cube to display, which lags behind [`Simulation::cube()`]
    /// while a move is being animated.
    pub fn displayed_cube(&self) -> &Cube {
        match self.animations.current() {
            Some((anim, _)) => &anim.state_before,
            None => &self.cube,
        }
    }
    /// Returns the animation queue.
    pub fn animations(&self) -> &TwistAnimationState {
        &self.animations
    }
    /// Returns the moves that have been applied so far.
    pub fn applied_moves(&self) -> &[Move] {
        &self.moves.moves()[..self.cursor]
    }
    /// Returns the moves that have not been applied yet.
    pub fn remaining_moves(&self) -> &[Move] {
        &self.moves.moves()[self.cursor..]
    }
}
