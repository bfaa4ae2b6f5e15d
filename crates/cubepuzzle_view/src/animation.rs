//! Twist animation queue.

use std::collections::VecDeque;
use std::time::Duration;

use cubepuzzle::cubemath::{Float, cgmath::{Matrix3, SquareMatrix}, rotation::rotation_matrix};
use cubepuzzle::{Cube, Cubelet, Move};

use crate::interpolate::{self, InterpolateFn};

/// If at least this much of a twist is animated in one frame, just skip the
/// animation to reduce unnecessary flashing.
const MIN_TWIST_DELTA: Float = 1.0 / 3.0;

/// Higher number means faster exponential increase in twist speed.
const EXP_TWIST_FACTOR: Float = 0.5;

const TWIST_INTERPOLATION_FN: InterpolateFn = interpolate::COSINE;

/// Preferences that control twist animation speed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationPrefs {
    /// Number of seconds for a single twist.
    pub twist_duration: Float,
    /// Whether to speed up twists when several are queued.
    pub dynamic_twist_speed: bool,
}
impl Default for AnimationPrefs {
    fn default() -> Self {
        Self {
            twist_duration: 0.3,
            dynamic_twist_speed: true,
        }
    }
}

/// Queue of twists waiting to be displayed.
#[derive(Debug, Default, Clone)]
pub struct TwistAnimationState {
    /// Queue of twist animations to be displayed.
    queue: VecDeque<TwistAnimation>,
    /// Maximum number of animations in the queue (reset when queue is empty).
    queue_max: usize,
    /// Progress of the animation in the current twist, from 0.0 to 1.0.
    progress: Float,
}
impl TwistAnimationState {
    /// Steps the animation forward. Returns whether the cube should be
    /// redrawn next frame.
    pub fn proceed(&mut self, delta: Duration, prefs: &AnimationPrefs) -> bool {
        if self.queue.is_empty() {
            self.queue_max = 0;
            false // Do not request redraw
        } else {
            // `twist_duration` is in seconds (per one twist); `base_speed` is
            // fraction of twist per frame.
            let base_speed = delta.as_secs_f64() / prefs.twist_duration;

            // Twist exponentially faster if there are/were more twists in the
            // queue.
            let speed_mod = match prefs.dynamic_twist_speed {
                true => (self.queue_max.saturating_sub(1) as Float * EXP_TWIST_FACTOR).exp(),
                false => 1.0,
            };
            let mut twist_delta = base_speed * speed_mod;
            // A NaN or infinite delta (zero duration) also lands here.
            if !(0.0..MIN_TWIST_DELTA).contains(&twist_delta) {
                twist_delta = 1.0; // Instantly complete the twist.
            }

            self.progress += twist_delta;
            if self.progress >= 1.0 {
                self.progress = 0.0;
                if let Some(done) = self.queue.pop_front() {
                    log::trace!("finished animating {}", done.mv);
                }
            }

            true // Request redraw
        }
    }

    /// Adds a twist to the end of the queue.
    pub fn push(&mut self, anim: TwistAnimation) {
        self.queue.push_back(anim);

        // Update queue_max.
        self.queue_max = std::cmp::max(self.queue_max, self.queue.len());
    }

    /// Returns the twist being animated and its interpolated progress from
    /// 0.0 to 1.0.
    pub fn current(&self) -> Option<(&TwistAnimation, Float)> {
        Some((self.queue.front()?, TWIST_INTERPOLATION_FN(self.progress)))
    }

    /// Skips all queued animations.
    pub fn catch_up(&mut self) {
        self.queue.clear();
        self.queue_max = 0;
        self.progress = 0.0;
    }

    /// Returns the number of queued twists, including the current one.
    pub fn len(&self) -> usize {
        self.queue.len()
    }
    /// Returns whether no twists are queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Single twist to animate.
#[derive(Debug, Clone)]
pub struct TwistAnimation {
    /// Move being animated.
    pub mv: Move,
    /// Cube state before the move.
    pub state_before: Cube,
}

/// Returns the transform to display `cubelet` with, `t` of the way through
/// `animation`.
///
/// `cubelet` should come from [`TwistAnimation::state_before`]. Cubelets
/// outside the moving layer get the identity.
pub fn cubelet_transform(
    animation: &TwistAnimation,
    cubelet: &Cubelet,
    t: Float,
) -> Matrix3<Float> {
    if cubelet.is_in_layer(animation.mv.face) {
        let (axis, angle) = animation.mv.rotation();
        rotation_matrix(axis, angle as Float * t)
    } else {
        Matrix3::identity()
    }
}
