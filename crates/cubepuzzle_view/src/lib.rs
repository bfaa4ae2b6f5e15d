//! Headless presentation of a [`cubepuzzle::Cube`].
//!
//! Nothing here mutates cube state except [`Simulation::step()`], which calls
//! [`cubepuzzle::Cube::apply_move()`] exactly once per quarter turn. Animation
//! only affects how the state before a move is displayed.

pub mod animation;
pub mod interpolate;
pub mod net;
mod simulation;

pub use animation::{AnimationPrefs, TwistAnimation, TwistAnimationState, cubelet_transform};
pub use net::{ColorScheme, render_net};
pub use simulation::Simulation;
