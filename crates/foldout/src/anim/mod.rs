//! Property tweens, their composition into sets, and a clock-driven player.
//!
//! Programs are built as trees of [`Animation`] values. Playing one flattens
//! the tree into a [`Schedule`] with absolute start times; a [`Player`] then
//! advances through it frame by frame, writing property values into a
//! [`Stage`] and reporting the completion cues that fell due.

pub mod interpolator;
pub mod player;
pub mod set;
pub mod tween;

pub use interpolator::Interpolator;
pub use player::{Player, Stage};
pub use set::{Animation, AnimatorSet, Schedule, ScheduledTween};
pub use tween::{DEFAULT_TWEEN_DURATION, Property, Target, Tween};
