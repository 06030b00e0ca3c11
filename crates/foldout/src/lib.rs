//! Animation choreography for a fold-out contextual menu.
//!
//! A [`Choreographer`] binds a list of [`MenuEntry`] values to an icon column
//! and a label column, then plays the open, close and "chosen item" collapse
//! programs over them. The host toolkit renders the [`Transform`] of every
//! slot and drives the animation clock through [`Choreographer::advance`].

pub mod anim;
pub mod binder;
pub mod builder;
pub mod choreographer;
pub mod config;
pub mod entry;
pub mod geometry;
pub mod macros;
pub mod state;
pub mod view;

pub use binder::SlotTable;
pub use builder::{DEFAULT_ANIMATION_DURATION, ProgramBuilder, SELECTION_DURATION};
pub use choreographer::{Choreographer, Selection};
pub use entry::{EntryTag, IconRef, Label, MenuEntry};
pub use geometry::{Fold, Geometry, Gravity};
pub use state::{Cue, MenuState, Tap, TapKind};
pub use view::{
    Dimen, Environment, HeadlessFactory, SlotContainer, SlotSpec, StaticEnvironment, Track,
    Transform, ViewFactory, ViewId,
};
