use super::Interpolator;
use crate::view::{Track, Transform};
use std::time::Duration;
use strum::Display;

/// Duration of a tween that no enclosing set overrides.
pub const DEFAULT_TWEEN_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Property {
    Rotation,
    RotationX,
    RotationY,
    Alpha,
    TranslationX,
}

impl Property {
    pub fn get(self, transform: &Transform) -> f32 {
        match self {
            Self::Rotation => transform.rotation,
            Self::RotationX => transform.rotation_x,
            Self::RotationY => transform.rotation_y,
            Self::Alpha => transform.alpha,
            Self::TranslationX => transform.translation_x,
        }
    }

    pub fn set(self, transform: &mut Transform, value: f32) {
        let slot = match self {
            Self::Rotation => &mut transform.rotation,
            Self::RotationX => &mut transform.rotation_x,
            Self::RotationY => &mut transform.rotation_y,
            Self::Alpha => &mut transform.alpha,
            Self::TranslationX => &mut transform.translation_x,
        };
        *slot = value;
    }
}

/// A view addressed by its position in one of the two containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{track}[{index}]")]
pub struct Target {
    pub track: Track,
    pub index: usize,
}

impl Target {
    pub fn icon(index: usize) -> Self {
        Self {
            track: Track::Icons,
            index,
        }
    }

    pub fn label(index: usize) -> Self {
        Self {
            track: Track::Labels,
            index,
        }
    }
}

/// Moves one property of one view from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub target: Target,
    pub property: Property,
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub interpolator: Interpolator,
}

impl Tween {
    pub fn new(target: Target, property: Property, from: f32, to: f32) -> Self {
        Self {
            target,
            property,
            from,
            to,
            duration: DEFAULT_TWEEN_DURATION,
            interpolator: Interpolator::default(),
        }
    }

    pub fn value_at(&self, fraction: f32) -> f32 {
        self.from + (self.to - self.from) * self.interpolator.interpolate(fraction)
    }
}
