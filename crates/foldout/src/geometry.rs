use crate::view::Transform;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

pub const ROTATION_NINETY_DEGREES: f32 = 90.0;
pub const ROTATION_ZERO_DEGREES: f32 = 0.0;
pub const ALPHA_VISIBLE: f32 = 1.0;
pub const ALPHA_INVISIBLE: f32 = 0.0;

/// Edge of the writing direction the menu trigger is anchored to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    #[strum(to_string = "start", serialize = "s")]
    Start,
    #[default]
    #[strum(to_string = "end", serialize = "e")]
    End,
}

/// Which edge a vertically rotating slot hinges on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    /// Hinged on the bottom edge, folding toward the top.
    Up,
    /// Hinged on the top edge.
    Down,
}

/// Rotation of the horizontally folding slot when hidden: END in LTR and
/// START in RTL share one sign, the two other combinations the other.
pub fn rotation_y_sign(gravity: Gravity, rtl: bool) -> f32 {
    if (gravity == Gravity::End) != rtl {
        -ROTATION_NINETY_DEGREES
    } else {
        ROTATION_NINETY_DEGREES
    }
}

/// Hinge of the horizontally folding slot, on the side the menu is anchored.
pub fn pivot_x(gravity: Gravity, rtl: bool, action_bar_size: f32) -> f32 {
    if (gravity == Gravity::End) != rtl {
        action_bar_size
    } else {
        0.0
    }
}

/// Direction-dependent geometry, resolved fresh for every program build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub gravity: Gravity,
    pub rtl: bool,
    pub action_bar_size: f32,
}

impl Geometry {
    pub fn resolve(gravity: Gravity, rtl: bool, action_bar_size: f32) -> Self {
        Self {
            gravity,
            rtl,
            action_bar_size,
        }
    }

    pub fn rotation_y(&self) -> f32 {
        rotation_y_sign(self.gravity, self.rtl)
    }

    pub fn pivot_x(&self) -> f32 {
        pivot_x(self.gravity, self.rtl, self.action_bar_size)
    }

    /// Sign of the x offset labels slide in from and out to.
    pub fn label_side(&self) -> f32 {
        match self.gravity {
            Gravity::End => 1.0,
            Gravity::Start => -1.0,
        }
    }

    pub fn horizontal_pivot(&self) -> (f32, f32) {
        (self.pivot_x(), self.action_bar_size / 2.0)
    }

    pub fn vertical_pivot(&self, fold: Fold) -> (f32, f32) {
        let y = match fold {
            Fold::Up => self.action_bar_size,
            Fold::Down => 0.0,
        };
        (self.action_bar_size / 2.0, y)
    }

    /// Baseline of a vertically folding icon. Rotations are only reset while
    /// the menu is closed; pivots always.
    pub fn reset_vertical(&self, transform: &mut Transform, fold: Fold, closed: bool) {
        if closed {
            transform.rotation = ROTATION_ZERO_DEGREES;
            transform.rotation_y = ROTATION_ZERO_DEGREES;
            transform.rotation_x = -ROTATION_NINETY_DEGREES;
        }
        (transform.pivot_x, transform.pivot_y) = self.vertical_pivot(fold);
    }

    /// Baseline of a horizontally folding icon.
    pub fn reset_side(&self, transform: &mut Transform, closed: bool) {
        if closed {
            transform.rotation = ROTATION_ZERO_DEGREES;
            transform.rotation_y = self.rotation_y();
            transform.rotation_x = ROTATION_ZERO_DEGREES;
        }
        (transform.pivot_x, transform.pivot_y) = self.horizontal_pivot();
    }

    pub fn reset_label(&self, transform: &mut Transform, closed: bool, text_offset: f32) {
        if closed {
            transform.alpha = ALPHA_INVISIBLE;
            transform.translation_x = self.label_side() * text_offset;
        } else {
            transform.alpha = ALPHA_VISIBLE;
            transform.translation_x = 0.0;
        }
    }
}
