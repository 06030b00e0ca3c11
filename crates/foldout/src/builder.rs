use crate::anim::{Animation, AnimatorSet, Interpolator, Property, Target, Tween};
use crate::geometry::{
    ALPHA_INVISIBLE, ALPHA_VISIBLE, Geometry, ROTATION_NINETY_DEGREES, ROTATION_ZERO_DEGREES,
};
use crate::state::{Cue, Tap};
use std::time::Duration;

/// Per-step duration of open and close programs until the host changes it.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(100);
/// Per-step duration of the chosen-item collapse. Not affected by
/// [`crate::Choreographer::set_animation_duration`].
pub const SELECTION_DURATION: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Open,
    Close,
}

/// Builds the three menu programs for `count` slots from geometry resolved at
/// build time.
#[derive(Debug, Clone, Copy)]
pub struct ProgramBuilder {
    count: usize,
    geometry: Geometry,
    text_offset: f32,
}

impl ProgramBuilder {
    pub fn new(count: usize, geometry: Geometry, text_offset: f32) -> Self {
        Self {
            count,
            geometry,
            text_offset,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Slots unfold top to bottom.
    pub fn open_all(&self, duration: Duration) -> Animation<Cue> {
        self.open_close((0..self.count).collect(), Phase::Open, duration)
    }

    /// Slots fold bottom to top.
    pub fn close_all(&self, duration: Duration) -> Animation<Cue> {
        self.open_close((0..self.count).rev().collect(), Phase::Close, duration)
    }

    fn open_close(&self, order: Vec<usize>, phase: Phase, duration: Duration) -> Animation<Cue> {
        let mut labels = Vec::with_capacity(order.len());
        let mut icons = Vec::with_capacity(order.len());
        for index in order {
            labels.push(self.label_motion(index, phase));
            icons.push(self.icon_rotation(index, phase));
        }

        let labels = Animation::sequential(labels);
        let icons = Animation::sequential(icons);
        Animation::together([labels, icons])
            .with_duration(duration)
            .with_interpolator(Interpolator::Hesitate)
            .on_end(Cue::Settled)
    }

    /// Collapses every slot around the tapped one. Slots above and below fold
    /// away in two parallel tracks; the tapped slot folds sideways once both
    /// tracks are done, and its icon reports [`Cue::Chosen`].
    pub fn close_selected(&self, tap: Tap) -> Animation<Cue> {
        let chosen = tap.index;
        let above: Vec<usize> = (0..chosen).collect();
        let below: Vec<usize> = (chosen + 1..self.count).rev().collect();
        // ties go to the track above
        let longer = if above.len() >= below.len() { 0 } else { 1 };
        let cue = Cue::Chosen(tap);

        let mut icons = AnimatorSet::new();
        icons.play(self.fold_group(&above));
        icons.play(self.fold_group(&below));
        icons.play_after(longer, self.horizontal(chosen, Phase::Close).on_end(cue));

        let mut labels = AnimatorSet::new();
        labels.play(self.fade_group(&above));
        labels.play(self.fade_group(&below));
        labels.play_after(longer, self.fade_out(chosen));

        Animation::together([icons.into(), labels.into()])
            .with_duration(SELECTION_DURATION)
            .with_interpolator(Interpolator::Hesitate)
    }

    fn fold_group(&self, group: &[usize]) -> Animation<Cue> {
        Animation::sequential(group.iter().map(|&i| self.vertical(i, Phase::Close)))
    }

    fn fade_group(&self, group: &[usize]) -> Animation<Cue> {
        Animation::sequential(group.iter().map(|&i| self.fade_out(i)))
    }

    fn label_motion(&self, index: usize, phase: Phase) -> Animation<Cue> {
        match phase {
            Phase::Open => {
                let target = Target::label(index);
                Animation::together([
                    tween(target, Property::Alpha, ALPHA_INVISIBLE, ALPHA_VISIBLE),
                    tween(target, Property::TranslationX, self.label_offset(), 0.0),
                ])
            }
            Phase::Close => self.fade_out(index),
        }
    }

    fn fade_out(&self, index: usize) -> Animation<Cue> {
        let target = Target::label(index);
        Animation::together([
            tween(target, Property::Alpha, ALPHA_VISIBLE, ALPHA_INVISIBLE),
            tween(target, Property::TranslationX, 0.0, self.label_offset()),
        ])
    }

    fn label_offset(&self) -> f32 {
        self.geometry.label_side() * self.text_offset
    }

    fn icon_rotation(&self, index: usize, phase: Phase) -> Animation<Cue> {
        match index {
            0 => self.horizontal(index, phase),
            _ => self.vertical(index, phase),
        }
    }

    fn horizontal(&self, index: usize, phase: Phase) -> Animation<Cue> {
        let hidden = self.geometry.rotation_y();
        let (from, to) = match phase {
            Phase::Open => (hidden, ROTATION_ZERO_DEGREES),
            Phase::Close => (ROTATION_ZERO_DEGREES, hidden),
        };
        tween(Target::icon(index), Property::RotationY, from, to)
    }

    fn vertical(&self, index: usize, phase: Phase) -> Animation<Cue> {
        let hidden = -ROTATION_NINETY_DEGREES;
        let (from, to) = match phase {
            Phase::Open => (hidden, ROTATION_ZERO_DEGREES),
            Phase::Close => (ROTATION_ZERO_DEGREES, hidden),
        };
        tween(Target::icon(index), Property::RotationX, from, to)
    }
}

fn tween(target: Target, property: Property, from: f32, to: f32) -> Animation<Cue> {
    Animation::tween(Tween::new(target, property, from, to))
}
