use super::{Schedule, Target};
use crate::view::Transform;
use std::time::Duration;

/// Where a player writes property values.
pub trait Stage {
    fn transform_mut(&mut self, target: Target) -> Option<&mut Transform>;
}

/// Plays one schedule against the clock the host advances.
///
/// A tween writes nothing before its start time, so views keep whatever
/// baseline they were given until their step begins.
#[derive(Debug)]
pub struct Player<C> {
    schedule: Schedule<C>,
    elapsed: Duration,
    finished: Vec<bool>,
    delivered: usize,
}

impl<C: Clone> Player<C> {
    pub fn new(schedule: Schedule<C>) -> Self {
        let finished = vec![false; schedule.tweens.len()];
        Self {
            schedule,
            elapsed: Duration::ZERO,
            finished,
            delivered: 0,
        }
    }

    pub fn schedule(&self) -> &Schedule<C> {
        &self.schedule
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.schedule.end() && self.delivered == self.schedule.cues.len()
    }

    /// Moves the clock forward, applies every running tween and returns the
    /// cues that became due, in completion order.
    pub fn advance<S: Stage + ?Sized>(&mut self, dt: Duration, stage: &mut S) -> Vec<C> {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.apply(stage);
        self.drain()
    }

    /// Writes the values of every tween running at the current time without
    /// delivering cues. Those wait for the next [`Player::advance`].
    pub fn apply<S: Stage + ?Sized>(&mut self, stage: &mut S) {
        let elapsed = self.elapsed;
        for (scheduled, done) in self.schedule.tweens.iter().zip(self.finished.iter_mut()) {
            if *done || scheduled.start > elapsed {
                continue;
            }
            let fraction = scheduled.fraction_at(elapsed);
            let tween = &scheduled.tween;
            match stage.transform_mut(tween.target) {
                Some(transform) => tween.property.set(transform, tween.value_at(fraction)),
                None => log::trace!("no view at {}, skipping {}", tween.target, tween.property),
            }
            *done = fraction >= 1.0;
        }
    }

    fn drain(&mut self) -> Vec<C> {
        let elapsed = self.elapsed;
        let due: Vec<C> = self.schedule.cues[self.delivered..]
            .iter()
            .take_while(|(at, _)| *at <= elapsed)
            .map(|(_, cue)| cue.clone())
            .collect();
        self.delivered += due.len();
        due
    }
}
