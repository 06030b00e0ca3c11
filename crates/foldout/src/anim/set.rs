use super::{Interpolator, Tween};
use std::time::Duration;

/// A node of an animation program: either a single tween or a set of child
/// animations. Any node may carry a cue, reported when the node completes.
#[derive(Debug, Clone)]
pub struct Animation<C> {
    kind: Kind<C>,
    on_end: Option<C>,
}

#[derive(Debug, Clone)]
enum Kind<C> {
    Tween(Tween),
    Set(AnimatorSet<C>),
}

impl<C> Animation<C> {
    pub fn tween(tween: Tween) -> Self {
        Self {
            kind: Kind::Tween(tween),
            on_end: None,
        }
    }

    /// All children start together.
    pub fn together(children: impl IntoIterator<Item = Animation<C>>) -> Self {
        AnimatorSet::together(children).into()
    }

    /// Each child starts when the previous one ends.
    pub fn sequential(children: impl IntoIterator<Item = Animation<C>>) -> Self {
        AnimatorSet::sequential(children).into()
    }

    pub fn on_end(mut self, cue: C) -> Self {
        self.on_end = Some(cue);
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.set_duration(duration);
        self
    }

    /// On a set, the duration applies to every tween beneath it and wins over
    /// anything nested sets declare.
    pub fn set_duration(&mut self, duration: Duration) {
        match &mut self.kind {
            Kind::Tween(tween) => tween.duration = duration,
            Kind::Set(set) => set.duration = Some(duration),
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        match &self.kind {
            Kind::Tween(tween) => Some(tween.duration),
            Kind::Set(set) => set.duration,
        }
    }

    pub fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        match &mut self.kind {
            Kind::Tween(tween) => tween.interpolator = interpolator,
            Kind::Set(set) => set.interpolator = Some(interpolator),
        }
        self
    }
}

impl<C: Clone> Animation<C> {
    /// Resolves the tree into absolute start times.
    pub fn schedule(&self) -> Schedule<C> {
        let mut schedule = Schedule {
            tweens: Vec::new(),
            cues: Vec::new(),
            duration: self.duration(),
            end: Duration::ZERO,
        };
        schedule.end = self.flatten(Duration::ZERO, Overrides::default(), &mut schedule);
        // stable: cues due at the same instant keep completion order
        schedule.cues.sort_by_key(|(at, _)| *at);
        schedule
    }

    fn flatten(&self, start: Duration, overrides: Overrides, out: &mut Schedule<C>) -> Duration {
        let end = match &self.kind {
            Kind::Tween(tween) => {
                let resolved = Tween {
                    duration: overrides.duration.unwrap_or(tween.duration),
                    interpolator: overrides.interpolator.unwrap_or(tween.interpolator),
                    ..*tween
                };
                out.tweens.push(ScheduledTween {
                    start,
                    tween: resolved,
                });
                start + resolved.duration
            }
            Kind::Set(set) => {
                let inner = Overrides {
                    duration: overrides.duration.or(set.duration),
                    interpolator: overrides.interpolator.or(set.interpolator),
                };
                let mut ends = Vec::with_capacity(set.nodes.len());
                for node in &set.nodes {
                    let node_start = match node.after {
                        Some(i) => ends.get(i).copied().unwrap_or(start),
                        None => start,
                    };
                    ends.push(node.animation.flatten(node_start, inner, out));
                }
                ends.into_iter().fold(start, Duration::max)
            }
        };

        if let Some(cue) = &self.on_end {
            out.cues.push((end, cue.clone()));
        }
        end
    }
}

impl<C> From<Tween> for Animation<C> {
    fn from(tween: Tween) -> Self {
        Self::tween(tween)
    }
}

impl<C> From<AnimatorSet<C>> for Animation<C> {
    fn from(set: AnimatorSet<C>) -> Self {
        Self {
            kind: Kind::Set(set),
            on_end: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Overrides {
    duration: Option<Duration>,
    interpolator: Option<Interpolator>,
}

#[derive(Debug, Clone)]
struct Node<C> {
    animation: Animation<C>,
    after: Option<usize>,
}

/// Children with optional "starts after" links to earlier children.
#[derive(Debug, Clone)]
pub struct AnimatorSet<C> {
    nodes: Vec<Node<C>>,
    duration: Option<Duration>,
    interpolator: Option<Interpolator>,
}

impl<C> Default for AnimatorSet<C> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            duration: None,
            interpolator: None,
        }
    }
}

impl<C> AnimatorSet<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn together(children: impl IntoIterator<Item = Animation<C>>) -> Self {
        let mut set = Self::new();
        for child in children {
            set.play(child);
        }
        set
    }

    pub fn sequential(children: impl IntoIterator<Item = Animation<C>>) -> Self {
        let mut set = Self::new();
        for child in children {
            match set.nodes.len().checked_sub(1) {
                Some(previous) => set.play_after(previous, child),
                None => set.play(child),
            };
        }
        set
    }

    /// Adds a child that starts with the set. Returns its position.
    pub fn play(&mut self, animation: Animation<C>) -> usize {
        self.nodes.push(Node {
            animation,
            after: None,
        });
        self.nodes.len() - 1
    }

    /// Adds a child that starts once the child at `predecessor` has ended.
    /// The predecessor must already be in the set.
    pub fn play_after(&mut self, predecessor: usize, animation: Animation<C>) -> usize {
        debug_assert!(predecessor < self.nodes.len());
        self.nodes.push(Node {
            animation,
            after: Some(predecessor),
        });
        self.nodes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A tween placed on the program's timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTween {
    pub start: Duration,
    pub tween: Tween,
}

impl ScheduledTween {
    pub fn end(&self) -> Duration {
        self.start + self.tween.duration
    }

    pub fn fraction_at(&self, elapsed: Duration) -> f32 {
        if self.tween.duration.is_zero() {
            return 1.0;
        }
        let into = elapsed.saturating_sub(self.start);
        let total = self.tween.duration.as_nanos() as f64;
        let fraction = into.as_nanos() as f64 / total;
        fraction.min(1.0) as f32
    }
}

/// A flattened program.
#[derive(Debug, Clone)]
pub struct Schedule<C> {
    pub(super) tweens: Vec<ScheduledTween>,
    pub(super) cues: Vec<(Duration, C)>,
    duration: Option<Duration>,
    end: Duration,
}

impl<C> Schedule<C> {
    pub fn tweens(&self) -> &[ScheduledTween] {
        &self.tweens
    }

    pub fn cues(&self) -> &[(Duration, C)] {
        &self.cues
    }

    /// Duration declared on the root of the program, if any.
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Instant the last tween or cue of the program completes.
    pub fn end(&self) -> Duration {
        self.end
    }

    pub fn tweens_for(&self, target: super::Target) -> impl Iterator<Item = &ScheduledTween> {
        self.tweens.iter().filter(move |s| s.tween.target == target)
    }
}
