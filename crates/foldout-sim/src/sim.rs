use crate::events::Step;
use crate::render;
use foldout::config::{ConfigError, MenuConfig};
use foldout::{Choreographer, HeadlessFactory, Selection, StaticEnvironment, TapKind, ViewId};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// A view id no slot is bound to, used for taps past the last item.
const DETACHED: ViewId = ViewId::new(u64::MAX);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub at: Duration,
    pub kind: TapKind,
    pub selection: Selection,
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Selection { index, tag, .. } = &self.selection;
        write!(f, "{} slot {} ({})", self.kind, index, tag)
    }
}

type DispatchLog = Rc<RefCell<Vec<Dispatch>>>;

/// A headless menu driven by a fixed-rate frame clock.
pub struct Simulation {
    menu: Choreographer<StaticEnvironment>,
    frame: Duration,
    clock: Rc<Cell<Duration>>,
    dispatched: DispatchLog,
}

impl Simulation {
    pub fn new(config: &MenuConfig, fps: u32) -> Result<Self, ConfigError> {
        let clock = Rc::new(Cell::new(Duration::ZERO));
        let dispatched = DispatchLog::default();
        let menu = build_menu(config, &clock, &dispatched)?;

        Ok(Self {
            menu,
            frame: frame_interval(fps),
            clock,
            dispatched,
        })
    }

    pub fn menu(&self) -> &Choreographer<StaticEnvironment> {
        &self.menu
    }

    pub fn clock(&self) -> Duration {
        self.clock.get()
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    pub fn dispatched(&self) -> Vec<Dispatch> {
        self.dispatched.borrow().clone()
    }

    pub fn apply(&mut self, step: Step) {
        log::debug!("t={:?} {:?}", self.clock(), step);
        match step {
            Step::Toggle => {
                if !self.menu.toggle() {
                    log::info!("toggle ignored while {}", self.menu.state());
                }
            }
            Step::Tap(index) => self.tap(index, TapKind::Click),
            Step::LongTap(index) => self.tap(index, TapKind::LongClick),
            Step::Wait(duration) => self.wait(duration),
            Step::Rtl(rtl) => self.menu.environment_mut().rtl = rtl,
            Step::Duration(duration) => self.menu.set_animation_duration(duration),
        }
    }

    fn tap(&mut self, index: usize, kind: TapKind) {
        let view = self.menu.icons().view_at(index).unwrap_or(DETACHED);
        if !self.menu.tap(view, kind) {
            let state = self.menu.state();
            log::info!("{} on slot {} ignored while {}", kind, index, state);
        }
    }

    /// Advances simulated time by `duration` in whole frames, the last one
    /// possibly shorter.
    pub fn wait(&mut self, duration: Duration) {
        let mut remaining = duration;
        while !remaining.is_zero() {
            let dt = remaining.min(self.frame);
            self.tick(dt);
            remaining -= dt;
        }
    }

    /// Plays the active program to its end.
    pub fn settle(&mut self) {
        while self.tick(self.frame) {}
    }

    /// Advances one frame. Returns whether a program is still playing.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let was_playing = self.menu.active_schedule().is_some();
        self.clock.set(self.clock.get() + dt);
        let playing = self.menu.advance(dt);
        if was_playing && log::log_enabled!(log::Level::Trace) {
            log::trace!("t={:?}\n{}", self.clock(), render::frame(&self.menu));
        }
        playing
    }

    /// Applies a reloaded configuration. Direction, text offset and duration
    /// take effect at once; a changed layout rebuilds the menu, which only
    /// happens while it is closed and idle.
    pub fn reload(&mut self, config: &MenuConfig) -> Result<(), ConfigError> {
        let gravity_changed = config.gravity != self.menu.gravity();
        let items_changed = config.entries()? != self.menu.entries();

        if gravity_changed || items_changed {
            if self.menu.is_open() || self.menu.is_animating() {
                log::warn!("menu layout changed while open, keeping the old layout");
            } else {
                self.menu = build_menu(config, &self.clock, &self.dispatched)?;
                log::info!("menu rebuilt with {} items", self.menu.item_count());
                return Ok(());
            }
        }

        let environment = self.menu.environment_mut();
        environment.rtl = config.rtl;
        environment.text_translation = config.text_translation;
        let duration = config.animation_duration();
        self.menu.set_animation_duration(duration);
        Ok(())
    }
}

pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}

fn build_menu(
    config: &MenuConfig,
    clock: &Rc<Cell<Duration>>,
    dispatched: &DispatchLog,
) -> Result<Choreographer<StaticEnvironment>, ConfigError> {
    let mut factory = HeadlessFactory::new();
    let mut menu = Choreographer::new(
        config.entries()?,
        &mut factory,
        StaticEnvironment::new(config.rtl, config.text_translation),
        config.action_bar_size,
        config.gravity,
    );
    menu.set_animation_duration(config.animation_duration());

    for kind in [TapKind::Click, TapKind::LongClick] {
        let clock = clock.clone();
        let dispatched = dispatched.clone();
        let listener = move |selection: &Selection| {
            dispatched.borrow_mut().push(Dispatch {
                at: clock.get(),
                kind,
                selection: selection.clone(),
            });
        };
        match kind {
            TapKind::Click => menu.set_click_listener(listener),
            TapKind::LongClick => menu.set_long_click_listener(listener),
        }
    }
    Ok(menu)
}
