use crate::anim::{Animation, Player, Schedule};
use crate::binder::SlotTable;
use crate::builder::{DEFAULT_ANIMATION_DURATION, ProgramBuilder};
use crate::entry::{EntryTag, MenuEntry};
use crate::geometry::{Geometry, Gravity};
use crate::state::{Cue, MenuState, Tap, TapKind};
use crate::view::{Dimen, Environment, SlotContainer, ViewFactory, ViewId};
use std::time::Duration;

/// What a click or long-click listener receives once the chosen item has
/// finished collapsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub view: ViewId,
    pub tag: EntryTag,
}

pub type Listener = Box<dyn FnMut(&Selection)>;

/// Owns the menu's slots and state, builds its programs and plays them.
///
/// Single-threaded: the host calls every method from its UI loop and drives
/// time with [`Choreographer::advance`].
pub struct Choreographer<E> {
    entries: Vec<MenuEntry>,
    slots: SlotTable,
    environment: E,
    action_bar_size: f32,
    gravity: Gravity,
    state: MenuState,
    animation_duration: Duration,
    open_program: Option<Animation<Cue>>,
    close_program: Option<Animation<Cue>>,
    player: Option<Player<Cue>>,
    on_click: Listener,
    on_long_click: Listener,
}

impl<E: Environment> Choreographer<E> {
    /// `entries` must not be empty.
    pub fn new<F: ViewFactory + ?Sized>(
        entries: Vec<MenuEntry>,
        factory: &mut F,
        environment: E,
        action_bar_size: f32,
        gravity: Gravity,
    ) -> Self {
        let slots = SlotTable::bind(&entries, action_bar_size, factory);
        log::debug!(
            "bound {} slots, gravity {}, action bar {}px",
            slots.len(),
            gravity,
            action_bar_size
        );

        Self {
            entries,
            slots,
            environment,
            action_bar_size,
            gravity,
            state: MenuState::default(),
            animation_duration: DEFAULT_ANIMATION_DURATION,
            open_program: None,
            close_program: None,
            player: None,
            on_click: Box::new(|_| {}),
            on_long_click: Box::new(|_| {}),
        }
    }

    pub fn set_click_listener(&mut self, listener: impl FnMut(&Selection) + 'static) {
        self.on_click = Box::new(listener);
    }

    pub fn set_long_click_listener(&mut self, listener: impl FnMut(&Selection) + 'static) {
        self.on_long_click = Box::new(listener);
    }

    /// Patches the cached open and close programs, building them first if
    /// they do not exist yet. Selection programs keep their own duration.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animation_duration = duration;
        self.open_program().set_duration(duration);
        self.close_program().set_duration(duration);
        log::debug!("animation duration set to {:?}", duration);
    }

    /// Opens a closed menu or closes an open one. Ignored, returning false,
    /// while a program is playing.
    pub fn toggle(&mut self) -> bool {
        let Some(next) = self.state.toggled() else {
            log::trace!("toggle ignored while {}", self.state);
            return false;
        };

        let closed = !self.state.is_open();
        let geometry = self.geometry();
        let text_offset = self.text_offset();
        self.slots.reset(&geometry, text_offset, closed);

        let schedule = if closed {
            self.open_program().schedule()
        } else {
            self.close_program().schedule()
        };
        log::debug!("{} -> {}", self.state, next);
        self.state = next;
        self.play(schedule);
        true
    }

    pub fn click(&mut self, view: ViewId) -> bool {
        self.tap(view, TapKind::Click)
    }

    pub fn long_click(&mut self, view: ViewId) -> bool {
        self.tap(view, TapKind::LongClick)
    }

    /// Starts collapsing the menu around the tapped view. Ignored unless the
    /// menu is open and idle, or when the view is not one of the menu's.
    pub fn tap(&mut self, view: ViewId, kind: TapKind) -> bool {
        if !self.state.accepts_tap() {
            log::trace!("{} on {} ignored while {}", kind, view, self.state);
            return false;
        }
        let Some(index) = self.slots.resolve(view) else {
            log::trace!("{} on detached {} ignored", kind, view);
            return false;
        };

        let tap = Tap { index, view, kind };
        let builder = self.builder();
        self.slots.stage_selection(builder.geometry(), index);
        let schedule = builder.close_selected(tap).schedule();

        log::debug!("{} on slot {}: open -> closing", kind, index);
        self.state = MenuState::Closing;
        self.play(schedule);
        true
    }

    /// Advances the active program by `dt`. Returns whether a program is
    /// still playing afterwards.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(player) = self.player.as_mut() else {
            return false;
        };
        let cues = player.advance(dt, &mut self.slots);
        let running = !player.is_finished();
        if !running {
            self.player = None;
        }

        for cue in cues {
            self.deliver(cue);
        }
        running
    }

    pub fn item_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    pub fn icons(&self) -> &SlotContainer {
        self.slots.icons()
    }

    pub fn labels(&self) -> &SlotContainer {
        self.slots.labels()
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut E {
        &mut self.environment
    }

    /// Timeline of the program currently playing.
    pub fn active_schedule(&self) -> Option<&Schedule<Cue>> {
        self.player.as_ref().map(Player::schedule)
    }

    /// How far the program currently playing has advanced.
    pub fn elapsed(&self) -> Option<Duration> {
        self.player.as_ref().map(Player::elapsed)
    }

    pub fn geometry(&self) -> Geometry {
        let rtl = self.environment.is_rtl();
        Geometry::resolve(self.gravity, rtl, self.action_bar_size)
    }

    fn text_offset(&self) -> f32 {
        self.environment.dimension(Dimen::TextTranslation)
    }

    fn builder(&self) -> ProgramBuilder {
        ProgramBuilder::new(self.item_count(), self.geometry(), self.text_offset())
    }

    fn open_program(&mut self) -> &mut Animation<Cue> {
        let builder = self.builder();
        let duration = self.animation_duration;
        self.open_program
            .get_or_insert_with(|| builder.open_all(duration))
    }

    fn close_program(&mut self) -> &mut Animation<Cue> {
        let builder = self.builder();
        let duration = self.animation_duration;
        self.close_program
            .get_or_insert_with(|| builder.close_all(duration))
    }

    /// Start values of the first step land at once; completion cues wait for
    /// the host's next [`Choreographer::advance`].
    fn play(&mut self, schedule: Schedule<Cue>) {
        let mut player = Player::new(schedule);
        player.apply(&mut self.slots);
        self.player = Some(player);
    }

    fn deliver(&mut self, cue: Cue) {
        let settled = self.state.settled();
        log::debug!("{} -> {}", self.state, settled);
        self.state = settled;

        if let Cue::Chosen(tap) = cue {
            self.dispatch(tap);
        }
    }

    fn dispatch(&mut self, tap: Tap) {
        let Some(entry) = self.entries.get(tap.index) else {
            return;
        };
        let selection = Selection {
            index: tap.index,
            view: tap.view,
            tag: entry.tag().clone(),
        };
        log::debug!("dispatching {} for {}", tap.kind, selection.tag);

        match tap.kind {
            TapKind::Click => (self.on_click)(&selection),
            TapKind::LongClick => (self.on_long_click)(&selection),
        }
    }
}
