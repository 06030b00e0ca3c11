use crate::view::ViewId;
use strum::Display;

/// Open/closed crossed with animating/idle. The transient states are entered
/// only by starting a program and left only by that program's completion cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "snake_case")]
pub enum MenuState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }

    pub fn is_animating(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }

    /// Taps only land on a fully open, idle menu.
    pub fn accepts_tap(self) -> bool {
        self == Self::Open
    }

    /// State entered by a toggle request, `None` while a program is playing.
    pub fn toggled(self) -> Option<Self> {
        match self {
            Self::Closed => Some(Self::Opening),
            Self::Open => Some(Self::Closing),
            Self::Opening | Self::Closing => None,
        }
    }

    pub fn settled(self) -> Self {
        match self {
            Self::Opening => Self::Open,
            Self::Closing => Self::Closed,
            idle => idle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TapKind {
    Click,
    LongClick,
}

/// A tap accepted by the menu, carried through the selection program until
/// its collapse completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    pub index: usize,
    pub view: ViewId,
    pub kind: TapKind,
}

/// Completion cues attached to program nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// An open-all or close-all program finished.
    Settled,
    /// The chosen item finished collapsing.
    Chosen(Tap),
}
