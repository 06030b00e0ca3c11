//! Host seams: view handles, the two slot containers and the environment
//! queries the choreography reads at build time.

use crate::entry::MenuEntry;
use derive_more::{Display, From, Into};
use strum::Display as StrumDisplay;

/// Handle of a host view. The host allocates these; the menu only compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
#[display("view#{_0}")]
pub struct ViewId(u64);

impl ViewId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Animatable properties of a single view, in degrees, pixels and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub rotation: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub pivot_x: f32,
    pub pivot_y: f32,
    pub alpha: f32,
    pub translation_x: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            pivot_x: 0.0,
            pivot_y: 0.0,
            alpha: 1.0,
            translation_x: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Track {
    Icons,
    Labels,
}

#[derive(Debug, Clone, PartialEq)]
struct Child {
    view: ViewId,
    transform: Transform,
}

/// Ordered column of views. Children are addressed by position; a view's
/// index is whatever position it currently occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotContainer {
    track: Track,
    children: Vec<Child>,
}

impl SlotContainer {
    pub fn new(track: Track) -> Self {
        Self {
            track,
            children: Vec::new(),
        }
    }

    pub fn track(&self) -> Track {
        self.track
    }

    pub fn add_view(&mut self, view: ViewId) {
        self.children.push(Child {
            view,
            transform: Transform::default(),
        });
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn view_at(&self, index: usize) -> Option<ViewId> {
        self.children.get(index).map(|c| c.view)
    }

    pub fn index_of(&self, view: ViewId) -> Option<usize> {
        self.children.iter().position(|c| c.view == view)
    }

    pub fn transform(&self, index: usize) -> Option<&Transform> {
        self.children.get(index).map(|c| &c.transform)
    }

    pub fn transform_mut(&mut self, index: usize) -> Option<&mut Transform> {
        self.children.get_mut(index).map(|c| &mut c.transform)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ViewId, &Transform)> {
        self.children.iter().map(|c| (c.view, &c.transform))
    }
}

/// What the view factory needs to know about the slot it is building.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotSpec {
    pub index: usize,
    pub action_bar_size: f32,
    /// False for the last slot, which draws no trailing divider.
    pub show_divider: bool,
}

/// Builds the host's icon and label views for a menu entry.
pub trait ViewFactory {
    fn icon_view(&mut self, entry: &MenuEntry, spec: &SlotSpec) -> ViewId;
    fn label_view(&mut self, entry: &MenuEntry, spec: &SlotSpec) -> ViewId;
}

/// Factory for hosts without a real widget tree: hands out sequential ids
/// and remembers the divider flag of every icon it built.
#[derive(Debug, Default)]
pub struct HeadlessFactory {
    next: u64,
    dividers: Vec<bool>,
}

impl HeadlessFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dividers(&self) -> &[bool] {
        &self.dividers
    }

    fn allocate(&mut self) -> ViewId {
        self.next += 1;
        ViewId(self.next)
    }
}

impl ViewFactory for HeadlessFactory {
    fn icon_view(&mut self, _entry: &MenuEntry, spec: &SlotSpec) -> ViewId {
        self.dividers.push(spec.show_divider);
        self.allocate()
    }

    fn label_view(&mut self, _entry: &MenuEntry, _spec: &SlotSpec) -> ViewId {
        self.allocate()
    }
}

/// Named size tokens resolved by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum Dimen {
    /// Horizontal distance a label slides while appearing or disappearing.
    TextTranslation,
}

/// Queries against the hosting environment. Both are read every time an
/// animation program is built.
pub trait Environment {
    fn is_rtl(&self) -> bool;
    fn dimension(&self, dimen: Dimen) -> f32;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticEnvironment {
    pub rtl: bool,
    pub text_translation: f32,
}

impl StaticEnvironment {
    pub fn new(rtl: bool, text_translation: f32) -> Self {
        Self {
            rtl,
            text_translation,
        }
    }
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self::new(false, 32.0)
    }
}

impl Environment for StaticEnvironment {
    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn dimension(&self, dimen: Dimen) -> f32 {
        match dimen {
            Dimen::TextTranslation => self.text_translation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_resolves_index_by_position() {
        let mut container = SlotContainer::new(Track::Icons);
        container.add_view(ViewId::new(7));
        container.add_view(ViewId::new(3));

        assert_eq!(container.index_of(ViewId::new(3)), Some(1));
        assert_eq!(container.index_of(ViewId::new(99)), None);
        assert_eq!(container.view_at(0), Some(ViewId::new(7)));
        assert_eq!(container.transform(1), Some(&Transform::default()));
    }

    #[test]
    fn test_headless_factory_allocates_distinct_ids() {
        let mut factory = HeadlessFactory::new();
        let entry = MenuEntry::labelled("icn", "Item");
        let spec = SlotSpec {
            index: 0,
            action_bar_size: 56.0,
            show_divider: false,
        };
        let icon = factory.icon_view(&entry, &spec);
        let label = factory.label_view(&entry, &spec);

        assert_ne!(icon, label);
        assert_eq!(factory.dividers(), &[false]);
    }
}
