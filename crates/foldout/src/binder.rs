use crate::anim::{Stage, Target};
use crate::entry::MenuEntry;
use crate::geometry::{Fold, Geometry};
use crate::view::{SlotContainer, SlotSpec, Track, Transform, ViewFactory, ViewId};

/// The icon column and the label column, one child per entry at matching
/// positions.
#[derive(Debug, Clone)]
pub struct SlotTable {
    icons: SlotContainer,
    labels: SlotContainer,
}

impl SlotTable {
    pub fn bind<F: ViewFactory + ?Sized>(
        entries: &[MenuEntry],
        action_bar_size: f32,
        factory: &mut F,
    ) -> Self {
        let last = entries.len().saturating_sub(1);
        let mut table = Self {
            icons: SlotContainer::new(Track::Icons),
            labels: SlotContainer::new(Track::Labels),
        };

        for (index, entry) in entries.iter().enumerate() {
            let spec = SlotSpec {
                index,
                action_bar_size,
                show_divider: index != last,
            };
            table.labels.add_view(factory.label_view(entry, &spec));
            table.icons.add_view(factory.icon_view(entry, &spec));
        }
        table
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn icons(&self) -> &SlotContainer {
        &self.icons
    }

    pub fn labels(&self) -> &SlotContainer {
        &self.labels
    }

    /// Position of a tapped view in whichever column holds it.
    pub fn resolve(&self, view: ViewId) -> Option<usize> {
        self.icons
            .index_of(view)
            .or_else(|| self.labels.index_of(view))
    }

    /// Baseline for an open-all or close-all program.
    pub fn reset(&mut self, geometry: &Geometry, text_offset: f32, closed: bool) {
        for index in 0..self.len() {
            if let Some(label) = self.labels.transform_mut(index) {
                geometry.reset_label(label, closed, text_offset);
            }
            if let Some(icon) = self.icons.transform_mut(index) {
                match index {
                    0 => geometry.reset_side(icon, closed),
                    _ => geometry.reset_vertical(icon, Fold::Down, closed),
                }
            }
        }
    }

    /// Pivots for collapsing around `chosen`: slots above fold up, slots
    /// below fold down, the chosen slot folds sideways.
    pub fn stage_selection(&mut self, geometry: &Geometry, chosen: usize) {
        for index in 0..self.len() {
            let Some(icon) = self.icons.transform_mut(index) else {
                continue;
            };
            match index.cmp(&chosen) {
                std::cmp::Ordering::Less => geometry.reset_vertical(icon, Fold::Up, false),
                std::cmp::Ordering::Greater => geometry.reset_vertical(icon, Fold::Down, false),
                std::cmp::Ordering::Equal => geometry.reset_side(icon, false),
            }
        }
    }
}

impl Stage for SlotTable {
    fn transform_mut(&mut self, target: Target) -> Option<&mut Transform> {
        match target.track {
            Track::Icons => self.icons.transform_mut(target.index),
            Track::Labels => self.labels.transform_mut(target.index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Gravity;
    use crate::view::HeadlessFactory;

    fn entries(n: usize) -> Vec<MenuEntry> {
        (0..n)
            .map(|i| MenuEntry::labelled(format!("icn_{i}"), format!("Item {i}")))
            .collect()
    }

    #[test]
    fn test_binds_matching_columns() {
        for n in 1..6 {
            let mut factory = HeadlessFactory::new();
            let table = SlotTable::bind(&entries(n), 56.0, &mut factory);
            assert_eq!(table.icons().len(), n);
            assert_eq!(table.labels().len(), n);
        }
    }

    #[test]
    fn test_only_last_slot_drops_divider() {
        let mut factory = HeadlessFactory::new();
        SlotTable::bind(&entries(3), 56.0, &mut factory);
        assert_eq!(factory.dividers(), &[true, true, false]);
    }

    #[test]
    fn test_resolves_views_from_either_column() {
        let mut factory = HeadlessFactory::new();
        let table = SlotTable::bind(&entries(3), 56.0, &mut factory);

        let icon = table.icons().view_at(2).unwrap();
        let label = table.labels().view_at(1).unwrap();
        assert_eq!(table.resolve(icon), Some(2));
        assert_eq!(table.resolve(label), Some(1));
        assert_eq!(table.resolve(ViewId::new(u64::MAX)), None);
    }

    #[test]
    fn test_closed_reset_hides_everything() {
        let mut factory = HeadlessFactory::new();
        let mut table = SlotTable::bind(&entries(3), 56.0, &mut factory);
        let geometry = Geometry::resolve(Gravity::Start, false, 56.0);
        table.reset(&geometry, 32.0, true);

        let trigger = table.icons().transform(0).unwrap();
        assert_eq!(trigger.rotation_y, 90.0);
        assert_eq!(trigger.pivot_x, 0.0);
        let other = table.icons().transform(2).unwrap();
        assert_eq!(other.rotation_x, -90.0);
        assert_eq!(other.pivot_y, 0.0);
        let label = table.labels().transform(1).unwrap();
        assert_eq!(label.alpha, 0.0);
        assert_eq!(label.translation_x, -32.0);
    }
}
