use foldout::{Choreographer, Environment, MenuEntry, Transform};
use std::fmt::{self, Write};

/// Below this alpha a label counts as gone.
const ALPHA_EPSILON: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotVisibility {
    Hidden,
    Folding,
    Shown,
}

impl SlotVisibility {
    /// Visible face of an icon: flat is shown, edge-on is hidden.
    fn resolve(icon: &Transform) -> Self {
        let tilt = icon.rotation_x.abs().max(icon.rotation_y.abs());
        if tilt >= 90.0 - f32::EPSILON {
            Self::Hidden
        } else if tilt > 0.0 {
            Self::Folding
        } else {
            Self::Shown
        }
    }

    fn glyph(&self) -> char {
        match self {
            Self::Hidden => ' ',
            Self::Folding => '~',
            Self::Shown => '#',
        }
    }
}

struct SlotRenderer<'a> {
    index: usize,
    entry: &'a MenuEntry,
    icon: &'a Transform,
    label: &'a Transform,
}

impl SlotRenderer<'_> {
    fn draw(&self, out: &mut String) -> fmt::Result {
        let visibility = SlotVisibility::resolve(self.icon);
        let text = if self.label.alpha > ALPHA_EPSILON {
            self.entry.label().as_str()
        } else {
            ""
        };
        writeln!(
            out,
            "{:>2} [{}] rx={:>6.1} ry={:>6.1} pivot=({:>4.0},{:>4.0}) | a={:.2} tx={:>6.1} {}",
            self.index,
            visibility.glyph(),
            self.icon.rotation_x,
            self.icon.rotation_y,
            self.icon.pivot_x,
            self.icon.pivot_y,
            self.label.alpha,
            self.label.translation_x,
            text,
        )
    }
}

/// Text snapshot of every slot, one row per entry.
pub fn frame<E: Environment>(menu: &Choreographer<E>) -> String {
    let mut out = String::new();
    let rows = menu
        .entries()
        .iter()
        .zip(menu.icons().iter())
        .zip(menu.labels().iter())
        .enumerate();

    for (index, ((entry, (_, icon)), (_, label))) in rows {
        let renderer = SlotRenderer {
            index,
            entry,
            icon,
            label,
        };
        if let Err(e) = renderer.draw(&mut out) {
            log::error!("Drawing error: {}", e);
        }
    }
    out
}
