use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Host-side reference to an icon resource (a name, a path, a resource id).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct IconRef(String);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Label(String);

/// Opaque value handed back to the application when the entry is chosen.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct EntryTag(String);

crate::impl_string_newtype!(IconRef, Label, EntryTag);

/// One immutable row of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    icon: IconRef,
    label: Label,
    tag: EntryTag,
}

impl MenuEntry {
    pub fn new(
        icon: impl Into<IconRef>,
        label: impl Into<Label>,
        tag: impl Into<EntryTag>,
    ) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            tag: tag.into(),
        }
    }

    /// Entry whose tag is its label text.
    pub fn labelled(icon: impl Into<IconRef>, label: impl Into<Label>) -> Self {
        let label = label.into();
        let tag = EntryTag::new(label.as_str());
        Self {
            icon: icon.into(),
            label,
            tag,
        }
    }

    pub fn icon(&self) -> &IconRef {
        &self.icon
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn tag(&self) -> &EntryTag {
        &self.tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_entry_uses_label_as_tag() {
        let entry = MenuEntry::labelled("icn_share", "Share");
        assert_eq!(entry.tag().as_str(), "Share");
        assert_eq!(entry.icon().as_str(), "icn_share");
    }
}
