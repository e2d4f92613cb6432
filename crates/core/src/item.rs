//! Item identity for dragdeck panels.
//!
//! An item is an opaque string identifier. Throughout the widget family
//! the visible label and the unique key are the same string; `Item`
//! documents that assumption instead of hiding it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single list item.
///
/// The wrapped string serves as both the unique identifier and the
/// display text. Two items are the same item exactly when their strings
/// are equal, so duplicate labels are rejected wherever items enter a
/// registry (see `PanelRegistry::set_panel`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    /// Create an item from its identifier/label.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The identifier/label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the item, yielding the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Item {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Item {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Split a legacy comma-joined item string.
///
/// An empty input yields no items. There is no escaping: items that
/// themselves contain `,` are not representable through the joined form.
/// That is a documented limitation of the legacy host interface, kept
/// as-is alongside the structured setters.
pub fn split_joined(value: &str) -> Vec<Item> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(Item::from).collect()
}

/// Join items back into the legacy comma-joined form.
pub fn join_items(items: &[Item]) -> String {
    items
        .iter()
        .map(Item::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
