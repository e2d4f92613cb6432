//! Named ordered panels with single-home item placement.

use dragdeck_core::{Item, RegistryError, Result};

/// One named ordered sequence of items.
#[derive(Debug, Clone)]
pub(crate) struct Panel {
    pub(crate) name: String,
    pub(crate) items: Vec<Item>,
}

/// Mapping from panel name to ordered item sequence.
///
/// Items live in at most one panel at a time; panels keep declaration
/// order for iteration. Contents are never implicitly sorted, every
/// insertion position is caller-specified.
#[derive(Debug, Clone, Default)]
pub struct PanelRegistry {
    pub(crate) panels: Vec<Panel>,
}

impl PanelRegistry {
    /// Create an empty registry with no panels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the given panels declared empty.
    pub fn with_panels<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.declare_panel(name);
        }
        registry
    }

    /// Ensure a panel exists, leaving existing contents untouched.
    pub fn declare_panel(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.panel_index(&name).is_none() {
            self.panels.push(Panel {
                name,
                items: Vec::new(),
            });
        }
    }

    /// Replace a panel's contents wholesale, creating the panel if it
    /// does not exist yet.
    ///
    /// Fails with `DuplicateItem` when the incoming list repeats an item
    /// or names one that already lives in a different panel. On failure
    /// the registry is left unchanged.
    pub fn set_panel(&mut self, name: &str, items: Vec<Item>) -> Result<()> {
        for (idx, item) in items.iter().enumerate() {
            if items[..idx].contains(item) {
                return Err(RegistryError::DuplicateItem {
                    item: item.clone(),
                    panel: name.to_string(),
                });
            }
            if let Some((panel, _)) = self.locate(item) {
                if panel != name {
                    return Err(RegistryError::DuplicateItem {
                        item: item.clone(),
                        panel: panel.to_string(),
                    });
                }
            }
        }

        match self.panel_index(name) {
            Some(idx) => self.panels[idx].items = items,
            None => self.panels.push(Panel {
                name: name.to_string(),
                items,
            }),
        }
        Ok(())
    }

    /// Read-only view of a panel's current order.
    pub fn order(&self, name: &str) -> Option<&[Item]> {
        self.panel_index(name)
            .map(|idx| self.panels[idx].items.as_slice())
    }

    /// Find which panel holds `item` and at what position.
    pub fn locate(&self, item: &Item) -> Option<(&str, usize)> {
        self.panels.iter().find_map(|panel| {
            panel
                .items
                .iter()
                .position(|i| i == item)
                .map(|idx| (panel.name.as_str(), idx))
        })
    }

    /// Panel names in declaration order.
    pub fn panel_names(&self) -> impl Iterator<Item = &str> {
        self.panels.iter().map(|panel| panel.name.as_str())
    }

    pub fn contains_panel(&self, name: &str) -> bool {
        self.panel_index(name).is_some()
    }

    /// All items currently owned, in panel declaration order then
    /// panel position.
    pub fn universe(&self) -> impl Iterator<Item = &Item> {
        self.panels.iter().flat_map(|panel| panel.items.iter())
    }

    /// Total item count across all panels.
    pub fn item_count(&self) -> usize {
        self.panels.iter().map(|panel| panel.items.len()).sum()
    }

    pub(crate) fn panel_index(&self, name: &str) -> Option<usize> {
        self.panels.iter().position(|panel| panel.name == name)
    }
}
