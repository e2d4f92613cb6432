use std::fmt;

use crate::item::Item;

/// Errors produced by registry mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The named item is not present in any panel.
    NotFound(Item),
    /// Accepting the item would give it a second home. Carries the
    /// panel in which the item already (or repeatedly) appears.
    DuplicateItem { item: Item, panel: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::NotFound(item) => write!(f, "item {:?} not found", item.as_str()),
            RegistryError::DuplicateItem { item, panel } => {
                write!(
                    f,
                    "item {:?} already present in panel {:?}",
                    item.as_str(),
                    panel
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}

pub type Result<T> = std::result::Result<T, RegistryError>;
