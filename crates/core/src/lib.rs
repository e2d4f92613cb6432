//! Core types and events for dragdeck widget models.
//!
//! This crate provides the foundational pieces shared by every widget
//! variant without coupling them to a registry or a host: item identity,
//! the drag gesture lifecycle, change events, and the listener registry
//! they are delivered through.

pub mod error;
pub mod event;
pub mod gesture;
pub mod item;
pub mod notify;

pub use error::{RegistryError, Result};
pub use event::{names, WidgetEvent};
pub use gesture::{DragGesture, DragPhase, DropSpot};
pub use item::{join_items, split_joined, Item};
pub use notify::Notifier;

/// Panel names used by the shipped widget variants.
pub mod panels {
    /// The single implicit panel of the checklist variant.
    pub const ITEMS: &str = "items";
    /// Unselected pool (selector and layout builder variants).
    pub const AVAILABLE: &str = "available";
    /// Chosen items (selector variant).
    pub const SELECTED: &str = "selected";
    /// Row axis (layout builder and pivot variants).
    pub const ROWS: &str = "rows";
    /// Column axis (layout builder and pivot variants).
    pub const COLUMNS: &str = "columns";
}
