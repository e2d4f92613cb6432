//! Change events emitted by widget models.
//!
//! Every mutation that alters panel contents produces exactly one event
//! carrying a full snapshot of the changed state. Hosts never diff
//! individual moves; they re-read the snapshot and replace whatever
//! they had.
//!
//! ```text
//! mutation → WidgetEvent (full snapshot) → Notifier → host listeners
//! ```

use serde::Serialize;

use crate::item::Item;

// ============================================================================
// Event Names
// ============================================================================

/// Wire names of the events, as hosts see them.
pub mod names {
    pub const ORDER_CHANGED: &str = "onOrderChanged";
    pub const SELECTION_CHANGED: &str = "onSelectionChanged";
    pub const LAYOUT_CHANGED: &str = "onLayoutChanged";
}

// ============================================================================
// Widget Events
// ============================================================================

/// A snapshot event produced by a widget mutation.
///
/// Serializes to the event's detail payload only; the event name travels
/// separately via [`WidgetEvent::name`]. Each variant carries the complete
/// state of the panels it describes, never a delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WidgetEvent {
    /// Single-panel order changed (checklist family).
    OrderChanged {
        /// Full item order after the mutation.
        order: Vec<Item>,
    },
    /// Selection membership or order changed (selector family).
    SelectionChanged {
        /// Full selected list after the mutation.
        selected: Vec<Item>,
    },
    /// Any of the layout panels changed (layout builder family).
    LayoutChanged {
        /// Full rows panel after the mutation.
        rows: Vec<Item>,
        /// Full columns panel after the mutation.
        columns: Vec<Item>,
        /// Full available panel after the mutation.
        available: Vec<Item>,
    },
}

impl WidgetEvent {
    /// The host-facing event name.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetEvent::OrderChanged { .. } => names::ORDER_CHANGED,
            WidgetEvent::SelectionChanged { .. } => names::SELECTION_CHANGED,
            WidgetEvent::LayoutChanged { .. } => names::LAYOUT_CHANGED,
        }
    }
}
