//! Drag gesture lifecycle shared by all widget variants.
//!
//! Tracks one in-flight drag from pick-up to release. The gesture owns
//! only the transient source/target references; it never touches panel
//! state. A release with no recorded target is a cancellation and
//! requires no cleanup beyond resetting the gesture.
//!
//! ```text
//! Idle → Dragging(source) → {OverTarget, Dragging}* → release/cancel → Idle
//! ```

use crate::item::Item;

// ============================================================================
// Drop Targets
// ============================================================================

/// Where a dragged item would land if released now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropSpot {
    /// Insert immediately before this item, in whichever panel it lives.
    Before(Item),
    /// Append to the end of the named panel (pointer over empty panel area).
    PanelEnd(String),
}

impl DropSpot {
    /// Append target for a named panel.
    pub fn panel_end(name: impl Into<String>) -> Self {
        DropSpot::PanelEnd(name.into())
    }
}

/// Observable phase of the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
    OverTarget,
}

// ============================================================================
// Gesture State
// ============================================================================

/// State of one drag gesture.
///
/// Hovering the dragged item itself clears the recorded target, so
/// releasing over the item's own position falls through as a
/// cancellation and no move is attempted.
#[derive(Debug, Default)]
pub struct DragGesture {
    source: Option<Item>,
    spot: Option<DropSpot>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase, derived from what the gesture holds.
    pub fn phase(&self) -> DragPhase {
        match (&self.source, &self.spot) {
            (None, _) => DragPhase::Idle,
            (Some(_), None) => DragPhase::Dragging,
            (Some(_), Some(_)) => DragPhase::OverTarget,
        }
    }

    /// True while a drag is in flight.
    pub fn is_active(&self) -> bool {
        self.source.is_some()
    }

    /// The item being dragged, if any.
    pub fn source(&self) -> Option<&Item> {
        self.source.as_ref()
    }

    /// The currently hovered target, if any.
    pub fn spot(&self) -> Option<&DropSpot> {
        self.spot.as_ref()
    }

    /// Begin dragging `item`. Replaces any stale in-flight gesture.
    pub fn start(&mut self, item: Item) {
        self.source = Some(item);
        self.spot = None;
    }

    /// Record the hovered target. Ignored when idle; hovering the
    /// dragged item itself clears any earlier target, so releasing
    /// over the item's own position cancels in every event ordering.
    pub fn enter_target(&mut self, spot: DropSpot) {
        let Some(source) = &self.source else {
            return;
        };
        if let DropSpot::Before(target) = &spot {
            if target == source {
                self.spot = None;
                return;
            }
        }
        self.spot = Some(spot);
    }

    /// Pointer left the hovered target; keep dragging with no target.
    pub fn leave_target(&mut self) {
        if self.source.is_some() {
            self.spot = None;
        }
    }

    /// Release the drag. Returns the source and target when both are
    /// set; otherwise the gesture was a cancellation. Either way the
    /// gesture resets to idle.
    pub fn release(&mut self) -> Option<(Item, DropSpot)> {
        let source = self.source.take();
        let spot = self.spot.take();
        match (source, spot) {
            (Some(item), Some(spot)) => Some((item, spot)),
            _ => None,
        }
    }

    /// Abandon the drag without dropping.
    pub fn cancel(&mut self) {
        self.source = None;
        self.spot = None;
    }
}
