//! Registry-plus-gesture core shared by every widget variant.

use dragdeck_core::{DragGesture, DragPhase, DropSpot, Item};
use dragdeck_logger as logger;
use dragdeck_registry::{MoveOutcome, PanelRegistry};

/// A panel registry paired with the one in-flight drag gesture acting
/// on it.
///
/// Variants embed a `DragModel` and add their own event emission and
/// external hooks on top; the model itself never notifies anyone.
#[derive(Debug, Default)]
pub struct DragModel {
    pub registry: PanelRegistry,
    gesture: DragGesture,
}

impl DragModel {
    /// Model with the given panels declared empty.
    pub fn with_panels<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            registry: PanelRegistry::with_panels(names),
            gesture: DragGesture::new(),
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.gesture.phase()
    }

    /// The item currently being dragged, if any.
    pub fn drag_source(&self) -> Option<&Item> {
        self.gesture.source()
    }

    /// Pick up an item. Starting a drag on an item the registry does
    /// not own is allowed; the drop will resolve to nothing.
    pub fn drag_start(&mut self, item: Item) {
        self.gesture.start(item);
    }

    /// Record the currently hovered drop target.
    pub fn drag_over(&mut self, spot: DropSpot) {
        self.gesture.enter_target(spot);
    }

    /// Pointer left the hovered target; the drag stays in flight.
    pub fn drag_leave(&mut self) {
        self.gesture.leave_target();
    }

    /// Abandon the drag without dropping.
    pub fn drag_cancel(&mut self) {
        self.gesture.cancel();
    }

    /// Release the drag and apply the resulting move, if any.
    ///
    /// `None` means the gesture was a cancellation (released with no
    /// recorded target); `Some` carries what the move did, which may
    /// still be a silent no-op for stale or same-position drops. Only
    /// a changed outcome warrants a notification.
    pub fn drop_release(&mut self) -> Option<MoveOutcome> {
        let (item, spot) = self.gesture.release()?;
        let outcome = match self.registry.resolve_drop(&item, &spot) {
            Some((panel, index)) => self.registry.move_item(&item, &panel, index),
            None => MoveOutcome::NotFound,
        };
        if outcome == MoveOutcome::NotFound {
            logger::debug(format!(
                "drop of {:?} went stale, ignored",
                item.as_str()
            ));
        }
        Some(outcome)
    }
}
