//! Pivot-table row/column dimension controller.

use dragdeck_core::{panels, DropSpot, Item, Result};
use dragdeck_registry::MoveOutcome;
use dragdeck_sync::{SyncAdapter, SyncOutcome, TableLookup};

use crate::model::DragModel;

/// Two axis panels mirrored to one external table.
///
/// Emits no host event; the external source is the consumer. A pull
/// replaces local state and never writes back; only user mutations
/// (a drop or a direct `move_item`) push. Wholesale `set_panel` is
/// host initialization and pushes nothing either.
pub struct PivotDimensions<L> {
    id: String,
    model: DragModel,
    adapter: SyncAdapter<L>,
}

impl<L: TableLookup> PivotDimensions<L> {
    pub fn new(id: impl Into<String>, lookup: L, table_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model: DragModel::with_panels([panels::ROWS, panels::COLUMNS]),
            adapter: SyncAdapter::new(lookup, table_id),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn table_id(&self) -> &str {
        self.adapter.table_id()
    }

    /// First attach: seed the axes from the external source.
    pub fn attach(&mut self) -> SyncOutcome {
        self.pull()
    }

    /// Replace the axes with the external source's current order.
    pub fn pull(&mut self) -> SyncOutcome {
        self.adapter.pull(&mut self.model.registry)
    }

    /// Rewrite the external source from the current axis order.
    pub fn push(&mut self) -> SyncOutcome {
        self.adapter.push(&self.model.registry)
    }

    pub fn rows(&self) -> &[Item] {
        self.order(panels::ROWS)
    }

    pub fn columns(&self) -> &[Item] {
        self.order(panels::COLUMNS)
    }

    fn order(&self, panel: &str) -> &[Item] {
        self.model.registry.order(panel).unwrap_or_default()
    }

    /// Replace one axis wholesale (host initialization; no push).
    pub fn set_panel(&mut self, panel: &str, items: Vec<Item>) -> Result<()> {
        self.model.registry.set_panel(panel, items)
    }

    /// Move an item within or between the axes; a changed outcome is a
    /// user mutation and pushes to the external source.
    pub fn move_item(&mut self, item: &Item, panel: &str, index: Option<usize>) -> MoveOutcome {
        let outcome = self.model.registry.move_item(item, panel, index);
        if outcome.changed() {
            self.push();
        }
        outcome
    }

    pub fn drag_start(&mut self, item: Item) {
        self.model.drag_start(item);
    }

    pub fn drag_over(&mut self, spot: DropSpot) {
        self.model.drag_over(spot);
    }

    pub fn drag_leave(&mut self) {
        self.model.drag_leave();
    }

    pub fn drag_cancel(&mut self) {
        self.model.drag_cancel();
    }

    /// Release the drag; a drop that moved anything pushes.
    pub fn drop_release(&mut self) -> bool {
        let changed = self
            .model
            .drop_release()
            .is_some_and(|outcome| outcome.changed());
        if changed {
            self.push();
        }
        changed
    }
}
