//! Dual-panel available/selected transfer list.

use dragdeck_core::{panels, DropSpot, Item, Notifier, Result, WidgetEvent};
use dragdeck_filter::FilterView;
use dragdeck_registry::MoveOutcome;

use crate::model::DragModel;

/// Two panels, one pool and one selection, with drag transfer between
/// them and reordering within each.
///
/// Emits `onSelectionChanged` with the full selected list after every
/// mutation. A reorder inside the available pool also emits: the host
/// contract is one snapshot per completed user action, and consumers
/// that only care about membership see an unchanged payload.
pub struct Selector {
    id: String,
    model: DragModel,
    filter: FilterView,
    notifier: Notifier<WidgetEvent>,
}

impl Selector {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model: DragModel::with_panels([panels::AVAILABLE, panels::SELECTED]),
            filter: FilterView::new(),
            notifier: Notifier::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&WidgetEvent) + 'static) {
        self.notifier.subscribe(listener);
    }

    /// Replace one panel wholesale (host initialization; no event).
    pub fn set_panel(&mut self, panel: &str, items: Vec<Item>) -> Result<()> {
        self.model.registry.set_panel(panel, items)
    }

    pub fn available(&self) -> &[Item] {
        self.order(panels::AVAILABLE)
    }

    pub fn selected(&self) -> &[Item] {
        self.order(panels::SELECTED)
    }

    fn order(&self, panel: &str) -> &[Item] {
        self.model.registry.order(panel).unwrap_or_default()
    }

    /// Move an item within or between the two panels; emits when
    /// anything changed.
    pub fn move_item(&mut self, item: &Item, panel: &str, index: Option<usize>) -> MoveOutcome {
        let outcome = self.model.registry.move_item(item, panel, index);
        if outcome.changed() {
            self.emit();
        }
        outcome
    }

    pub fn set_query(&mut self, panel: &str, query: &str) {
        self.filter.set_query(panel, query);
    }

    pub fn visible(&self, panel: &str) -> Vec<Item> {
        self.filter
            .visible(&self.model.registry, panel)
            .into_iter()
            .cloned()
            .collect()
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

    /// Release the drag; emits when the drop moved anything.
    pub fn drop_release(&mut self) -> bool {
        let changed = self
            .model
            .drop_release()
            .is_some_and(|outcome| outcome.changed());
        if changed {
            self.emit();
        }
        changed
    }

    fn emit(&mut self) {
        let event = WidgetEvent::SelectionChanged {
            selected: self.selected().to_vec(),
        };
        self.notifier.emit(&event);
    }
}
