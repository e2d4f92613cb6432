//! Triple-panel available/rows/columns layout builder.

use dragdeck_core::{panels, DropSpot, Item, Notifier, Result, WidgetEvent};
use dragdeck_filter::FilterView;
use dragdeck_registry::MoveOutcome;

use crate::model::DragModel;

/// Three panels: an available pool and the two layout axes.
///
/// Emits `onLayoutChanged` carrying all three panels after every
/// mutation, whichever panel the drop touched.
pub struct LayoutBuilder {
    id: String,
    model: DragModel,
    filter: FilterView,
    notifier: Notifier<WidgetEvent>,
}

impl LayoutBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model: DragModel::with_panels([panels::AVAILABLE, panels::ROWS, panels::COLUMNS]),
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

    pub fn rows(&self) -> &[Item] {
        self.order(panels::ROWS)
    }

    pub fn columns(&self) -> &[Item] {
        self.order(panels::COLUMNS)
    }

    fn order(&self, panel: &str) -> &[Item] {
        self.model.registry.order(panel).unwrap_or_default()
    }

    /// Move an item within or between the three panels; emits when
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
        let event = WidgetEvent::LayoutChanged {
            rows: self.rows().to_vec(),
            columns: self.columns().to_vec(),
            available: self.available().to_vec(),
        };
        self.notifier.emit(&event);
    }
}
