//! Single-panel reorderable checklist.

use dragdeck_core::{
    join_items, panels, split_joined, DropSpot, Item, Notifier, Result, WidgetEvent,
};
use dragdeck_filter::FilterView;
use dragdeck_registry::MoveOutcome;

use crate::model::DragModel;

/// One reorderable list with a per-row remove affordance.
///
/// Emits `onOrderChanged` with the full order after every reorder and
/// after every removal; wholesale `set_items` is host initialization
/// and does not emit.
pub struct Checklist {
    id: String,
    model: DragModel,
    filter: FilterView,
    notifier: Notifier<WidgetEvent>,
}

impl Checklist {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model: DragModel::with_panels([panels::ITEMS]),
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

    /// Replace the list wholesale.
    pub fn set_items(&mut self, items: Vec<Item>) -> Result<()> {
        self.model.registry.set_panel(panels::ITEMS, items)
    }

    /// Replace the list from the legacy comma-joined form.
    pub fn set_items_joined(&mut self, joined: &str) -> Result<()> {
        self.set_items(split_joined(joined))
    }

    /// Current order in the legacy comma-joined form.
    pub fn items_joined(&self) -> String {
        join_items(self.order())
    }

    pub fn order(&self) -> &[Item] {
        self.model
            .registry
            .order(panels::ITEMS)
            .unwrap_or_default()
    }

    /// Move an item to a new position; emits when anything changed.
    pub fn move_item(&mut self, item: &Item, index: Option<usize>) -> MoveOutcome {
        let outcome = self.model.registry.move_item(item, panels::ITEMS, index);
        if outcome.changed() {
            self.emit();
        }
        outcome
    }

    /// Delete an item for good and re-announce the order.
    pub fn remove(&mut self, item: &Item) -> Result<()> {
        self.model.registry.remove_item(item)?;
        self.emit();
        Ok(())
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.set_query(panels::ITEMS, query);
    }

    /// Rows the rendering layer should show under the current query.
    pub fn visible(&self) -> Vec<Item> {
        self.filter
            .visible(&self.model.registry, panels::ITEMS)
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
        let event = WidgetEvent::OrderChanged {
            order: self.order().to_vec(),
        };
        self.notifier.emit(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    fn items(labels: &[&str]) -> Vec<Item> {
        labels.iter().map(|l| Item::from(*l)).collect()
    }

    fn checklist(labels: &[&str]) -> Checklist {
        let mut widget = Checklist::new("cl1");
        widget.set_items(items(labels)).unwrap();
        widget
    }

    fn record_orders(widget: &mut Checklist) -> Rc<RefCell<Vec<Vec<Item>>>> {
        let seen: Rc<RefCell<Vec<Vec<Item>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        widget.subscribe(move |event| {
            if let WidgetEvent::OrderChanged { order } = event {
                sink.borrow_mut().push(order.clone());
            }
        });
        seen
    }

    #[test]
    fn test_move_to_front_emits_new_order() {
        let mut widget = checklist(&["A", "B", "C"]);
        let seen = record_orders(&mut widget);

        let outcome = widget.move_item(&Item::new("C"), Some(0));

        assert!(outcome.changed());
        assert_eq!(widget.order(), items(&["C", "A", "B"]));
        assert_eq!(*seen.borrow(), vec![items(&["C", "A", "B"])]);
    }

    #[test]
    fn test_self_position_move_does_not_emit() {
        let mut widget = checklist(&["A", "B"]);
        let seen = record_orders(&mut widget);

        let outcome = widget.move_item(&Item::new("B"), Some(1));

        assert_eq!(outcome, MoveOutcome::SamePosition);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_remove_emits_and_is_permanent() {
        let mut widget = checklist(&["X", "Y"]);
        let seen = record_orders(&mut widget);

        widget.remove(&Item::new("X")).unwrap();

        assert_eq!(widget.order(), items(&["Y"]));
        assert_eq!(*seen.borrow(), vec![items(&["Y"])]);
        // The removed item is out of the universe; moving it is stale.
        assert_eq!(
            widget.move_item(&Item::new("X"), Some(0)),
            MoveOutcome::NotFound
        );
        assert!(widget.remove(&Item::new("X")).is_err());
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_drag_reorder_emits_once() {
        let mut widget = checklist(&["A", "B", "C"]);
        let seen = record_orders(&mut widget);

        widget.drag_start(Item::new("C"));
        widget.drag_over(DropSpot::Before(Item::new("A")));
        assert!(widget.drop_release());

        assert_eq!(*seen.borrow(), vec![items(&["C", "A", "B"])]);
    }

    #[test]
    fn test_cancelled_drag_emits_nothing() {
        let mut widget = checklist(&["A", "B"]);
        let seen = record_orders(&mut widget);

        widget.drag_start(Item::new("A"));
        widget.drag_over(DropSpot::Before(Item::new("B")));
        widget.drag_leave();
        assert!(!widget.drop_release());

        assert!(seen.borrow().is_empty());
        assert_eq!(widget.order(), items(&["A", "B"]));
    }

    #[test]
    fn test_set_items_does_not_emit() {
        let mut widget = Checklist::new("cl1");
        let seen = record_orders(&mut widget);
        widget.set_items(items(&["A"])).unwrap();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_joined_round_trip() {
        let mut widget = Checklist::new("cl1");
        widget.set_items_joined("A,B").unwrap();
        assert_eq!(widget.order(), items(&["A", "B"]));
        assert_eq!(widget.items_joined(), "A,B");
    }

    #[test]
    fn test_filter_narrows_without_reordering() {
        let mut widget = checklist(&["Apple", "Banana", "Avocado"]);
        widget.set_query("a");

        assert_eq!(widget.visible(), items(&["Apple", "Avocado"]));
        assert_eq!(widget.order(), items(&["Apple", "Banana", "Avocado"]));
    }
}
