//! Traits describing the external ordered-dimension source.

use std::cell::RefCell;
use std::rc::Rc;

use dragdeck_core::Item;

/// One external table's row/column axis assignment.
///
/// Reads return full ordered snapshots; writes are the minimal
/// clear/append vocabulary the host exposes. Axis order is meaningful
/// on both sides.
pub trait DimensionSource {
    fn read_rows(&self) -> Vec<Item>;
    fn read_columns(&self) -> Vec<Item>;
    fn clear_rows(&mut self);
    fn clear_columns(&mut self);
    fn append_row(&mut self, item: Item);
    fn append_column(&mut self, item: Item);
}

/// Resolves a table id to its dimension source.
///
/// Resolution happens once per pull/push cycle, scoped to the given
/// closure; a table that has disappeared resolves to nothing and the
/// closure never runs.
pub trait TableLookup {
    /// Run `f` against the named table. Returns `false` when the table
    /// is unavailable (`f` was not called).
    fn with_table(&mut self, id: &str, f: &mut dyn FnMut(&mut dyn DimensionSource)) -> bool;
}

impl<T: TableLookup> TableLookup for Rc<RefCell<T>> {
    fn with_table(&mut self, id: &str, f: &mut dyn FnMut(&mut dyn DimensionSource)) -> bool {
        self.borrow_mut().with_table(id, f)
    }
}
