//! In-memory dimension host for the driver and tests.

use dragdeck_core::Item;

use crate::source::{DimensionSource, TableLookup};

/// One in-memory table with ordered row/column axes.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    rows: Vec<Item>,
    columns: Vec<Item>,
}

impl MemoryTable {
    pub fn new(rows: Vec<Item>, columns: Vec<Item>) -> Self {
        Self { rows, columns }
    }

    pub fn rows(&self) -> &[Item] {
        &self.rows
    }

    pub fn columns(&self) -> &[Item] {
        &self.columns
    }
}

impl DimensionSource for MemoryTable {
    fn read_rows(&self) -> Vec<Item> {
        self.rows.clone()
    }

    fn read_columns(&self) -> Vec<Item> {
        self.columns.clone()
    }

    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn clear_columns(&mut self) {
        self.columns.clear();
    }

    fn append_row(&mut self, item: Item) {
        self.rows.push(item);
    }

    fn append_column(&mut self, item: Item) {
        self.columns.push(item);
    }
}

/// A host-side table catalog living entirely in memory.
///
/// Stands in for the dashboard's table lookup: tables can be added and
/// deleted while adapters hold on to their ids, which is how the
/// unavailable-table paths get exercised.
#[derive(Debug, Clone, Default)]
pub struct MemoryDimensionHost {
    tables: Vec<(String, MemoryTable)>,
}

impl MemoryDimensionHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a table under `id`.
    pub fn add_table(&mut self, id: impl Into<String>, rows: Vec<Item>, columns: Vec<Item>) {
        let id = id.into();
        let table = MemoryTable::new(rows, columns);
        match self.tables.iter_mut().find(|(tid, _)| *tid == id) {
            Some((_, existing)) => *existing = table,
            None => self.tables.push((id, table)),
        }
    }

    /// Delete a table. Returns whether it existed.
    pub fn remove_table(&mut self, id: &str) -> bool {
        let before = self.tables.len();
        self.tables.retain(|(tid, _)| tid != id);
        self.tables.len() < before
    }

    pub fn table(&self, id: &str) -> Option<&MemoryTable> {
        self.tables
            .iter()
            .find(|(tid, _)| tid == id)
            .map(|(_, table)| table)
    }

    pub fn table_ids(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|(id, _)| id.as_str())
    }

    fn table_mut(&mut self, id: &str) -> Option<&mut MemoryTable> {
        self.tables
            .iter_mut()
            .find(|(tid, _)| tid == id)
            .map(|(_, table)| table)
    }
}

impl TableLookup for MemoryDimensionHost {
    fn with_table(&mut self, id: &str, f: &mut dyn FnMut(&mut dyn DimensionSource)) -> bool {
        match self.table_mut(id) {
            Some(table) => {
                f(table);
                true
            }
            None => false,
        }
    }
}
