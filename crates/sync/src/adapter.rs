//! Pull/push bridge between a panel registry and one external table.

use dragdeck_core::{panels, Item};
use dragdeck_logger as logger;
use dragdeck_registry::PanelRegistry;

use crate::source::TableLookup;

/// What a pull or push did. Every variant is non-fatal; the widget
/// stays usable after any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The operation ran against the external source.
    Applied,
    /// The external table could not be resolved; nothing changed.
    Unavailable,
    /// The external snapshot was malformed (an item repeated across
    /// axes, or already homed outside them); nothing changed.
    Rejected,
}

impl SyncOutcome {
    pub fn applied(self) -> bool {
        matches!(self, SyncOutcome::Applied)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SyncOutcome::Applied => "applied",
            SyncOutcome::Unavailable => "unavailable",
            SyncOutcome::Rejected => "rejected",
        }
    }
}

/// Keeps a registry's `rows`/`columns` panels and one external table's
/// axes in one-to-one correspondence.
///
/// The lookup is injected at construction and exercised once per
/// operation, so a table deleted between operations degrades to
/// `Unavailable` rather than an error. `pull` writes panels directly
/// and never routes through drop handling, so it cannot trigger a
/// `push`; the exclusive borrow taken for the duration of either
/// operation rules out a nested sync call.
#[derive(Debug)]
pub struct SyncAdapter<L> {
    lookup: L,
    table_id: String,
}

impl<L: TableLookup> SyncAdapter<L> {
    pub fn new(lookup: L, table_id: impl Into<String>) -> Self {
        Self {
            lookup,
            table_id: table_id.into(),
        }
    }

    /// The external table this adapter is bound to.
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// Replace the registry's `rows`/`columns` panels with the external
    /// source's current axis assignment.
    pub fn pull(&mut self, registry: &mut PanelRegistry) -> SyncOutcome {
        let mut rows = Vec::new();
        let mut columns = Vec::new();
        let resolved = self.lookup.with_table(&self.table_id, &mut |table| {
            rows = table.read_rows();
            columns = table.read_columns();
        });
        if !resolved {
            logger::warn(format!("table {:?} unavailable, pull skipped", self.table_id));
            return SyncOutcome::Unavailable;
        }

        if let Some(offender) = malformed_snapshot(registry, &rows, &columns) {
            logger::error(format!(
                "table {:?} snapshot rejected, item {:?} repeated or homed outside the axes",
                self.table_id,
                offender.as_str()
            ));
            return SyncOutcome::Rejected;
        }

        // Empty both axes first so items that switched axis externally
        // do not trip the single-home check mid-replace.
        registry
            .set_panel(panels::ROWS, Vec::new())
            .expect("clearing a panel cannot introduce duplicates");
        registry
            .set_panel(panels::COLUMNS, Vec::new())
            .expect("clearing a panel cannot introduce duplicates");
        let row_count = rows.len();
        let column_count = columns.len();
        registry
            .set_panel(panels::ROWS, rows)
            .expect("snapshot validated against the registry");
        registry
            .set_panel(panels::COLUMNS, columns)
            .expect("snapshot validated against the registry");

        logger::debug(format!(
            "pulled {} rows, {} columns from table {:?}",
            row_count, column_count, self.table_id
        ));
        SyncOutcome::Applied
    }

    /// Rewrite the external source's axes from the registry's current
    /// `rows`/`columns` order: one clear-and-append pass per axis.
    pub fn push(&mut self, registry: &PanelRegistry) -> SyncOutcome {
        let rows: Vec<Item> = registry.order(panels::ROWS).unwrap_or_default().to_vec();
        let columns: Vec<Item> = registry
            .order(panels::COLUMNS)
            .unwrap_or_default()
            .to_vec();

        let resolved = self.lookup.with_table(&self.table_id, &mut |table| {
            table.clear_rows();
            for item in &rows {
                table.append_row(item.clone());
            }
            table.clear_columns();
            for item in &columns {
                table.append_column(item.clone());
            }
        });
        if !resolved {
            logger::warn(format!("table {:?} unavailable, push skipped", self.table_id));
            return SyncOutcome::Unavailable;
        }

        logger::debug(format!(
            "pushed {} rows, {} columns to table {:?}",
            rows.len(),
            columns.len(),
            self.table_id
        ));
        SyncOutcome::Applied
    }
}

/// First item in the incoming snapshot that would break the registry's
/// single-home invariant, if any. Items already living in the synced
/// axes are fine (the axes are about to be replaced); items homed in
/// any other panel are not.
fn malformed_snapshot(
    registry: &PanelRegistry,
    rows: &[Item],
    columns: &[Item],
) -> Option<Item> {
    for (idx, item) in rows.iter().enumerate() {
        if rows[..idx].contains(item) {
            return Some(item.clone());
        }
    }
    for (idx, item) in columns.iter().enumerate() {
        if columns[..idx].contains(item) || rows.contains(item) {
            return Some(item.clone());
        }
    }
    for item in rows.iter().chain(columns.iter()) {
        if let Some((panel, _)) = registry.locate(item) {
            if panel != panels::ROWS && panel != panels::COLUMNS {
                return Some(item.clone());
            }
        }
    }
    None
}
