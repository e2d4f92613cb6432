//! Move, reorder, and remove operations over a panel registry.
//!
//! `move_item` is the single operation behind every drag outcome:
//! reordering within a panel and transferring between panels are the
//! same remove-then-insert, with the target index read against the
//! sequence as it stands after the removal. Dropping an item onto a
//! later sibling therefore lands it immediately before that sibling.

use dragdeck_core::{DropSpot, Item, RegistryError, Result};

use crate::registry::PanelRegistry;

/// What a `move_item` call did.
///
/// Only `Moved` changes the registry; the other outcomes are silent
/// successes. Stale drag state (the item or destination vanished since
/// the gesture started) resolves to `NotFound`, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Registry contents changed; carries where the item came from and
    /// where it landed, for logging and notification.
    Moved {
        from_panel: String,
        from_index: usize,
        to_panel: String,
        to_index: usize,
    },
    /// Resolved target equals the current position; nothing to do.
    SamePosition,
    /// Item or destination panel is gone; nothing to do.
    NotFound,
}

impl MoveOutcome {
    /// True when the registry was mutated and a change event is due.
    pub fn changed(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

impl PanelRegistry {
    /// Move `item` into `to_panel` at `target_index`.
    ///
    /// The index addresses the destination sequence after the item has
    /// been taken out of its current panel. `None` or an out-of-range
    /// index appends at the end. A move that resolves to the item's
    /// current position is reported as `SamePosition` and leaves the
    /// registry untouched.
    pub fn move_item(
        &mut self,
        item: &Item,
        to_panel: &str,
        target_index: Option<usize>,
    ) -> MoveOutcome {
        let Some((src_panel, src_index)) = self.locate(item) else {
            return MoveOutcome::NotFound;
        };
        let src_panel = src_panel.to_string();
        let Some(dst) = self.panel_index(to_panel) else {
            return MoveOutcome::NotFound;
        };
        let src = self
            .panel_index(&src_panel)
            .expect("locate returned an existing panel");

        let len_after_removal = if src == dst {
            self.panels[dst].items.len() - 1
        } else {
            self.panels[dst].items.len()
        };
        let resolved = target_index
            .unwrap_or(len_after_removal)
            .min(len_after_removal);

        if src == dst && resolved == src_index {
            return MoveOutcome::SamePosition;
        }

        let taken = self.panels[src].items.remove(src_index);
        self.panels[dst].items.insert(resolved, taken);
        MoveOutcome::Moved {
            from_panel: src_panel,
            from_index: src_index,
            to_panel: to_panel.to_string(),
            to_index: resolved,
        }
    }

    /// Delete `item` from its panel and from the widget's ownership.
    ///
    /// Unlike a stale move this is an explicit user action on a visible
    /// row, so a missing item is an error rather than a silent no-op.
    pub fn remove_item(&mut self, item: &Item) -> Result<()> {
        let Some((panel, index)) = self.locate(item) else {
            return Err(RegistryError::NotFound(item.clone()));
        };
        let panel = self
            .panel_index(panel)
            .expect("locate returned an existing panel");
        self.panels[panel].items.remove(index);
        Ok(())
    }

    /// Translate a gesture's drop spot into `move_item` arguments.
    ///
    /// `Before(target)` resolves to the target's position with the
    /// dragged item already taken out, so the pair feeds straight into
    /// `move_item`. Returns `None` when the spot has gone stale (the
    /// target item or panel vanished) or when the target is the source
    /// itself.
    pub fn resolve_drop(
        &self,
        source: &Item,
        spot: &DropSpot,
    ) -> Option<(String, Option<usize>)> {
        match spot {
            DropSpot::Before(target) => {
                if target == source {
                    return None;
                }
                let (panel, target_index) = self.locate(target)?;
                let adjusted = match self.locate(source) {
                    Some((src_panel, src_index))
                        if src_panel == panel && src_index < target_index =>
                    {
                        target_index - 1
                    }
                    _ => target_index,
                };
                Some((panel.to_string(), Some(adjusted)))
            }
            DropSpot::PanelEnd(name) => {
                if self.contains_panel(name) {
                    Some((name.clone(), None))
                } else {
                    None
                }
            }
        }
    }
}
