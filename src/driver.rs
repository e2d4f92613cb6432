//! Executes parsed commands against the built widget catalog.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, bail, Result};
use serde_json::json;

use dragdeck_config::Config;
use dragdeck_core::{join_items, split_joined, DropSpot, Item};
use dragdeck_registry::MoveOutcome;
use dragdeck_sync::MemoryDimensionHost;
use dragdeck_widget::{build, resolve_items, AnyWidget};

use crate::command::{Command, HELP};

type SharedHost = Rc<RefCell<MemoryDimensionHost>>;

/// The driver's stand-in for the dashboard host: the configured
/// widgets plus the in-memory table catalog pivot widgets sync with.
///
/// Every widget event is printed as one JSON line on stdout; command
/// feedback goes to stdout as plain text, errors to the caller.
pub struct Driver {
    widgets: Vec<AnyWidget<SharedHost>>,
    host: SharedHost,
}

impl Driver {
    /// Build tables and widgets from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut host = MemoryDimensionHost::new();
        for table in &config.tables {
            host.add_table(
                &table.id,
                resolve_items(&table.rows),
                resolve_items(&table.columns),
            );
        }
        let host = Rc::new(RefCell::new(host));

        let mut widgets: Vec<AnyWidget<SharedHost>> = Vec::new();
        for section in &config.widgets {
            if widgets.iter().any(|w| w.id() == section.id) {
                bail!("duplicate widget id {:?}", section.id);
            }
            let mut widget = build(section, Rc::clone(&host))?;
            let id = widget.id().to_string();
            widget.subscribe(move |event| {
                let line = json!({
                    "widget": id,
                    "event": event.name(),
                    "detail": event,
                });
                println!("{line}");
            });
            widgets.push(widget);
        }

        Ok(Self { widgets, host })
    }

    /// Run one command. Returns `false` when the driver should exit.
    pub fn execute(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Widgets => {
                for widget in &self.widgets {
                    println!(
                        "{}  {} ({})",
                        widget.id(),
                        widget.kind().name(),
                        widget.kind().tag()
                    );
                }
            }
            Command::Panels { widget } => {
                for (panel, order) in self.widget_mut(&widget)?.panel_snapshot() {
                    println!("{panel}: [{}]", join_items(&order));
                }
            }
            Command::Set {
                widget,
                panel,
                joined,
            } => {
                self.widget_mut(&widget)?
                    .set_panel(&panel, split_joined(&joined))?;
                println!("set {widget}.{panel}");
            }
            Command::Move {
                widget,
                item,
                panel,
                index,
            } => {
                let outcome = self
                    .widget_mut(&widget)?
                    .move_item(&Item::new(item), &panel, index);
                print_outcome(&outcome);
            }
            Command::Remove { widget, item } => {
                let checklist = self
                    .widget_mut(&widget)?
                    .as_checklist_mut()
                    .ok_or_else(|| anyhow!("{widget:?} is not a checklist"))?;
                checklist.remove(&Item::new(item))?;
            }
            Command::Drag { widget, item } => {
                self.widget_mut(&widget)?.drag_start(Item::new(item));
            }
            Command::Over {
                widget,
                panel,
                index,
            } => {
                let target = self.widget_mut(&widget)?;
                let spot = resolve_spot(target, &panel, index);
                target.drag_over(spot);
            }
            Command::Leave { widget } => {
                self.widget_mut(&widget)?.drag_leave();
            }
            Command::Drop { widget } => {
                if !self.widget_mut(&widget)?.drop_release() {
                    println!("no-op");
                }
            }
            Command::Cancel { widget } => {
                self.widget_mut(&widget)?.drag_cancel();
            }
            Command::Query {
                widget,
                panel,
                text,
            } => {
                let target = self.widget_mut(&widget)?;
                if !target.set_query(&panel, &text) {
                    bail!("{widget:?} has no filter view");
                }
                let visible = target
                    .visible(&panel)
                    .expect("kinds with a query have a filter view");
                println!("visible: [{}]", join_items(&visible));
            }
            Command::Pull { widget } => {
                let pivot = self
                    .widget_mut(&widget)?
                    .as_pivot_mut()
                    .ok_or_else(|| anyhow!("{widget:?} is not a pivot widget"))?;
                println!("pull: {}", pivot.pull().as_str());
            }
            Command::Push { widget } => {
                let pivot = self
                    .widget_mut(&widget)?
                    .as_pivot_mut()
                    .ok_or_else(|| anyhow!("{widget:?} is not a pivot widget"))?;
                println!("push: {}", pivot.push().as_str());
            }
            Command::Table { id } => {
                let host = self.host.borrow();
                let table = host
                    .table(&id)
                    .ok_or_else(|| anyhow!("no table {id:?}"))?;
                println!("rows: [{}]", join_items(table.rows()));
                println!("columns: [{}]", join_items(table.columns()));
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn widget_mut(&mut self, id: &str) -> Result<&mut AnyWidget<SharedHost>> {
        self.widgets
            .iter_mut()
            .find(|w| w.id() == id)
            .ok_or_else(|| anyhow!("no widget {id:?}"))
    }
}

fn print_outcome(outcome: &MoveOutcome) {
    match outcome {
        MoveOutcome::Moved {
            from_panel,
            from_index,
            to_panel,
            to_index,
        } => println!("moved {from_panel}[{from_index}] -> {to_panel}[{to_index}]"),
        MoveOutcome::SamePosition => println!("no-op (same position)"),
        MoveOutcome::NotFound => println!("no-op (stale)"),
    }
}

/// Map `over <panel> [index]` onto a drop spot: before the panel's
/// n-th item when the index lands on one, the panel's empty end area
/// otherwise.
fn resolve_spot(widget: &AnyWidget<SharedHost>, panel: &str, index: Option<usize>) -> DropSpot {
    if let Some(index) = index {
        let sibling = widget
            .panel_snapshot()
            .into_iter()
            .find(|(name, _)| *name == panel)
            .and_then(|(_, order)| order.get(index).cloned());
        if let Some(item) = sibling {
            return DropSpot::Before(item);
        }
    }
    DropSpot::panel_end(panel)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::command::parse;

    fn driver() -> Driver {
        let config = Config::validate_content(
            r#"
            [[widget]]
            id = "cl1"
            kind = "checklist"
            items = "A,B,C"

            [[widget]]
            id = "lb1"
            kind = "layout-builder"
            available = "Region,Product,Quarter"

            [[widget]]
            id = "pv1"
            kind = "pivot-dimensions"
            table = "sales"

            [[table]]
            id = "sales"
            rows = "Region"
            columns = "Quarter"
            "#,
        )
        .unwrap();
        Driver::from_config(&config).unwrap()
    }

    fn run(driver: &mut Driver, line: &str) -> Result<bool> {
        driver.execute(parse(line).unwrap())
    }

    fn panel_of(driver: &mut Driver, widget: &str, panel: &str) -> Vec<Item> {
        driver
            .widget_mut(widget)
            .unwrap()
            .panel_snapshot()
            .into_iter()
            .find(|(name, _)| *name == panel)
            .map(|(_, order)| order)
            .unwrap()
    }

    #[test]
    fn test_config_builds_and_pivot_attaches() {
        let mut driver = driver();
        assert_eq!(panel_of(&mut driver, "pv1", "rows"), [Item::new("Region")]);
        assert_eq!(
            panel_of(&mut driver, "pv1", "columns"),
            [Item::new("Quarter")]
        );
    }

    #[test]
    fn test_move_command() {
        let mut driver = driver();
        run(&mut driver, "move cl1 C items 0").unwrap();
        assert_eq!(
            panel_of(&mut driver, "cl1", "items"),
            [Item::new("C"), Item::new("A"), Item::new("B")]
        );
    }

    #[test]
    fn test_full_drag_through_commands() {
        let mut driver = driver();
        run(&mut driver, "drag lb1 Product").unwrap();
        run(&mut driver, "over lb1 rows").unwrap();
        run(&mut driver, "drop lb1").unwrap();

        assert_eq!(panel_of(&mut driver, "lb1", "rows"), [Item::new("Product")]);
    }

    #[test]
    fn test_over_with_index_targets_sibling() {
        let mut driver = driver();
        run(&mut driver, "drag cl1 C").unwrap();
        run(&mut driver, "over cl1 items 0").unwrap();
        run(&mut driver, "drop cl1").unwrap();

        assert_eq!(
            panel_of(&mut driver, "cl1", "items"),
            [Item::new("C"), Item::new("A"), Item::new("B")]
        );
    }

    #[test]
    fn test_remove_only_works_on_checklists() {
        let mut driver = driver();
        run(&mut driver, "remove cl1 B").unwrap();
        assert_eq!(
            panel_of(&mut driver, "cl1", "items"),
            [Item::new("A"), Item::new("C")]
        );
        assert!(run(&mut driver, "remove lb1 Region").is_err());
    }

    #[test]
    fn test_pivot_drop_reaches_the_table() {
        let mut driver = driver();
        run(&mut driver, "drag pv1 Region").unwrap();
        run(&mut driver, "over pv1 columns").unwrap();
        run(&mut driver, "drop pv1").unwrap();

        let host = driver.host.borrow();
        let table = host.table("sales").unwrap();
        assert!(table.rows().is_empty());
        assert_eq!(
            table.columns(),
            [Item::new("Quarter"), Item::new("Region")]
        );
    }

    #[test]
    fn test_unknown_widget_is_an_error() {
        let mut driver = driver();
        assert!(run(&mut driver, "panels nobody").is_err());
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let mut driver = driver();
        assert_eq!(run(&mut driver, "quit").unwrap(), false);
        assert_eq!(run(&mut driver, "widgets").unwrap(), true);
    }

    #[test]
    fn test_duplicate_widget_ids_rejected() {
        let config = Config::validate_content(
            r#"
            [[widget]]
            id = "cl1"
            kind = "checklist"

            [[widget]]
            id = "cl1"
            kind = "selector"
            "#,
        )
        .unwrap();
        assert!(Driver::from_config(&config).is_err());
    }
}
