//! Line-command language of the headless host driver.

use anyhow::{anyhow, bail, Result};

/// One parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List configured widgets
    Widgets,
    /// Print a widget's panels and their order
    Panels { widget: String },
    /// Replace a panel wholesale from a comma-joined list
    Set {
        widget: String,
        panel: String,
        joined: String,
    },
    /// Move an item directly (no gesture)
    Move {
        widget: String,
        item: String,
        panel: String,
        index: Option<usize>,
    },
    /// Remove a checklist item for good
    Remove { widget: String, item: String },
    /// Start dragging an item
    Drag { widget: String, item: String },
    /// Hover a drop target: before the panel's n-th item, or the
    /// panel's empty area when no index is given
    Over {
        widget: String,
        panel: String,
        index: Option<usize>,
    },
    /// Pointer left the hovered target
    Leave { widget: String },
    /// Release the drag onto the recorded target
    Drop { widget: String },
    /// Abandon the drag
    Cancel { widget: String },
    /// Set a panel's filter query (empty text clears it)
    Query {
        widget: String,
        panel: String,
        text: String,
    },
    /// Pull axes from the external table (pivot widgets)
    Pull { widget: String },
    /// Push axes to the external table (pivot widgets)
    Push { widget: String },
    /// Print one in-memory table's axes
    Table { id: String },
    Help,
    Quit,
}

/// Parse one non-empty input line.
///
/// Fields are whitespace-separated, so item and panel names with
/// embedded spaces are not addressable here; the joined list of `set`
/// splits on commas like the legacy host interface.
pub fn parse(line: &str) -> Result<Command> {
    let mut fields = line.split_whitespace();
    let verb = fields.next().ok_or_else(|| anyhow!("empty command"))?;
    let rest: Vec<&str> = fields.collect();

    let command = match (verb, rest.as_slice()) {
        ("widgets", []) => Command::Widgets,
        ("panels", [widget]) => Command::Panels {
            widget: widget.to_string(),
        },
        ("set", [widget, panel, joined]) => Command::Set {
            widget: widget.to_string(),
            panel: panel.to_string(),
            joined: joined.to_string(),
        },
        ("set", [widget, panel]) => Command::Set {
            widget: widget.to_string(),
            panel: panel.to_string(),
            joined: String::new(),
        },
        ("move", [widget, item, panel]) => Command::Move {
            widget: widget.to_string(),
            item: item.to_string(),
            panel: panel.to_string(),
            index: None,
        },
        ("move", [widget, item, panel, index]) => Command::Move {
            widget: widget.to_string(),
            item: item.to_string(),
            panel: panel.to_string(),
            index: Some(parse_index(index)?),
        },
        ("remove", [widget, item]) => Command::Remove {
            widget: widget.to_string(),
            item: item.to_string(),
        },
        ("drag", [widget, item]) => Command::Drag {
            widget: widget.to_string(),
            item: item.to_string(),
        },
        ("over", [widget, panel]) => Command::Over {
            widget: widget.to_string(),
            panel: panel.to_string(),
            index: None,
        },
        ("over", [widget, panel, index]) => Command::Over {
            widget: widget.to_string(),
            panel: panel.to_string(),
            index: Some(parse_index(index)?),
        },
        ("leave", [widget]) => Command::Leave {
            widget: widget.to_string(),
        },
        ("drop", [widget]) => Command::Drop {
            widget: widget.to_string(),
        },
        ("cancel", [widget]) => Command::Cancel {
            widget: widget.to_string(),
        },
        ("query", [widget, panel]) => Command::Query {
            widget: widget.to_string(),
            panel: panel.to_string(),
            text: String::new(),
        },
        ("query", [widget, panel, text]) => Command::Query {
            widget: widget.to_string(),
            panel: panel.to_string(),
            text: text.to_string(),
        },
        ("table", [id]) => Command::Table { id: id.to_string() },
        ("pull", [widget]) => Command::Pull {
            widget: widget.to_string(),
        },
        ("push", [widget]) => Command::Push {
            widget: widget.to_string(),
        },
        ("help", []) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,
        _ => bail!("bad command {:?}, try `help`", line),
    };
    Ok(command)
}

fn parse_index(field: &str) -> Result<usize> {
    field
        .parse()
        .map_err(|_| anyhow!("index {:?} is not a number", field))
}

pub const HELP: &str = "\
widgets                         list configured widgets
panels <id>                     print a widget's panels
set <id> <panel> [a,b,c]        replace a panel (comma-joined, no spaces)
move <id> <item> <panel> [i]    move an item directly
remove <id> <item>              remove a checklist item
drag <id> <item>                start a drag
over <id> <panel> [i]           hover before the panel's i-th item (or its end)
leave <id>                      leave the hovered target
drop <id>                       release the drag onto the target
cancel <id>                     abandon the drag
query <id> <panel> [text]       set/clear a filter query and show matches
pull <id> | push <id>           sync a pivot widget with its table
table <table-id>                print an in-memory table's axes
help | quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_with_and_without_index() {
        assert_eq!(
            parse("move cl1 A items 0").unwrap(),
            Command::Move {
                widget: "cl1".to_string(),
                item: "A".to_string(),
                panel: "items".to_string(),
                index: Some(0),
            }
        );
        assert_eq!(
            parse("move cl1 A items").unwrap(),
            Command::Move {
                widget: "cl1".to_string(),
                item: "A".to_string(),
                panel: "items".to_string(),
                index: None,
            }
        );
    }

    #[test]
    fn test_parse_gesture_commands() {
        assert_eq!(
            parse("drag lb1 Region").unwrap(),
            Command::Drag {
                widget: "lb1".to_string(),
                item: "Region".to_string(),
            }
        );
        assert_eq!(
            parse("over lb1 rows").unwrap(),
            Command::Over {
                widget: "lb1".to_string(),
                panel: "rows".to_string(),
                index: None,
            }
        );
        assert_eq!(
            parse("drop lb1").unwrap(),
            Command::Drop {
                widget: "lb1".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_set_with_empty_list() {
        assert_eq!(
            parse("set sel1 selected").unwrap(),
            Command::Set {
                widget: "sel1".to_string(),
                panel: "selected".to_string(),
                joined: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_query_clears_without_text() {
        assert_eq!(
            parse("query cl1 items").unwrap(),
            Command::Query {
                widget: "cl1".to_string(),
                panel: "items".to_string(),
                text: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("move").is_err());
        assert!(parse("move cl1 A items nine").is_err());
        assert!(parse("jump cl1").is_err());
    }

    #[test]
    fn test_whitespace_is_forgiving() {
        assert_eq!(
            parse("  panels   cl1 ").unwrap(),
            Command::Panels {
                widget: "cl1".to_string(),
            }
        );
    }
}
