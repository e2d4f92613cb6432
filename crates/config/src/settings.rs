//! Configuration structures for dragdeck hosts.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Host configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Widget instances to build at startup
    #[serde(default, rename = "widget")]
    pub widgets: Vec<WidgetConfig>,

    /// Tables seeding the in-memory dimension host
    #[serde(default, rename = "table")]
    pub tables: Vec<TableConfig>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional; defaults to the data directory)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Maximum log entries kept in memory
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

/// One widget instance to build at startup.
///
/// Only the fields matching the widget's kind are read; the rest stay
/// `None`. Panel fields accept both item-list forms (see [`ItemList`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Host-unique widget id
    pub id: String,

    /// Widget kind: catalog tag or its short name
    /// (checklist, selector, layout-builder, pivot-dimensions)
    pub kind: String,

    /// Initial items (checklist)
    #[serde(default)]
    pub items: Option<ItemList>,

    /// Initial available pool (selector, layout builder)
    #[serde(default)]
    pub available: Option<ItemList>,

    /// Initial selection (selector)
    #[serde(default)]
    pub selected: Option<ItemList>,

    /// Initial row axis (layout builder)
    #[serde(default)]
    pub rows: Option<ItemList>,

    /// Initial column axis (layout builder)
    #[serde(default)]
    pub columns: Option<ItemList>,

    /// Bound table id (pivot dimensions)
    #[serde(default)]
    pub table: Option<String>,
}

/// One table seeding the driver's in-memory dimension host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Table id pivot widgets bind to
    pub id: String,

    /// Initial row axis
    #[serde(default)]
    pub rows: ItemList,

    /// Initial column axis
    #[serde(default)]
    pub columns: ItemList,
}

/// An item list in either structured or legacy joined form.
///
/// Hosts historically configured lists as one comma-joined string with
/// no escaping; structured arrays are the current form. Both
/// deserialize here and round-trip unchanged. How a joined string
/// splits into items is the model's business, not this crate's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemList {
    /// Structured list: `items = ["A", "B"]`
    List(Vec<String>),
    /// Legacy joined string: `items = "A,B"`
    Joined(String),
}

impl Default for ItemList {
    fn default() -> Self {
        ItemList::List(Vec::new())
    }
}

// Default value functions for serde
fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::MAX_LOG_ENTRIES
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_gets_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.logging.min_level, "info");
        assert_eq!(config.logging.max_entries, defaults::MAX_LOG_ENTRIES);
        assert!(config.widgets.is_empty());
        assert!(config.tables.is_empty());
    }

    #[test]
    fn test_widget_sections_parse() {
        let config: Config = toml::from_str(
            r#"
            [logging]
            min_level = "debug"

            [[widget]]
            id = "cl1"
            kind = "checklist"
            items = ["Write", "Review", "Ship"]

            [[widget]]
            id = "pv1"
            kind = "pivot-dimensions"
            table = "sales"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.min_level, "debug");
        assert_eq!(config.widgets.len(), 2);
        assert_eq!(config.widgets[0].id, "cl1");
        assert_eq!(
            config.widgets[0].items,
            Some(ItemList::List(vec![
                "Write".to_string(),
                "Review".to_string(),
                "Ship".to_string(),
            ]))
        );
        assert_eq!(config.widgets[1].table.as_deref(), Some("sales"));
        assert_eq!(config.widgets[1].items, None);
    }

    #[test]
    fn test_item_list_accepts_both_forms() {
        let config: Config = toml::from_str(
            r#"
            [[widget]]
            id = "cl1"
            kind = "checklist"
            items = "A,B,C"

            [[widget]]
            id = "cl2"
            kind = "checklist"
            items = ["A", "B", "C"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.widgets[0].items,
            Some(ItemList::Joined("A,B,C".to_string()))
        );
        assert_eq!(
            config.widgets[1].items,
            Some(ItemList::List(vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
            ]))
        );
    }

    #[test]
    fn test_table_sections_parse() {
        let config: Config = toml::from_str(
            r#"
            [[table]]
            id = "sales"
            rows = ["Region"]
            columns = "Quarter,Year"
            "#,
        )
        .unwrap();

        assert_eq!(config.tables.len(), 1);
        assert_eq!(config.tables[0].id, "sales");
        assert_eq!(
            config.tables[0].rows,
            ItemList::List(vec!["Region".to_string()])
        );
        assert_eq!(
            config.tables[0].columns,
            ItemList::Joined("Quarter,Year".to_string())
        );
    }

    #[test]
    fn test_round_trip_preserves_forms() {
        let source = r#"
            [[widget]]
            id = "cl1"
            kind = "checklist"
            items = "A,B"
        "#;
        let config: Config = toml::from_str(source).unwrap();
        let rendered = toml::to_string_pretty(&config).unwrap();
        let reparsed: Config = toml::from_str(&rendered).unwrap();

        assert_eq!(
            reparsed.widgets[0].items,
            Some(ItemList::Joined("A,B".to_string()))
        );
    }
}
