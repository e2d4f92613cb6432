//! Configuration management for dragdeck.
//!
//! This crate provides host configuration loading and validation with
//! support for TOML format and XDG directory conventions. The model
//! crates never read configuration themselves; the host driver loads a
//! `Config` and feeds it into widget construction.

mod settings;
mod xdg;

pub use settings::{Config, ItemList, LoggingSettings, TableConfig, WidgetConfig};
pub use xdg::{get_config_dir, get_data_dir};

use anyhow::Result;
use std::path::PathBuf;

/// Default values as constants
pub mod defaults {
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const MAX_LOG_ENTRIES: usize = 1000;
    pub const LOG_FILE_NAME: &str = "dragdeck.log";
}

impl Config {
    /// Load configuration from file.
    ///
    /// A missing config file is not an error; it yields the default
    /// (empty) configuration so the driver starts with no widgets.
    /// A file that exists but fails to parse is an error; silently
    /// dropping a host's widget sections would be worse than refusing
    /// to start.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::validate_content(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Default log file location under the data directory.
    pub fn default_log_path() -> Result<PathBuf> {
        Ok(get_data_dir()?.join(defaults::LOG_FILE_NAME))
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.widgets.is_empty());
        assert_eq!(config.logging.min_level, defaults::MIN_LOG_LEVEL);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [[widget]]
            id = "cl1"
            kind = "checklist"
            items = "A,B"
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.widgets.len(), 1);
        assert_eq!(config.widgets[0].id, "cl1");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[[widget]\nbroken").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
