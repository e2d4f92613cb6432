//! Headless host driver for the dragdeck widget models.
//!
//! Stands in for the dashboard host during development: loads a TOML
//! config, builds the configured widgets and in-memory tables, then
//! feeds line commands from stdin into them. Every widget event comes
//! out as one JSON line on stdout.

mod command;
mod driver;

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};

use dragdeck_config::Config;
use dragdeck_logger::LogLevel;

use crate::driver::Driver;

fn main() -> Result<()> {
    // An explicit config path wins over the XDG location.
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load_from(Path::new(&path))
            .with_context(|| format!("loading config {path:?}"))?,
        None => Config::load().unwrap_or_default(),
    };

    init_logging(&config)?;
    dragdeck_logger::info(format!(
        "driver starting with {} widget(s), {} table(s)",
        config.widgets.len(),
        config.tables.len()
    ));

    let mut driver = Driver::from_config(&config)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let keep_going = command::parse(line)
            .and_then(|cmd| driver.execute(cmd))
            .unwrap_or_else(|err| {
                eprintln!("error: {err:#}");
                true
            });
        if !keep_going {
            break;
        }
    }

    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    let path = match &config.logging.file_path {
        Some(path) => path.into(),
        None => Config::default_log_path()?,
    };
    let min_level = config
        .logging
        .min_level
        .parse()
        .unwrap_or(LogLevel::Info);
    dragdeck_logger::init(path, config.logging.max_entries, min_level);
    Ok(())
}
