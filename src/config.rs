//! Configuration loading
//!
//! Reads `~/.config/hinter/config.toml`. A missing file means defaults; a
//! broken file also means defaults, plus a warning for the UI to show.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{Config, SuggestConfig};

const CONFIG_DIR: &str = "hinter";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of loading the configuration file
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when the file existed but could not be used
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

/// Load configuration from an explicit path
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config file at {}, using defaults", path.display());
            return ConfigResult::default();
        }
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Cannot read {}: {}", path.display(), e)),
            };
        }
    };

    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> ConfigResult {
    match toml::from_str::<Config>(contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Invalid config, using defaults: {}", e.message())),
        },
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
