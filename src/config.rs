// Configuration module for circl-notify
// This module handles loading and parsing configuration from ~/.config/circl/config.toml

mod types;

pub use types::{Config, NotificationConfig, PollerConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from `path`, or ~/.config/circl/config.toml when none is given.
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    match path {
        Some(path) => load_from(path, true),
        None => load_from(&get_config_path(), false),
    }
}

/// A missing file is only worth a warning when the user named it
fn load_from(config_path: &Path, explicit: bool) -> ConfigResult {
    log::debug!("Loading config from {:?}", config_path);

    if !config_path.exists() {
        if explicit {
            log::warn!("Config file {:?} not found, using defaults", config_path);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Config file not found: {}", config_path.display())),
            };
        }
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            let warning = if config.poller.enabled && config.poller.user_id.is_none() {
                Some("Poller enabled but no user_id configured".to_string())
            } else {
                None
            };
            ConfigResult { config, warning }
        }
        Err(e) => {
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/circl/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("circl")
        .join("config.toml")
}
