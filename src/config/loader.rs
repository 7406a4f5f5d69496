// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{ConfigError, RcError, Result};
use std::path::{Path, PathBuf};

use super::schema::LintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "rclint.toml",
    ".rclint.toml",
    ".config/rclint.toml",
    ".rclintrc.json",
];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = config_file_in(&current) {
            return Some(found);
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        if let Some(found) = config_file_in(&home) {
            return Some(found);
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let rclint_config = config_dir.join("rclint").join("config.toml");
        if rclint_config.exists() {
            return Some(rclint_config);
        }
    }

    None
}

fn config_file_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(LintConfig::default())
        }
    }
}

/// Load configuration from a specific path.
///
/// `.json` files are read as JSON, everything else as TOML.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(RcError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        RcError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_config_json(&content),
        _ => parse_config(&content),
    }
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    toml::from_str(content).map_err(|e| {
        RcError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Parse configuration from a JSON string.
pub fn parse_config_json(content: &str) -> Result<LintConfig> {
    serde_json::from_str(content).map_err(|e| {
        RcError::Config(ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", e),
        })
    })
}

/// Merge two configurations, with the overlay taking precedence.
///
/// Preset and plugin lists are unioned, rules are overridden one by one.
pub fn merge_configs(base: LintConfig, overlay: LintConfig) -> LintConfig {
    LintConfig {
        extends: union(base.extends, overlay.extends),
        plugins: union(base.plugins, overlay.plugins),
        help_url: overlay.help_url.or(base.help_url),
        rules: {
            let mut merged = base.rules;
            merged.extend(overlay.rules);
            merged
        },
    }
}

fn union(mut base: Vec<String>, overlay: Vec<String>) -> Vec<String> {
    for item in overlay {
        if !base.contains(&item) {
            base.push(item);
        }
    }
    base
}
