// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for rclint.
//!
//! This module handles loading, parsing, and merging configuration from
//! files, built-in presets and defaults.

pub mod catalog;
pub mod default;
mod loader;
pub mod preset;
mod schema;

pub use default::default_config;
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, merge_configs,
    parse_config, parse_config_json,
};
pub use schema::*;
