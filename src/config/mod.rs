//! Configuration loading and parsing for epiclang.
//!
//! This module handles:
//! - Upward discovery of the `.epiclang` dotfile
//! - TOML parsing and shape validation of the `plugins` table

pub mod locate;
pub mod parser;
pub mod types;

pub use locate::{find_dotfile, load_dotfile, load_plugins_config};
pub use parser::{load_plugins, parse_config_file, parse_config_str};
pub use types::{LoadedConfig, PluginSettings, PluginsConfig, RawDotfile};
