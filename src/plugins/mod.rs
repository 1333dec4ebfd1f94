//! Plugin discovery for epiclang.
//!
//! This module handles:
//! - Scanning the plugin directories for `*.so` files
//! - Deriving plugin names from file names

pub mod discovery;
pub mod naming;

pub use discovery::{PluginRef, discover_plugins};
pub use naming::extract_plugin_name;
