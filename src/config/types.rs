use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level document of a `.epiclang` file, before shape validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDotfile {
	/// Expected to be a table of tables of strings; checked by the parser.
	#[serde(default)]
	pub plugins: Option<toml::Value>,
}

/// Settings for one plugin, in the order they appear in the dotfile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginSettings {
	entries: Vec<(String, String)>,
}

impl PluginSettings {
	pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.entries.push((key.into(), value.into()));
	}

	/// Iterate `(key, value)` pairs in document order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Per-plugin configuration loaded from a `.epiclang` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginsConfig {
	plugins: HashMap<String, PluginSettings>,
}

impl PluginsConfig {
	pub fn insert(&mut self, plugin: impl Into<String>, settings: PluginSettings) {
		self.plugins.insert(plugin.into(), settings);
	}

	/// Settings for `plugin`, or `None` when the dotfile has none.
	pub fn lookup(&self, plugin: &str) -> Option<&PluginSettings> {
		self.plugins.get(plugin)
	}

	pub fn len(&self) -> usize {
		self.plugins.len()
	}

	pub fn is_empty(&self) -> bool {
		self.plugins.is_empty()
	}
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The validated configuration.
	pub config: PluginsConfig,

	/// The path this config was loaded from.
	pub path: PathBuf,
}
