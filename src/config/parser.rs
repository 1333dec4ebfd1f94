use crate::config::types::{PluginSettings, PluginsConfig, RawDotfile};
use crate::error::{EpiclangError, Result};
use std::path::Path;
use toml::Value;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<PluginsConfig> {
	let content = std::fs::read_to_string(path).map_err(|source| EpiclangError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<PluginsConfig> {
	let raw: RawDotfile =
		toml::from_str(content).map_err(|source| EpiclangError::ConfigSyntaxError {
			path: path.to_path_buf(),
			source,
		})?;

	load_plugins(raw.plugins.as_ref())
}

/// Validate the `plugins` value of a parsed dotfile.
///
/// Every entry must be a table whose values are all strings. A missing
/// `plugins` key yields an empty configuration.
pub fn load_plugins(plugins: Option<&Value>) -> Result<PluginsConfig> {
	let mut config = PluginsConfig::default();

	let table = match plugins {
		None => return Ok(config),
		Some(Value::Table(table)) => table,
		Some(_) => return Err(shape_error("plugins", "a table")),
	};

	for (plugin, value) in table {
		let Value::Table(entries) = value else {
			return Err(shape_error(plugin, "a table"));
		};

		let mut settings = PluginSettings::default();
		for (key, value) in entries {
			match value {
				Value::String(s) => settings.push(key, s),
				_ => return Err(shape_error(&format!("{plugin}.{key}"), "a string")),
			}
		}

		config.insert(plugin, settings);
	}

	Ok(config)
}

fn shape_error(key: &str, expected: &'static str) -> EpiclangError {
	EpiclangError::InvalidConfigShape {
		key: key.to_string(),
		expected,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	fn parse(content: &str) -> Result<PluginsConfig> {
		parse_config_str(content, &PathBuf::from(".epiclang"))
	}

	fn expect_shape_error(content: &str) -> String {
		match parse(content).unwrap_err() {
			EpiclangError::InvalidConfigShape { key, .. } => key,
			other => panic!("Expected InvalidConfigShape error, got {other:?}"),
		}
	}

	#[test]
	fn test_parse_empty_config() {
		let config = parse("").unwrap();
		assert!(config.is_empty());
	}

	#[test]
	fn test_missing_plugins_key_is_empty() {
		let config = parse("name = \"project\"\n[other]\nx = 1\n").unwrap();
		assert!(config.is_empty());
	}

	#[test]
	fn test_parse_plugin_tables() {
		let content = r#"
[plugins.banana]
level = "strict"
report = "json"

[plugins.orange]
"#;
		let config = parse(content).unwrap();
		assert_eq!(config.len(), 2);

		let banana = config.lookup("banana").unwrap();
		assert_eq!(banana.get("level"), Some("strict"));
		assert_eq!(banana.get("report"), Some("json"));

		let orange = config.lookup("orange").unwrap();
		assert!(orange.is_empty());

		assert!(config.lookup("apple").is_none());
	}

	#[test]
	fn test_settings_keep_document_order() {
		let content = r#"
[plugins.x]
zeta = "1"
alpha = "2"
mid = "3"
"#;
		let config = parse(content).unwrap();
		let keys: Vec<_> = config.lookup("x").unwrap().iter().map(|(k, _)| k).collect();
		assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
	}

	#[test]
	fn test_inline_tables() {
		let content = r#"plugins = { x = { opt = "1" } }"#;
		let config = parse(content).unwrap();
		assert_eq!(config.lookup("x").unwrap().get("opt"), Some("1"));
	}

	#[test]
	fn test_scalar_plugin_entry_names_plugin() {
		assert_eq!(expect_shape_error("[plugins]\nbanana = \"on\"\n"), "banana");
		assert_eq!(expect_shape_error("[plugins]\nbanana = [\"a\"]\n"), "banana");
	}

	#[test]
	fn test_non_string_setting_names_plugin_and_key() {
		assert_eq!(expect_shape_error("[plugins.banana]\nlevel = 3\n"), "banana.level");
		assert_eq!(
			expect_shape_error("[plugins.banana]\nok = \"1\"\nstrict = true\n"),
			"banana.strict"
		);
		assert_eq!(
			expect_shape_error("[plugins.banana.nested]\nx = \"1\"\n"),
			"banana.nested"
		);
	}

	#[test]
	fn test_scalar_plugins_key() {
		assert_eq!(expect_shape_error("plugins = \"banana\"\n"), "plugins");
	}

	#[test]
	fn test_syntax_error() {
		let result = parse("invalid toml [[[");
		assert!(matches!(
			result.unwrap_err(),
			EpiclangError::ConfigSyntaxError { .. }
		));
	}

	#[test]
	fn test_read_error() {
		let dir = tempfile::tempdir().unwrap();
		let result = parse_config_file(&dir.path().join("missing"));
		assert!(matches!(
			result.unwrap_err(),
			EpiclangError::ConfigReadError { .. }
		));
	}
}
