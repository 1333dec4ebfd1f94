use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// `<dir>/<prefix>-plugin-<name>.so`, matched against the whole path.
static PLUGIN_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^.*/\w+-plugin-(\w+)\.so$").expect("plugin name pattern is valid")
});

/// Derive the plugin name used for configuration lookups.
///
/// Returns `None` when the path does not follow the naming convention; such
/// plugins are still loaded but never receive `-fplugin-arg-` flags.
pub fn extract_plugin_name(path: &Path) -> Option<String> {
	let path = path.to_str()?;
	PLUGIN_NAME_REGEX
		.captures(path)
		.and_then(|caps| caps.get(1))
		.map(|m| m.as_str().to_string())
}
