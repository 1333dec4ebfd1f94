use crate::plugins::naming::extract_plugin_name;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A plugin shared object found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRef {
	/// Full path to the `.so` file.
	pub path: PathBuf,

	/// Name derived from the file name, if it follows the naming convention.
	pub name: Option<String>,
}

impl PluginRef {
	pub fn new(path: PathBuf) -> Self {
		let name = extract_plugin_name(&path);
		PluginRef { path, name }
	}
}

/// Discover plugins across multiple directories.
///
/// Directories are scanned in the order given and their `*.so` regular files
/// are returned in listing order. Missing or unreadable directories contribute
/// nothing.
pub fn discover_plugins(dirs: &[PathBuf]) -> Vec<PluginRef> {
	let mut plugins = Vec::new();

	for dir in dirs {
		if !dir.exists() {
			debug!(dir = %dir.display(), "Plugin directory does not exist, skipping");
			continue;
		}

		let entries = match fs::read_dir(dir) {
			Ok(entries) => entries,
			Err(e) => {
				debug!(dir = %dir.display(), error = %e, "Cannot list plugin directory, skipping");
				continue;
			}
		};

		for entry in entries.flatten() {
			let path = entry.path();
			if !is_shared_object(&path) || !path.is_file() {
				continue;
			}

			let plugin = PluginRef::new(path);
			debug!(
				path = %plugin.path.display(),
				name = plugin.name.as_deref().unwrap_or("-"),
				"Discovered plugin"
			);
			plugins.push(plugin);
		}
	}

	plugins
}

/// Whether `path` looks like a visible `*.so` file.
fn is_shared_object(path: &Path) -> bool {
	let Some(file_name) = path.file_name() else {
		return false;
	};

	!file_name.as_encoded_bytes().starts_with(b".")
		&& path.extension().is_some_and(|ext| ext == "so")
}
