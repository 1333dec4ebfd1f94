use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, PluginsConfig};
use crate::error::{EpiclangError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find the nearest `dotfile_name` at or above `start_dir`.
///
/// Checks `start_dir` first, then each ancestor up to the filesystem root.
/// Only regular files (or symlinks to one) count as a match.
pub fn find_dotfile(start_dir: &Path, dotfile_name: &str) -> Option<PathBuf> {
	let mut current_dir = start_dir.to_path_buf();

	loop {
		let candidate = current_dir.join(dotfile_name);
		if candidate.is_file() {
			return Some(candidate);
		}

		// The root is its own parent on some platforms, so compare as well.
		match current_dir.parent() {
			Some(parent) if parent != current_dir => current_dir = parent.to_path_buf(),
			_ => return None,
		}
	}
}

/// Locate and load the nearest dotfile.
///
/// Returns `Ok(None)` when there is no dotfile, and also when it has a syntax
/// error: that case prints a warning to stderr and carries on as if the file
/// were absent. Shape and read errors are returned.
pub fn load_dotfile(start_dir: &Path, dotfile_name: &str) -> Result<Option<LoadedConfig>> {
	let Some(path) = find_dotfile(start_dir, dotfile_name) else {
		debug!(start = %start_dir.display(), "No dotfile found");
		return Ok(None);
	};

	debug!(path = %path.display(), "Found dotfile");

	match parse_config_file(&path) {
		Ok(config) => Ok(Some(LoadedConfig { config, path })),
		Err(EpiclangError::ConfigSyntaxError { source, .. }) => {
			eprintln!("Error while loading {dotfile_name}, ignoring it: {source}");
			Ok(None)
		}
		Err(e) => Err(e),
	}
}

/// Convenience function returning the effective plugin configuration.
///
/// A missing or ignored dotfile yields an empty configuration.
pub fn load_plugins_config(start_dir: &Path, dotfile_name: &str) -> Result<PluginsConfig> {
	Ok(load_dotfile(start_dir, dotfile_name)?
		.map(|loaded| loaded.config)
		.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	const NAME: &str = ".epiclang";

	#[test]
	fn test_find_in_start_dir() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join(NAME), "").unwrap();

		assert_eq!(find_dotfile(dir.path(), NAME), Some(dir.path().join(NAME)));
	}

	#[test]
	fn test_find_in_ancestor() {
		let dir = tempfile::tempdir().unwrap();
		let nested = dir.path().join("a").join("b").join("c");
		fs::create_dir_all(&nested).unwrap();
		fs::write(dir.path().join("a").join(NAME), "").unwrap();

		assert_eq!(
			find_dotfile(&nested, NAME),
			Some(dir.path().join("a").join(NAME))
		);
	}

	#[test]
	fn test_nearest_dotfile_wins() {
		let dir = tempfile::tempdir().unwrap();
		let nested = dir.path().join("a");
		fs::create_dir_all(&nested).unwrap();
		fs::write(dir.path().join(NAME), "").unwrap();
		fs::write(nested.join(NAME), "").unwrap();

		assert_eq!(find_dotfile(&nested, NAME), Some(nested.join(NAME)));
	}

	#[test]
	fn test_not_found_terminates_at_root() {
		let dir = tempfile::tempdir().unwrap();
		let name = ".epiclang-test-marker-that-does-not-exist";

		assert_eq!(find_dotfile(dir.path(), name), None);
		assert_eq!(find_dotfile(Path::new("/"), name), None);
	}

	#[test]
	fn test_directory_named_like_dotfile_is_skipped() {
		let dir = tempfile::tempdir().unwrap();
		let nested = dir.path().join("a");
		fs::create_dir_all(nested.join(NAME)).unwrap();
		fs::write(dir.path().join(NAME), "").unwrap();

		assert_eq!(find_dotfile(&nested, NAME), Some(dir.path().join(NAME)));
	}

	#[test]
	fn test_load_valid_dotfile() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join(NAME), "[plugins.x]\nopt = \"1\"\n").unwrap();

		let loaded = load_dotfile(dir.path(), NAME).unwrap().unwrap();
		assert_eq!(loaded.path, dir.path().join(NAME));
		assert_eq!(loaded.config.lookup("x").unwrap().get("opt"), Some("1"));
	}

	#[test]
	fn test_syntax_error_is_ignored() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join(NAME), "invalid toml [[[").unwrap();

		assert!(load_dotfile(dir.path(), NAME).unwrap().is_none());
		assert!(load_plugins_config(dir.path(), NAME).unwrap().is_empty());
	}

	#[test]
	fn test_shape_error_is_fatal() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join(NAME), "[plugins]\nx = 1\n").unwrap();

		match load_dotfile(dir.path(), NAME).unwrap_err() {
			EpiclangError::InvalidConfigShape { key, .. } => assert_eq!(key, "x"),
			other => panic!("Expected InvalidConfigShape error, got {other:?}"),
		}
	}
}
