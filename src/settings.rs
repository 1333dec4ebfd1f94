//! Launch settings for epiclang.
//!
//! The marker file name, plugin directories and base compiler are bundled
//! into a [`Settings`] value and handed to the locator, the discoverer and the
//! runner, so tests can point them somewhere else.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Name of the per-project configuration file.
pub const DOTFILE_NAME: &str = ".epiclang";

/// Plugin directories, in priority order.
pub const PLUGIN_DIRS: [&str; 2] = ["/usr/lib/epiclang/plugins", "/usr/local/lib/epiclang/plugins"];

/// Compiler invoked with the assembled command line.
pub const BASE_COMMAND: &str = "clang";

/// Replaces [`BASE_COMMAND`] when set and non-empty.
pub const BASE_COMMAND_ENV: &str = "EPICLANG_BASE_COMMAND";

/// Replaces [`PLUGIN_DIRS`] when set. Uses the platform path-list separator;
/// relative entries are resolved against the working directory.
pub const PLUGIN_PATH_ENV: &str = "EPICLANG_PLUGIN_PATH";

/// Everything one invocation needs to know about its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	/// File name searched for from the working directory upward.
	pub dotfile_name: String,

	/// Directories scanned for `*.so` plugins, in priority order.
	pub plugin_dirs: Vec<PathBuf>,

	/// Program the assembled command line is handed to.
	pub base_command: String,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			dotfile_name: DOTFILE_NAME.to_string(),
			plugin_dirs: PLUGIN_DIRS.iter().map(PathBuf::from).collect(),
			base_command: BASE_COMMAND.to_string(),
		}
	}
}

impl Settings {
	/// Defaults, with the `EPICLANG_*` environment overrides applied.
	pub fn from_env(cwd: &Path) -> Self {
		Self::from_vars(
			std::env::var(BASE_COMMAND_ENV).ok(),
			std::env::var_os(PLUGIN_PATH_ENV),
			cwd,
		)
	}

	fn from_vars(base_command: Option<String>, plugin_path: Option<OsString>, cwd: &Path) -> Self {
		let mut settings = Settings::default();

		if let Some(command) = base_command.filter(|c| !c.is_empty()) {
			settings.base_command = command;
		}

		if let Some(path) = plugin_path {
			settings.plugin_dirs = if path.is_empty() {
				Vec::new()
			} else {
				std::env::split_paths(&path).map(|dir| cwd.join(dir)).collect()
			};
		}

		settings
	}
}
