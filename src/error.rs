use std::path::PathBuf;

/// Library-level structured errors for epiclang.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum EpiclangError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}: {source}")]
	ConfigSyntaxError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid config: `{key}` must be {expected}")]
	InvalidConfigShape { key: String, expected: &'static str },

	#[error("{command} not found in PATH")]
	ExecutableNotFound { command: String },

	#[error("Command execution failed: {command}")]
	CommandFailed {
		command: String,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using EpiclangError.
pub type Result<T> = std::result::Result<T, EpiclangError>;
