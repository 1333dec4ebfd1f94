use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use epiclang::config::load_plugins_config;
use epiclang::error::EpiclangError;
use epiclang::exec::{build_command, display_argv, execute_command, exit_code_of};
use epiclang::plugins::discover_plugins;
use epiclang::settings::Settings;

/// Environment variable holding the tracing filter, e.g. `EPICLANG_LOG=debug`.
const LOG_ENV: &str = "EPICLANG_LOG";

fn main() -> ExitCode {
	init_logging();

	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging() {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

fn run() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let settings = Settings::from_env(&cwd);

	let config = load_plugins_config(&cwd, &settings.dotfile_name)
		.with_context(|| format!("Failed to load {}", settings.dotfile_name))?;

	let plugins = discover_plugins(&settings.plugin_dirs);

	// Everything after argv[0] belongs to the compiler.
	let command = build_command(
		&settings.base_command,
		&plugins,
		&config,
		std::env::args_os().skip(1),
	);

	let status = match execute_command(&command) {
		Ok(status) => status,
		Err(EpiclangError::ExecutableNotFound { command }) => {
			eprintln!("Error: {command} not found in PATH");
			return Ok(ExitCode::FAILURE);
		}
		Err(e) => {
			return Err(e)
				.with_context(|| format!("Failed to execute: {}", display_argv(&command.argv())));
		}
	};

	Ok(ExitCode::from(exit_code_of(status)))
}
