//! Command execution for epiclang.
//!
//! This module handles:
//! - Assembling the compiler command line from plugins and their settings
//! - Executing it with proper stdio handling
//! - Exit code propagation

use crate::config::PluginsConfig;
use crate::error::{EpiclangError, Result};
use crate::plugins::PluginRef;
use std::ffi::OsString;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// A fully assembled compiler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
	/// Program to run, resolved through `PATH`.
	pub program: String,

	/// Plugin flags followed by the passthrough arguments.
	pub args: Vec<OsString>,
}

impl CommandLine {
	/// The full argument vector, program first.
	pub fn argv(&self) -> Vec<OsString> {
		std::iter::once(OsString::from(&self.program))
			.chain(self.args.iter().cloned())
			.collect()
	}
}

/// Build the compiler command line.
///
/// Each plugin contributes `-fplugin=<path>`, followed by one
/// `-fplugin-arg-<name>-<key>=<value>` per configured setting when the plugin
/// has a name and a matching `plugins.<name>` table. Passthrough arguments come
/// last, unchanged.
pub fn build_command<I, S>(
	base_command: &str,
	plugins: &[PluginRef],
	config: &PluginsConfig,
	passthrough: I,
) -> CommandLine
where
	I: IntoIterator<Item = S>,
	S: Into<OsString>,
{
	let mut args = Vec::new();

	for plugin in plugins {
		let mut flag = OsString::from("-fplugin=");
		flag.push(&plugin.path);
		args.push(flag);

		let Some(name) = plugin.name.as_deref() else {
			continue;
		};
		if let Some(settings) = config.lookup(name) {
			for (key, value) in settings.iter() {
				args.push(OsString::from(format!("-fplugin-arg-{name}-{key}={value}")));
			}
		}
	}

	args.extend(passthrough.into_iter().map(Into::into));

	CommandLine {
		program: base_command.to_string(),
		args,
	}
}

/// Execute a command with proper stdio handling.
///
/// This function:
/// - Passes stdin, stdout, stderr through to the child process
/// - Returns the exit status of the child process
pub fn execute_command(command: &CommandLine) -> Result<ExitStatus> {
	debug!(argv = ?command.argv(), "Running compiler");

	let mut cmd = Command::new(&command.program);
	cmd.args(&command.args)
		.stdin(Stdio::inherit())
		.stdout(Stdio::inherit())
		.stderr(Stdio::inherit());

	cmd.status().map_err(|source| {
		if source.kind() == std::io::ErrorKind::NotFound {
			EpiclangError::ExecutableNotFound {
				command: command.program.clone(),
			}
		} else {
			EpiclangError::CommandFailed {
				command: command.program.clone(),
				source,
			}
		}
	})
}

/// Map a child's exit status to the wrapper's own exit code.
///
/// A child killed by a signal reports `128 + signal`, like a shell.
pub fn exit_code_of(status: ExitStatus) -> u8 {
	if let Some(code) = status.code() {
		return clamp_exit_code(code);
	}

	#[cfg(unix)]
	{
		use std::os::unix::process::ExitStatusExt;
		if let Some(signal) = status.signal() {
			return 128u8.wrapping_add(signal as u8);
		}
	}

	1
}

/// Codes that do not fit in a `u8` become 1 so a failure never reads as 0.
fn clamp_exit_code(code: i32) -> u8 {
	u8::try_from(code).unwrap_or(1)
}

/// Lossy rendering of an argument vector, for messages.
pub fn display_argv(argv: &[OsString]) -> String {
	argv.iter()
		.map(|a| a.to_string_lossy())
		.collect::<Vec<_>>()
		.join(" ")
}
