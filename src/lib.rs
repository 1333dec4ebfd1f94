//! Epiclang - compiler wrapper that loads epiclang plugins into clang.
//!
//! This library provides the core functionality for epiclang, including:
//! - `.epiclang` dotfile discovery and validation
//! - Plugin discovery in the well-known plugin directories
//! - Command line assembly and execution with proper stdio handling
//!
//! # Example
//!
//! ```no_run
//! use epiclang::config::load_plugins_config;
//! use epiclang::exec::{build_command, execute_command};
//! use epiclang::plugins::discover_plugins;
//! use epiclang::settings::Settings;
//!
//! let settings = Settings::default();
//! let cwd = std::env::current_dir().unwrap();
//! let config = load_plugins_config(&cwd, &settings.dotfile_name).unwrap();
//! let plugins = discover_plugins(&settings.plugin_dirs);
//!
//! let command = build_command(&settings.base_command, &plugins, &config, ["-c", "main.c"]);
//! let status = execute_command(&command).unwrap();
//! println!("clang exited with {status}");
//! ```

pub mod config;
pub mod error;
pub mod exec;
pub mod plugins;
pub mod settings;

pub use error::{EpiclangError, Result};
