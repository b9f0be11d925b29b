//! Configuration loading and parsing for colorfix.
//!
//! This module handles:
//! - TOML config file parsing
//! - Built-in defaults for everything the file leaves out
//! - Locating the config file for a run

pub mod parser;
pub mod types;

pub use parser::{generate_init_template, parse_config_file, parse_config_str};
pub use types::{Config, DEFAULT_COLOR_VARS, DEFAULT_CONSTRUCTOR, DEFAULT_EXTENSION};

use crate::error::Result;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no config is given.
pub const CONFIG_FILE_NAME: &str = ".colorfix.toml";

/// Load the config for a run.
///
/// An explicit path must exist. Without one, `dir/.colorfix.toml` is used
/// if present, otherwise the built-in defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<(Config, Option<PathBuf>)> {
	if let Some(path) = explicit {
		return Ok((parse_config_file(path)?, Some(path.to_path_buf())));
	}

	let local = dir.join(CONFIG_FILE_NAME);
	if local.is_file() {
		let config = parse_config_file(&local)?;
		return Ok((config, Some(local)));
	}

	Ok((Config::default(), None))
}
