use crate::config::types::Config;
use crate::error::{ColorfixError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content =
		std::fs::read_to_string(path).map_err(|source| ColorfixError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config =
		toml::from_str(content).map_err(|source| ColorfixError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	// Validate the parsed config
	config.validate()?;

	Ok(config)
}

/// Render the template written by `colorfix --init`.
pub fn generate_init_template() -> String {
	let defaults = Config::default();
	let vars = defaults
		.color_vars
		.iter()
		.map(|v| format!("\t\"{v}\","))
		.collect::<Vec<_>>()
		.join("\n");

	format!(
		r#"# colorfix configuration
# Every key is optional; the values below are the built-in defaults.

# Directory to scan, relative to where colorfix runs.
root = "."

# Extension of the files to rewrite (no leading dot).
extension = "{ext}"

# Descend into subdirectories of root.
recursive = true

# Constructor wrapped around converted expressions.
constructor = "{ctor}"

# Bare variables whose `.into()` conversions are rewritten.
color-vars = [
{vars}
]
"#,
		ext = defaults.extension,
		ctor = defaults.constructor,
	)
}
