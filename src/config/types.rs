use crate::error::{ColorfixError, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Constructor the rewritten conversions call by default.
pub const DEFAULT_CONSTRUCTOR: &str = "iced::Color::from";

/// Extension scanned by default.
pub const DEFAULT_EXTENSION: &str = "rs";

/// Variables known to hold a color value, rewritten by name.
pub const DEFAULT_COLOR_VARS: [&str; 5] = [
	"background_color",
	"border_color",
	"text_color",
	"surface_color",
	"counter_color",
];

/// Configuration from a `.colorfix.toml` file, after defaults are applied.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
	/// Directory the scan starts from.
	pub root: PathBuf,

	/// File extension to match, without the leading dot.
	pub extension: String,

	/// Whether to descend into subdirectories of `root`.
	pub recursive: bool,

	/// Constructor path wrapped around converted expressions.
	pub constructor: String,

	/// Bare variable names whose `.into()` calls are rewritten.
	/// Order is the order the substitutions run in.
	pub color_vars: Vec<String>,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			root: PathBuf::from("."),
			extension: DEFAULT_EXTENSION.to_string(),
			recursive: true,
			constructor: DEFAULT_CONSTRUCTOR.to_string(),
			color_vars: DEFAULT_COLOR_VARS.iter().map(|s| s.to_string()).collect(),
		}
	}
}

impl Config {
	/// Build the glob pattern for the files this config selects.
	///
	/// The root is escaped so that metacharacters in directory names are
	/// matched literally.
	pub fn glob_pattern(&self) -> String {
		let root = glob::Pattern::escape(&self.root.to_string_lossy());
		let root = root.trim_end_matches('/');
		let root = if root.is_empty() { "/" } else { root };
		let sep = if root.ends_with('/') { "" } else { "/" };

		if self.recursive {
			format!("{root}{sep}**/*.{}", self.extension)
		} else {
			format!("{root}{sep}*.{}", self.extension)
		}
	}

	/// Validate field values that serde cannot check on its own.
	pub fn validate(&self) -> Result<()> {
		if self.extension.is_empty() {
			return Err(invalid("extension", "must not be empty"));
		}
		if self.extension.starts_with('.') {
			return Err(invalid("extension", "must not start with '.'"));
		}
		if self
			.extension
			.chars()
			.any(|c| matches!(c, '*' | '?' | '[' | ']' | '/' | '\\'))
		{
			return Err(invalid(
				"extension",
				"must not contain glob metacharacters or path separators",
			));
		}

		if self.constructor.trim().is_empty() {
			return Err(invalid("constructor", "must not be empty"));
		}

		for name in &self.color_vars {
			if !is_identifier(name) {
				return Err(invalid(
					"color-vars",
					&format!("'{name}' is not a valid identifier"),
				));
			}
		}

		Ok(())
	}
}

fn invalid(field: &str, reason: &str) -> ColorfixError {
	ColorfixError::InvalidConfig {
		field: field.to_string(),
		reason: reason.to_string(),
	}
}

fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() || c == '_' => {
			chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
		}
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config() {
		let config = Config::default();
		assert_eq!(config.root, PathBuf::from("."));
		assert_eq!(config.extension, "rs");
		assert!(config.recursive);
		assert_eq!(config.constructor, "iced::Color::from");
		assert_eq!(config.color_vars.len(), 5);
		assert_eq!(config.color_vars[0], "background_color");
		assert!(config.validate().is_ok());
	}

	#[test]
	fn test_glob_pattern_recursive() {
		let config = Config {
			root: PathBuf::from("/src/components"),
			..Default::default()
		};
		assert_eq!(config.glob_pattern(), "/src/components/**/*.rs");
	}

	#[test]
	fn test_glob_pattern_flat() {
		let config = Config {
			root: PathBuf::from("/src/components/"),
			recursive: false,
			..Default::default()
		};
		assert_eq!(config.glob_pattern(), "/src/components/*.rs");
	}

	#[test]
	fn test_glob_pattern_escapes_root() {
		let config = Config {
			root: PathBuf::from("/tmp/[weird]"),
			..Default::default()
		};
		assert_eq!(config.glob_pattern(), "/tmp/[[]weird[]]/**/*.rs");
	}

	#[test]
	fn test_glob_pattern_filesystem_root() {
		let config = Config {
			root: PathBuf::from("/"),
			recursive: false,
			..Default::default()
		};
		assert_eq!(config.glob_pattern(), "/*.rs");
	}

	#[test]
	fn test_validate_rejects_dotted_extension() {
		let config = Config {
			extension: ".rs".to_string(),
			..Default::default()
		};
		match config.validate().unwrap_err() {
			ColorfixError::InvalidConfig { field, .. } => assert_eq!(field, "extension"),
			_ => panic!("Expected InvalidConfig error"),
		}
	}

	#[test]
	fn test_validate_rejects_glob_extension() {
		let config = Config {
			extension: "r*".to_string(),
			..Default::default()
		};
		assert!(config.validate().is_err());
	}

	#[test]
	fn test_validate_rejects_bad_identifier() {
		let config = Config {
			color_vars: vec!["border_color".to_string(), "2fast".to_string()],
			..Default::default()
		};
		match config.validate().unwrap_err() {
			ColorfixError::InvalidConfig { field, reason } => {
				assert_eq!(field, "color-vars");
				assert!(reason.contains("2fast"));
			}
			_ => panic!("Expected InvalidConfig error"),
		}
	}

	#[test]
	fn test_validate_rejects_empty_constructor() {
		let config = Config {
			constructor: "  ".to_string(),
			..Default::default()
		};
		assert!(config.validate().is_err());
	}
}
