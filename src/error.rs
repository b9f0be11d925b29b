use std::path::PathBuf;

/// Library-level structured errors for colorfix.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum ColorfixError {
	#[error("Failed to access file: {path}")]
	FileAccess {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("File is not valid UTF-8: {path}")]
	Encoding {
		path: PathBuf,
		#[source]
		source: std::string::FromUtf8Error,
	},

	#[error("Invalid glob pattern: {pattern}")]
	InvalidGlob {
		pattern: String,
		#[source]
		source: glob::PatternError,
	},

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid config value for {field}: {reason}")]
	InvalidConfig { field: String, reason: String },

	#[error("Root directory not found: {path}")]
	RootNotFound { path: PathBuf },
}

/// Result type alias using ColorfixError.
pub type Result<T> = std::result::Result<T, ColorfixError>;
