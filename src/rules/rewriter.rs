use crate::error::{ColorfixError, Result};
use regex::Regex;
use std::borrow::Cow;

/// A single global find-and-replace.
#[derive(Debug)]
pub struct Substitution {
	/// The pattern to match.
	pub pattern: Regex,

	/// The replacement template. Captures are referenced as `${1}`, `${2}`...
	pub replacement: String,
}

impl Substitution {
	/// Compile a substitution from a regex and a replacement template.
	pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
		let pattern = Regex::new(pattern).map_err(|source| ColorfixError::InvalidRegex {
			pattern: pattern.to_string(),
			source,
		})?;

		Ok(Substitution {
			pattern,
			replacement: replacement.into(),
		})
	}

	/// Replace every non-overlapping match, scanning left to right.
	///
	/// Borrows the input when nothing matched.
	pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
		self.pattern.replace_all(input, self.replacement.as_str())
	}
}

/// Escape literal text for use inside a replacement template.
pub fn escape_replacement(text: &str) -> String {
	text.replace('$', "$$")
}
