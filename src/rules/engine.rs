use crate::config::Config;
use crate::error::Result;
use crate::rules::rewriter::{Substitution, escape_replacement};
use std::borrow::Cow;

/// Identifier-like token captured from a scheme access path.
const NAME: &str = "([a-zA-Z_]+)";

/// Numeric literal captured from a `scale_alpha` argument.
const NUMBER: &str = "([0-9.]+)";

/// A named substitution in the rule set.
#[derive(Debug)]
pub struct Rule {
	/// Short label used in diagnostics.
	pub name: String,

	/// The substitution this rule performs.
	pub substitution: Substitution,
}

/// Result of running the rule set over one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
	/// The buffer after every rule has run.
	pub content: String,

	/// Whether `content` differs from the input.
	pub changed: bool,
}

/// The ordered conversion rules.
///
/// Each rule rewrites all of its matches before the next one runs, so a
/// later rule sees the output of every earlier rule. None of the built-in
/// templates produce `.into()`, which is why a later rule never re-matches
/// an earlier rule's output. That holds for these patterns only and is not
/// checked.
#[derive(Debug)]
pub struct RuleSet {
	rules: Vec<Rule>,
}

impl RuleSet {
	/// Build the rule set for a config's constructor and color variables.
	pub fn from_config(config: &Config) -> Result<Self> {
		let ctor = escape_replacement(&config.constructor);
		let mut rules = Vec::with_capacity(4 + config.color_vars.len());

		rules.push(rule(
			"self-scheme",
			&format!(r"self\.theme\.scheme\.{NAME}\.into\(\)"),
			format!("{ctor}(self.theme.scheme.${{1}})"),
		)?);
		rules.push(rule(
			"scheme",
			&format!(r"theme\.scheme\.{NAME}\.into\(\)"),
			format!("{ctor}(theme.scheme.${{1}})"),
		)?);
		rules.push(rule(
			"self-scheme-alpha",
			&format!(r"self\.theme\.scheme\.{NAME}\.scale_alpha\({NUMBER}\)\.into\(\)"),
			format!("{ctor}(self.theme.scheme.${{1}}.scale_alpha(${{2}}))"),
		)?);
		rules.push(rule(
			"scheme-alpha",
			&format!(r"theme\.scheme\.{NAME}\.scale_alpha\({NUMBER}\)\.into\(\)"),
			format!("{ctor}(theme.scheme.${{1}}.scale_alpha(${{2}}))"),
		)?);

		for var in &config.color_vars {
			rules.push(rule(
				var,
				&format!(r"{}\.into\(\)", regex::escape(var)),
				format!("{ctor}({})", escape_replacement(var)),
			)?);
		}

		Ok(RuleSet { rules })
	}

	/// The rules in the order they run.
	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	/// Run every rule over `input`, in order.
	pub fn apply(&self, input: &str) -> Rewrite {
		let mut content = Cow::Borrowed(input);

		for rule in &self.rules {
			let replaced = match rule.substitution.apply(&content) {
				Cow::Owned(next) => Some(next),
				Cow::Borrowed(_) => None,
			};
			if let Some(next) = replaced {
				tracing::trace!(rule = %rule.name, "rule matched");
				content = Cow::Owned(next);
			}
		}

		let changed = content != input;
		Rewrite {
			content: content.into_owned(),
			changed,
		}
	}
}

fn rule(name: &str, pattern: &str, replacement: String) -> Result<Rule> {
	Ok(Rule {
		name: name.to_string(),
		substitution: Substitution::new(pattern, replacement)?,
	})
}
