//! File walking for colorfix.
//!
//! This module handles:
//! - Resolving the configured glob against the root directory
//! - Reading each file, running the rule set, and writing back changes
//!
//! Files are processed one at a time. The first read, decode, or write
//! failure aborts the walk; files already rewritten stay rewritten.

use crate::config::Config;
use crate::error::{ColorfixError, Result};
use crate::rules::RuleSet;
use std::path::{Path, PathBuf};

/// Summary of a completed walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
	/// Number of files the glob resolved to.
	pub scanned: usize,

	/// Files whose content changed, in processing order.
	pub modified: Vec<PathBuf>,
}

/// Resolve the files a config selects.
///
/// Only regular files are returned; directories whose names happen to match
/// the extension are skipped. Wildcards never match a leading dot, so hidden
/// files and hidden directories below the root are left out.
pub fn resolve_files(config: &Config) -> Result<Vec<PathBuf>> {
	if !config.root.is_dir() {
		return Err(ColorfixError::RootNotFound {
			path: config.root.clone(),
		});
	}

	let pattern = config.glob_pattern();
	tracing::info!(%pattern, "resolving files");

	let options = glob::MatchOptions {
		require_literal_leading_dot: true,
		..Default::default()
	};
	let entries =
		glob::glob_with(&pattern, options).map_err(|source| ColorfixError::InvalidGlob {
			pattern: pattern.clone(),
			source,
		})?;

	let mut files = Vec::new();
	for entry in entries {
		let path = entry.map_err(|e| ColorfixError::FileAccess {
			path: e.path().to_path_buf(),
			source: e.into_error(),
		})?;
		if path.is_file() {
			files.push(path);
		}
	}

	if files.is_empty() {
		tracing::warn!(%pattern, "no files matched");
	}

	Ok(files)
}

/// Rewrite a single file in place.
///
/// Returns whether the rules changed its content. An unchanged file is never
/// opened for writing. With `dry_run` the change is reported but not written.
pub fn fix_file(path: &Path, rules: &RuleSet, dry_run: bool) -> Result<bool> {
	let original = read_text(path)?;
	let rewrite = rules.apply(&original);

	if !rewrite.changed {
		tracing::debug!(path = %path.display(), "unchanged");
		return Ok(false);
	}

	if !dry_run {
		std::fs::write(path, rewrite.content).map_err(|source| ColorfixError::FileAccess {
			path: path.to_path_buf(),
			source,
		})?;
	}
	tracing::debug!(path = %path.display(), dry_run, "rewritten");

	Ok(true)
}

/// Rewrite every file the config selects.
///
/// `on_fixed` is called for each modified file right after it is written, so
/// progress output survives a later failure.
pub fn fix_files<F>(
	config: &Config,
	rules: &RuleSet,
	dry_run: bool,
	mut on_fixed: F,
) -> Result<WalkReport>
where
	F: FnMut(&Path),
{
	let files = resolve_files(config)?;
	let mut report = WalkReport {
		scanned: files.len(),
		modified: Vec::new(),
	};

	for path in files {
		if fix_file(&path, rules, dry_run)? {
			on_fixed(&path);
			report.modified.push(path);
		}
	}

	Ok(report)
}

/// Read a file as UTF-8 text.
fn read_text(path: &Path) -> Result<String> {
	let bytes = std::fs::read(path).map_err(|source| ColorfixError::FileAccess {
		path: path.to_path_buf(),
		source,
	})?;

	String::from_utf8(bytes).map_err(|source| ColorfixError::Encoding {
		path: path.to_path_buf(),
		source,
	})
}
