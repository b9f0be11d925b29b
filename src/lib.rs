//! Colorfix - CLI tool for rewriting color `.into()` conversions.
//!
//! This library provides the core functionality for colorfix, including:
//! - Configuration file parsing with built-in defaults
//! - The ordered rule set that rewrites `<expr>.into()` into `Color::from(<expr>)`
//! - Walking a directory tree and rewriting changed files in place
//!
//! # Example
//!
//! ```no_run
//! use colorfix_cli::config::Config;
//! use colorfix_cli::rules::RuleSet;
//! use colorfix_cli::walker::fix_files;
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     root: PathBuf::from("crates/gui/src/components"),
//!     ..Default::default()
//! };
//! let rules = RuleSet::from_config(&config).unwrap();
//!
//! let report = fix_files(&config, &rules, false, |path| {
//!     println!("Fixed color conversions in {}", path.display());
//! })
//! .unwrap();
//! println!("Modified {} files", report.modified.len());
//! ```

pub mod config;
pub mod error;
pub mod rules;
pub mod walker;

pub use error::{ColorfixError, Result};
