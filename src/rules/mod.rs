//! Conversion rules for colorfix.
//!
//! This module handles:
//! - Compiling regex substitutions
//! - Running the ordered rule set over a whole-file buffer

pub mod engine;
pub mod rewriter;

pub use engine::{Rewrite, Rule, RuleSet};
pub use rewriter::{Substitution, escape_replacement};
