//! Extension to category routing rules.
//!
//! The rule set maps lowercase file extensions (with leading dot) to
//! category folder names, with a configurable fallback bucket for anything
//! unmapped. Rules are loaded once at startup from a JSON file; load
//! failures silently fall back to the built-in table.

mod loader;
mod types;

pub use loader::{load_rules, load_rules_from_str};
pub use types::RuleSet;
