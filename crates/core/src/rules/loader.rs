use std::path::Path;
use tracing::warn;

use super::types::RuleSet;

/// Load the routing rules from a JSON file.
///
/// The rules file is optional: a missing file, an unreadable file, or
/// malformed JSON all fall back to the built-in default table. The caller
/// never sees an error, only a warning in the logs.
pub fn load_rules(path: &Path) -> RuleSet {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No rules file at {}, using built-in table", path.display());
            return RuleSet::default();
        }
        Err(e) => {
            warn!("Failed to read rules file {}: {}", path.display(), e);
            return RuleSet::default();
        }
    };

    load_rules_from_str(&raw)
}

/// Parse routing rules from a JSON string, falling back to the built-in
/// table on malformed input (useful for testing).
pub fn load_rules_from_str(raw: &str) -> RuleSet {
    match serde_json::from_str::<RuleSet>(raw) {
        Ok(rules) => rules.normalized(),
        Err(e) => {
            warn!("Malformed rules file, using built-in table: {}", e);
            RuleSet::default()
        }
    }
}
