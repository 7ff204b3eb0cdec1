//! Client filename sanitization.
//!
//! Uploaded filenames come straight from the client and may carry path
//! separators, control characters, or nothing usable at all. Sanitization
//! reduces them to a safe flat name; uploads whose name reduces to nothing
//! are skipped by the handler.

/// Sanitizes a client-supplied filename.
///
/// Keeps only the final path component, joins whitespace-separated chunks
/// with `_`, drops everything outside `[A-Za-z0-9._-]`, and trims leading
/// and trailing dots. Returns `None` when nothing usable remains.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    // Strip any directory part, whichever separator the client used.
    let component = raw.rsplit(['/', '\\']).next().unwrap_or(raw);

    let joined = component.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
