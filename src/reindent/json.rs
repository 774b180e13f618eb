//! Document reindenter: full JSON re-serialization.

use serde_json::Value;

/// Parses the whole input as JSON and re-serializes it with canonical
/// two-space indentation. Object key order and non-ASCII characters are
/// preserved as-is.
///
/// Returns `None` when the input does not parse; the caller keeps the
/// original content in that case.
pub fn reindent(content: &str) -> Option<String> {
    let value: Value = serde_json::from_str(content).ok()?;
    serde_json::to_string_pretty(&value).ok()
}
