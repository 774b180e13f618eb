//! Structured-data reindenter: colon/dash nesting heuristic.

use crate::constants::DATA_INDENT_UNIT;

/// Re-derives indentation for a whitespace-significant data format where
/// mapping keys end in `:` and sequence items start with `-`.
///
/// Blank and `#`-comment lines pass through untouched, original indentation
/// included. All other lines are re-emitted at the current nesting level
/// with their trailing content preserved verbatim.
///
/// The level only grows or holds; closing scopes are not detected, so a
/// structure that unindents back to an outer level is not repaired. Known
/// limitation of the heuristic.
pub fn reindent(content: &str) -> String {
    let mut level: usize = 0;
    let mut fixed = Vec::new();

    for line in content.split('\n') {
        let stripped = line.trim_start();
        if stripped.is_empty() || stripped.starts_with('#') {
            fixed.push(line.to_string());
            continue;
        }

        fixed.push(format!("{}{}", DATA_INDENT_UNIT.repeat(level), stripped));

        // A key line opens a scope; a sequence item stays on its level
        if stripped.ends_with(':') && !stripped.starts_with('-') {
            level += 1;
        }
    }

    fixed.join("\n")
}
