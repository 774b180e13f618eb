//! Brace-block reindenter for HCL-style configuration.

use crate::constants::DATA_INDENT_UNIT;

/// Re-derives indentation from `{`/`}` nesting.
///
/// Blank and `#`-comment lines pass through untouched. A line starting with
/// `}` closes its scope before being emitted; a line ending with `{` opens
/// one after. Both checks are independent, so a `} else {` style line fires
/// both. The level never goes below zero.
pub fn reindent(content: &str) -> String {
    let mut level: usize = 0;
    let mut fixed = Vec::new();

    for line in content.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            fixed.push(line.to_string());
            continue;
        }

        if trimmed.starts_with('}') {
            level = level.saturating_sub(1);
        }

        fixed.push(format!("{}{}", DATA_INDENT_UNIT.repeat(level), trimmed));

        if trimmed.ends_with('{') {
            level += 1;
        }
    }

    fixed.join("\n")
}
