//! C-family reindenter for TypeScript, JavaScript, TSX and Java.

use crate::constants::CODE_INDENT_UNIT;

const OPENERS: [char; 3] = ['{', '(', '['];
const CLOSERS: [char; 3] = ['}', ')', ']'];

/// Re-derives indentation from `{}`, `()` and `[]` nesting.
///
/// Blank lines are normalized to genuinely empty lines. A line starting
/// with a closing delimiter closes its scope before being emitted; a line
/// ending with an opening delimiter opens one after, unless it is a `//`
/// comment. The level never goes below zero.
pub fn reindent(content: &str) -> String {
    let mut level: usize = 0;
    let mut fixed = Vec::new();

    for line in content.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            fixed.push(String::new());
            continue;
        }

        if trimmed.starts_with(CLOSERS) {
            level = level.saturating_sub(1);
        }

        fixed.push(format!("{}{}", CODE_INDENT_UNIT.repeat(level), trimmed));

        if trimmed.ends_with(OPENERS) && !trimmed.starts_with("//") {
            level += 1;
        }
    }

    fixed.join("\n")
}
