//! Exclusion pattern handling for retab.
//! Compiles the built-in exclusions plus any configured patterns into a
//! glob set used to skip files during traversal.

use crate::constants::DEFAULT_IGNORE_PATTERNS;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Builds the set of glob patterns that exclude files from processing.
///
/// # Arguments
/// * `extra_patterns` - Additional patterns from the configuration file
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns for path matching
///
/// # Notes
/// - The built-in patterns (e.g. `*.py.hbs`) are always included
/// - Invalid patterns result in an `Error::IgnoreError`
pub fn build_ignore_set(extra_patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_IGNORE_PATTERNS
        .iter()
        .copied()
        .chain(extra_patterns.iter().map(String::as_str))
    {
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::IgnoreError(format!("invalid pattern '{}': {}", pattern, e))
        })?);
    }

    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!("pattern set failed to compile: {}", e)))
}
