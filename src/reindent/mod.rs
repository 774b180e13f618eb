//! Indentation repair engine.
//! Selects one of four per-syntax heuristics by filename convention and
//! applies it to a file's content. Each heuristic re-derives indentation
//! from structural cues instead of trusting the original whitespace.

pub mod cfamily;
pub mod hcl;
pub mod json;
pub mod yaml;

use crate::constants::{
    CFAMILY_SUFFIXES, HCL_SUFFIXES, JSON_SUFFIXES, MIN_CONTENT_LEN, YAML_SUFFIXES,
};
use std::path::Path;

/// Target syntax of a template file, selected by its compound suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// Whitespace-significant data format (colon/dash nesting)
    Yaml,
    /// Brace-delimited configuration language
    Hcl,
    /// Tree-structured document, round-tripped through a real parser
    Json,
    /// Brace/paren/bracket-delimited code
    CFamily,
}

impl Syntax {
    /// Selects the syntax for a path by its filename suffix, first match
    /// wins. Returns `None` for filenames retab does not handle.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if YAML_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            Some(Self::Yaml)
        } else if HCL_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            Some(Self::Hcl)
        } else if JSON_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            Some(Self::Json)
        } else if CFAMILY_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            Some(Self::CFamily)
        } else {
            None
        }
    }

    /// Short name used in the per-syntax report breakdown.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Hcl => "hcl",
            Self::Json => "json",
            Self::CFamily => "c-family",
        }
    }

    fn apply(&self, content: &str) -> Option<String> {
        match self {
            Self::Yaml => Some(yaml::reindent(content)),
            Self::Hcl => Some(hcl::reindent(content)),
            Self::Json => json::reindent(content),
            Self::CFamily => Some(cfamily::reindent(content)),
        }
    }
}

/// Outcome of repairing one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reindent {
    /// Content was rewritten; carries the new text and its syntax
    Fixed(Syntax, String),
    /// Handled, but the output was already byte-identical to the input
    Unchanged,
    /// Parsing failed and the content was kept verbatim (Json only)
    Fallback,
    /// Trimmed content was too short to be worth processing
    Trivial,
    /// Filename matches no known compound suffix
    Unsupported,
}

/// Repairs the indentation of one file's content.
///
/// # Arguments
/// * `path` - Path of the file, used only for syntax selection
/// * `content` - Full current content of the file
///
/// # Returns
/// * `Reindent` - What happened; `Fixed` carries the rewritten text
pub fn reindent(path: &Path, content: &str) -> Reindent {
    if content.trim().chars().count() < MIN_CONTENT_LEN {
        return Reindent::Trivial;
    }

    let Some(syntax) = Syntax::from_path(path) else {
        return Reindent::Unsupported;
    };

    match syntax.apply(content) {
        None => Reindent::Fallback,
        Some(rewritten) if rewritten == content => Reindent::Unchanged,
        Some(rewritten) => Reindent::Fixed(syntax, rewritten),
    }
}
