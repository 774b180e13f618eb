//! retab is an indentation repair tool for template trees.
//! It re-normalizes leading whitespace in template files for several target
//! formats using small per-syntax heuristics, without parsing the target
//! languages or the templating placeholders inside them.

/// Command-line interface module for the retab application
pub mod cli;

/// Configuration handling for retab
/// Supports JSON and YAML formats (retab.json, retab.yml, retab.yaml)
pub mod config;

/// Common constants: suffix tables, indent units, directory conventions
pub mod constants;

/// Error types and handling for the retab application
pub mod error;

/// Exclusion patterns applied during traversal
pub mod ignore;

/// Logger initialization
pub mod logger;

/// Tree traversal and per-file repair orchestration
/// Combines all components and aggregates the result counts
pub mod processor;

/// The indentation repair engine: per-syntax reindenters and dispatch
pub mod reindent;
