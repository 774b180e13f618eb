//! Command-line interface implementation for retab.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for retab.
#[derive(Parser, Debug)]
#[command(author, version, about = "retab: indentation repair tool for template trees", long_about = None)]
pub struct Args {
    /// Root directory containing the templates tree
    #[arg(value_name = "ROOT_DIR", default_value = ".")]
    pub root: PathBuf,

    /// Report files that would change without writing them back
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
