//! retab's main application entry point and orchestration logic.
//! Handles command-line argument parsing and coordinates configuration
//! loading, traversal and the final report.

use retab::{
    cli::{get_args, Args},
    config::get_config,
    error::{default_error_handler, Result},
    ignore::build_ignore_set,
    logger::init_logger,
    processor::process_templates,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the optional configuration file from the root
/// 2. Compiles the exclusion pattern set
/// 3. Walks the templates tree, repairing files in place
/// 4. Prints the aggregate report
fn run(args: Args) -> Result<()> {
    println!("Fixing indentation for all templates...");
    println!();

    let config = get_config(&args.root)?;
    let ignored = build_ignore_set(&config.ignore)?;
    let stats = process_templates(&args.root, &config, &ignored, args.dry_run)?;

    println!();
    println!("Processed: {} files", stats.scanned);
    if args.dry_run {
        println!("Would fix: {} files", stats.fixed);
    } else {
        println!("Fixed: {} files", stats.fixed);
    }
    for (syntax, count) in &stats.fixed_by_syntax {
        println!("  {}: {}", syntax, count);
    }
    if stats.failed > 0 {
        println!("Failed: {} files", stats.failed);
    }
    Ok(())
}
