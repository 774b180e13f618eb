use globset::GlobSet;
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::config::Config;
use crate::constants::TEMPLATE_SUFFIX;
use crate::error::{Error, Result};
use crate::reindent::{reindent, Reindent};

/// Aggregate counters for one traversal. Threaded through the walk as an
/// explicit value; there is no process-wide state.
#[derive(Debug, Default)]
pub struct Stats {
    /// Candidate files considered, including unsupported types
    pub scanned: usize,
    /// Files whose bytes actually changed
    pub fixed: usize,
    /// Files that raised an I/O error and were left in their prior state
    pub failed: usize,
    /// Fixed-file counts keyed by syntax label, in first-seen order
    pub fixed_by_syntax: IndexMap<&'static str, usize>,
}

/// Repairs one template file in place.
///
/// Reads the file, applies the matching reindenter and, when the content
/// changed, writes it back (unless `dry_run`). Errors are wrapped in
/// `Error::ProcessError` so the caller can log them with the path attached.
pub fn process_file(path: &Path, dry_run: bool) -> Result<Reindent> {
    let content = fs::read_to_string(path).map_err(|e| Error::ProcessError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let outcome = reindent(path, &content);

    if let Reindent::Fixed(_, new_content) = &outcome {
        if !dry_run {
            fs::write(path, new_content).map_err(|e| Error::ProcessError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        }
    }

    Ok(outcome)
}

/// Walks the templates tree and repairs every candidate file.
///
/// Candidates live under `<root>/<templates_dir>/*/<variant_dir>/` at any
/// depth and carry the template suffix. Files matching the ignore set are
/// skipped before counting. A failure on one file is logged and counted,
/// never aborts the batch.
pub fn process_templates(
    root: &Path,
    config: &Config,
    ignored: &GlobSet,
    dry_run: bool,
) -> Result<Stats> {
    let templates_root = root.join(&config.templates_dir);
    if !templates_root.is_dir() {
        return Err(Error::ConfigError(format!(
            "templates directory '{}' does not exist",
            templates_root.display()
        )));
    }

    let mut stats = Stats::default();

    for entry in fs::read_dir(&templates_root).map_err(Error::IoError)? {
        let entry = entry.map_err(Error::IoError)?;
        let variant_dir = entry.path().join(&config.variant_dir);
        if !variant_dir.is_dir() {
            continue;
        }
        debug!("Scanning {}", variant_dir.display());

        for file_entry in WalkDir::new(&variant_dir) {
            let file_entry = match file_entry {
                Ok(file_entry) => file_entry,
                Err(e) => {
                    log::error!("Walk error under '{}': {}", variant_dir.display(), e);
                    continue;
                }
            };
            if !file_entry.file_type().is_file() {
                continue;
            }
            let path = file_entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.ends_with(TEMPLATE_SUFFIX) {
                continue;
            }

            let relative_path = path.strip_prefix(&templates_root).unwrap_or(path);
            if ignored.is_match(relative_path) {
                debug!("Skipping excluded file {}", path.display());
                continue;
            }

            stats.scanned += 1;
            match process_file(path, dry_run) {
                Ok(Reindent::Fixed(syntax, _)) => {
                    stats.fixed += 1;
                    *stats.fixed_by_syntax.entry(syntax.label()).or_insert(0) += 1;
                    println!("✓ {}", path.display());
                }
                Ok(Reindent::Unchanged) => debug!("Already clean: {}", path.display()),
                Ok(Reindent::Fallback) => {
                    debug!("Could not parse, left as-is: {}", path.display())
                }
                Ok(Reindent::Trivial) => debug!("Skipping trivial file {}", path.display()),
                Ok(Reindent::Unsupported) => debug!("No reindenter for {}", path.display()),
                Err(e) => {
                    log::error!("{}", e);
                    stats.failed += 1;
                }
            }
        }
    }

    Ok(stats)
}
