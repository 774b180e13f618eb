//! Error handling for the retab application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for retab operations.
///
/// This enum represents all possible errors that can occur within the retab
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors in the configured ignore patterns
    #[error("Ignore pattern error: {0}.")]
    IgnoreError(String),

    /// Represents a failure while repairing a single template file.
    /// Callers downgrade this to a per-file failure count; it never aborts
    /// the batch.
    #[error("Failed to process '{path}': {message}.")]
    ProcessError { path: String, message: String },
}

/// Convenience type alias for Results with retab's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
