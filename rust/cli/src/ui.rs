//! UI helper functions for terminal output formatting.
//!
//! Errors and warnings go to the error stream with a fixed prefix so that
//! scripts can grep for them.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Warn that a requested ante was adjusted to an allowed amount
pub fn warn_ante_adjusted(err: &mut dyn Write, requested: u32, applied: u32) -> std::io::Result<()> {
    display_warning(
        err,
        &format!(
            "Requested ante {} is not available; using {} instead.",
            requested, applied
        ),
    )
}
