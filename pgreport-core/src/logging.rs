//! Logging setup for the pgreport binary.
//!
//! Logs are written to stderr so they never interleave with the report on
//! stdout.

use crate::Result;
use crate::error::PgReportError;

fn level_for(verbose: u8, quiet: bool) -> tracing::Level {
    match (quiet, verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::INFO,
        (false, 1) => tracing::Level::DEBUG,
        (false, _) => tracing::Level::TRACE,
    }
}

/// Initializes structured logging based on verbosity level.
///
/// # Arguments
/// * `verbose` - Verbosity level (0=INFO, 1=DEBUG, 2+=TRACE)
/// * `quiet` - If true, only show ERROR level logs
///
/// # Errors
/// Returns `PgReportError::Configuration` if a global subscriber is already
/// installed.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbose, quiet))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| {
            PgReportError::configuration(format!("Failed to initialize logging: {}", e))
        })?;

    Ok(())
}
