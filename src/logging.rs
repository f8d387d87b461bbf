//! Logging initialisation.
//!
//! The terminal belongs to the TUI, so logs only go to a file, and only when one is requested.
//! `FOLIO_LOG` overrides the verbosity-derived filter with any `EnvFilter` directive.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter directive.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Maps a verbosity level to a tracing directive string.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a file-backed subscriber when `log_file` is set.
///
/// Uses `try_init()`, so a second call is a no-op.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_logging(log_file: Option<&Path>, verbosity: u8) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(verbosity >= 2)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

#[cfg(test)]
#[path = "tests/logging.rs"]
mod tests;
