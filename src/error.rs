//! Error types for loading pages, configuration and reading progress.
//!
//! Section tracking itself never fails: missing regions and stale identifiers degrade to no-ops.
//! Everything that can fail happens before a page is mounted.

use crate::registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures surfaced while preparing pages for reading.
pub enum FolioError {
    /// I/O error while reading pages or progress files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed or failed validation.
    #[error("config error: {0}")]
    Config(String),

    /// A page could not be parsed into sections.
    #[error("parse error: {0}")]
    Parse(String),

    /// A page declared an invalid set of sections.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Reading progress JSON was malformed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
