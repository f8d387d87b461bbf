//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! Specifically, we try to find a folio.toml, and if present we load settings from there. This
//! covers layout width, page discovery, visibility tracking and scrolling behaviour.

use crate::error::FolioError;
use facet::Facet;
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from folio.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 100)]
    /// Maximum line width for content wrapping.
    pub wrap_width: usize,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = 0.3)]
    /// Share of a section that must be visible for it to become active.
    pub threshold: f32,
    #[facet(default = 0)]
    /// Lines added above the visible area before intersection testing (negative shrinks).
    pub margin_top: i32,
    #[facet(default = 0)]
    /// Lines added below the visible area before intersection testing (negative shrinks).
    pub margin_bottom: i32,
    #[facet(default = 1)]
    /// Lines kept above a section heading after jumping to it.
    pub scroll_padding: usize,
    #[facet(default = true)]
    /// Animate jumps instead of moving instantly.
    pub smooth_scroll: bool,
    #[facet(default = 16)]
    /// Event loop tick in milliseconds.
    pub tick_ms: u64,
    #[facet(default = 80)]
    /// Terminal width below which the table of contents collapses into a "next" control.
    pub narrow_width: u16,
    #[facet(default = String::new())]
    /// Section made active when a page opens; empty means the first section.
    pub default_section: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap_width: 100,
            file_extensions: vec!["md".to_string()],
            threshold: 0.3,
            margin_top: 0,
            margin_bottom: 0,
            scroll_padding: 1,
            smooth_scroll: true,
            tick_ms: 16,
            narrow_width: 80,
            default_section: String::new(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from folio.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults when missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match Self::parse(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config");
                Self::default()
            }
        }
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] when the text is not valid configuration.
    pub fn parse(contents: &str) -> Result<Self, FolioError> {
        let config = facet_toml::from_str::<Self>(contents)
            .map_err(|e| FolioError::Config(e.to_string()))?;
        if !(0.0..=1.0).contains(&config.threshold) {
            return Err(FolioError::Config(format!(
                "threshold must be between 0 and 1, got {}",
                config.threshold
            )));
        }
        Ok(config)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
