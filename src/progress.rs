//! Reading progress captured at the end of a session.
//!
//! On exit the reader prints where it left each page as JSON, and `--resume` feeds that JSON
//! back in to reopen pages at the same section and offset.

use crate::error::FolioError;
use crate::section::SectionId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Serialisable positions for every page visited in a session.
pub struct ReadingProgress {
    /// One entry per visited page.
    pub pages: Vec<PageProgress>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Where the reader was on a single page.
pub struct PageProgress {
    /// Page file path as given on the command line or discovered.
    pub path: String,
    /// Section highlighted when the page was left.
    pub active_section: SectionId,
    /// First visible line when the page was left.
    pub scroll_offset: usize,
}

impl ReadingProgress {
    /// Reads progress JSON from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid progress JSON.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    #[must_use]
    /// Saved position for a page path.
    pub fn find(&self, path: &str) -> Option<&PageProgress> {
        self.pages.iter().find(|p| p.path == path)
    }

    /// Records a position, replacing any earlier entry for the same page.
    pub fn record(&mut self, entry: PageProgress) {
        if let Some(existing) = self.pages.iter_mut().find(|p| p.path == entry.path) {
            *existing = entry;
        } else {
            self.pages.push(entry);
        }
    }
}

#[cfg(test)]
#[path = "tests/progress.rs"]
mod tests;
