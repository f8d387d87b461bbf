//! The session state bridging loaded pages and the mounted page controller.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the reader moves
//! around. Only one page is mounted at a time: switching pages unmounts the current controller
//! (releasing its visibility watches), remembers where the reader was, and mounts the next one.

use crate::config::Config;
use crate::controller::PageController;
use crate::navigator::NavigateOutcome;
use crate::page::Page;
use crate::progress::{PageProgress, ReadingProgress};
use crate::registry::RegistryError;
use crate::section::SectionId;
use std::path::PathBuf;

#[derive(PartialEq, Eq, Debug)]
/// Determines whether page switching is offered.
pub enum FileMode {
    /// One page: `[`/`]` do nothing.
    Single,
    /// Several pages: `[`/`]` move between them.
    Multi,
}

/// Reader session: the loaded pages, the mounted one, and table-of-contents focus.
pub struct AppState {
    /// Source paths, aligned with `pages`.
    pub files: Vec<PathBuf>,
    /// Parsed pages.
    pub pages: Vec<Page>,
    /// Index of the mounted page.
    pub current_page_index: usize,
    /// Controls whether page switching is available.
    pub file_mode: FileMode,
    /// Table-of-contents entry under the keyboard cursor.
    pub toc_cursor: usize,
    /// Status feedback displayed in the footer.
    pub message: Option<String>,
    /// Positions of pages visited this session (and any resumed ones).
    pub progress: ReadingProgress,
    controller: PageController,
    cfg: Config,
    pane: (usize, usize),
}

impl AppState {
    /// Mounts the first page into a `pane` of content columns and rows.
    ///
    /// # Errors
    ///
    /// Fails when the first page declares an invalid registry, or when there are no pages.
    pub fn new(
        files: Vec<PathBuf>,
        pages: Vec<Page>,
        cfg: Config,
        pane: (usize, usize),
    ) -> Result<Self, RegistryError> {
        let first = pages.first().cloned().ok_or(RegistryError::Empty)?;
        let controller = PageController::mount(first, &cfg, pane.0, pane.1)?;
        let file_mode = if pages.len() == 1 {
            FileMode::Single
        } else {
            FileMode::Multi
        };

        Ok(Self {
            files,
            pages,
            current_page_index: 0,
            file_mode,
            toc_cursor: 0,
            message: None,
            progress: ReadingProgress::default(),
            controller,
            cfg,
            pane,
        })
    }

    #[must_use]
    /// The mounted page controller.
    pub fn controller(&self) -> &PageController {
        &self.controller
    }

    #[must_use]
    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    fn current_path(&self) -> String {
        self.files
            .get(self.current_page_index)
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }

    /// Restores positions from an earlier session and applies the one for the mounted page.
    pub fn resume(&mut self, progress: ReadingProgress) {
        self.progress = progress;
        self.restore_current();
    }

    fn restore_current(&mut self) {
        if let Some(saved) = self.progress.find(&self.current_path()) {
            let active = saved.active_section.clone();
            let offset = saved.scroll_offset;
            self.controller.restore(Some(active), offset);
        }
        self.sync_cursor();
    }

    fn remember_current(&mut self) {
        let entry = PageProgress {
            path: self.current_path(),
            active_section: self.controller.active().clone(),
            scroll_offset: self.controller.scroll().offset(),
        };
        self.progress.record(entry);
    }

    #[must_use]
    /// Progress for every visited page, including the mounted one as it stands now.
    pub fn reading_progress(&self) -> ReadingProgress {
        let mut progress = self.progress.clone();
        progress.record(PageProgress {
            path: self.current_path(),
            active_section: self.controller.active().clone(),
            scroll_offset: self.controller.scroll().offset(),
        });
        progress
    }

    /// Unmounts the current page and mounts the page at `index`.
    pub fn open_page(&mut self, index: usize) {
        if index == self.current_page_index || index >= self.pages.len() {
            return;
        }
        self.remember_current();
        self.controller.unmount();

        match PageController::mount(self.pages[index].clone(), &self.cfg, self.pane.0, self.pane.1)
        {
            Ok(controller) => {
                self.controller = controller;
                self.current_page_index = index;
                self.toc_cursor = 0;
                self.message = None;
                self.restore_current();
            }
            Err(e) => {
                tracing::warn!(page = index, error = %e, "cannot mount page");
                self.message = Some(format!("Cannot open page: {e}"));
                // Keep reading the current page with fresh watches.
                if let Ok(controller) = PageController::mount(
                    self.pages[self.current_page_index].clone(),
                    &self.cfg,
                    self.pane.0,
                    self.pane.1,
                ) {
                    self.controller = controller;
                    self.restore_current();
                }
            }
        }
    }

    /// Moves to the following page, if any.
    pub fn next_page(&mut self) {
        if self.file_mode == FileMode::Multi && self.current_page_index + 1 < self.pages.len() {
            self.open_page(self.current_page_index + 1);
        }
    }

    /// Moves to the preceding page, if any.
    pub fn prev_page(&mut self) {
        if self.file_mode == FileMode::Multi && self.current_page_index > 0 {
            self.open_page(self.current_page_index - 1);
        }
    }

    /// Applies a new content pane size.
    pub fn resize(&mut self, pane: (usize, usize)) {
        self.pane = pane;
        self.controller.resize(pane.0, pane.1);
    }

    /// Advances scrolling and visibility tracking by one tick.
    pub fn tick(&mut self) -> bool {
        self.controller.tick()
    }

    /// Scrolls the content by `delta` lines.
    pub fn scroll_by(&mut self, delta: isize) {
        self.controller.scroll_by(delta);
    }

    /// Scrolls by a page of content.
    pub fn page_by(&mut self, pages: isize) {
        let rows = isize::try_from(self.pane.1.saturating_sub(2).max(1)).unwrap_or(1);
        self.controller.scroll_by(rows * pages);
    }

    /// Footer "back to top" control.
    pub fn back_to_top(&mut self) {
        self.controller.back_to_top();
    }

    /// Moves the table-of-contents cursor down, wrapping.
    pub fn toc_down(&mut self) {
        let len = self.controller.registry().len();
        self.toc_cursor = (self.toc_cursor + 1) % len;
    }

    /// Moves the table-of-contents cursor up, wrapping.
    pub fn toc_up(&mut self) {
        let len = self.controller.registry().len();
        self.toc_cursor = (self.toc_cursor + len - 1) % len;
    }

    /// Navigates to the section under the table-of-contents cursor.
    pub fn open_cursor(&mut self) {
        self.jump_to(self.toc_cursor);
    }

    /// Navigates to the section at a reading-order index.
    pub fn jump_to(&mut self, index: usize) {
        match self.controller.navigate_index(index) {
            Some(NavigateOutcome::RegionMissing) => {
                self.message = Some("Section is not on this page".to_string());
            }
            Some(NavigateOutcome::Scrolled) => self.message = None,
            None => {}
        }
        self.sync_cursor();
    }

    /// Navigates to a section by identifier.
    pub fn navigate(&mut self, id: &SectionId) {
        if self.controller.navigate(id) == NavigateOutcome::RegionMissing {
            self.message = Some(format!("No section '{id}' on this page"));
        }
        self.sync_cursor();
    }

    /// The "next section" control.
    pub fn next_section(&mut self) {
        self.controller.next_section();
        self.message = None;
        self.sync_cursor();
    }

    /// Puts the table-of-contents cursor on the active section.
    pub fn sync_cursor(&mut self) {
        if let Some(index) = self.controller.registry().position(self.controller.active()) {
            self.toc_cursor = index;
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
