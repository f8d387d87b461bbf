//! Page-scoped owner of all section-tracking state.
//!
//! A controller is built when a page is shown and dropped when the reader moves away. Nothing is
//! global: the registry, the laid-out document, the active section, the scroll position and the
//! visibility tracker all live here and die together.

use crate::active::ActiveSection;
use crate::config::Config;
use crate::document::{Document, Margin};
use crate::navigator::{NavigateOutcome, Navigator};
use crate::page::{layout, Page};
use crate::registry::{RegistryError, SectionRegistry};
use crate::scroll::ScrollState;
use crate::section::{Section, SectionId};
use crate::tracker::VisibilityTracker;
use crate::visibility::{GeometricObserver, VisibilityConfig};
use std::rc::Rc;

/// Live state for one mounted page.
pub struct PageController {
    page: Page,
    registry: Rc<SectionRegistry>,
    document: Document,
    active: ActiveSection,
    scroll: ScrollState,
    tracker: VisibilityTracker<GeometricObserver>,
    visibility: VisibilityConfig,
    width: usize,
    max_width: usize,
}

impl PageController {
    /// Lays out `page` for a `width` x `height` content pane and starts tracking.
    ///
    /// # Errors
    ///
    /// Fails when the page does not declare a valid registry.
    pub fn mount(
        page: Page,
        cfg: &Config,
        width: usize,
        height: usize,
    ) -> Result<Self, RegistryError> {
        let registry = Rc::new(page.registry()?);
        let default = Some(cfg.default_section.as_str())
            .filter(|s| !s.is_empty())
            .map(SectionId::from);
        let active = ActiveSection::initial(&registry, default.as_ref());

        let visibility = VisibilityConfig {
            root: None,
            margin: Margin {
                top: cfg.margin_top,
                bottom: cfg.margin_bottom,
            },
            threshold: cfg.threshold,
        };
        let max_width = cfg.wrap_width;
        let document = layout(&page, width.min(max_width));
        let mut scroll = ScrollState::new(cfg.smooth_scroll, cfg.scroll_padding);
        scroll.set_dimensions(document.height(), height);

        let mut tracker = VisibilityTracker::mount(
            &registry,
            &document,
            GeometricObserver::new(visibility),
        );
        if default.is_some() {
            tracker.prime(scroll.viewport());
        }

        tracing::debug!(title = %page.title, sections = registry.len(), "page mounted");
        Ok(Self {
            page,
            registry,
            document,
            active,
            scroll,
            tracker,
            visibility,
            width,
            max_width,
        })
    }

    /// Re-lays out the page for a new pane size and re-subscribes the tracker.
    ///
    /// The old watches are released before the new ones are taken.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == self.width && self.scroll.viewport().height == height {
            return;
        }
        if width != self.width {
            self.tracker.unmount();
            self.width = width;
            self.document = layout(&self.page, width.min(self.max_width));
            self.tracker = VisibilityTracker::mount(
                &self.registry,
                &self.document,
                GeometricObserver::new(self.visibility),
            );
            // Keep the reader on the section they were looking at.
            if let Some(region) = self.document.find_region(self.active.get()) {
                let top = region.top;
                self.scroll.set_dimensions(self.document.height(), height);
                self.scroll.jump_to(top);
                self.tracker.prime(self.scroll.viewport());
                return;
            }
        }
        self.scroll.set_dimensions(self.document.height(), height);
    }

    /// Advances any scroll animation, then feeds one visibility batch to the tracker.
    ///
    /// Returns whether the scroll position moved.
    pub fn tick(&mut self) -> bool {
        let moved = self.scroll.tick();
        self.tracker.process(self.scroll.viewport(), &mut self.active);
        moved
    }

    /// Jumps to a section by identifier.
    pub fn navigate(&mut self, id: &SectionId) -> NavigateOutcome {
        Navigator::navigate(id, &mut self.active, &self.document, &mut self.scroll)
    }

    /// Jumps to the section at a reading-order index, if there is one.
    pub fn navigate_index(&mut self, index: usize) -> Option<NavigateOutcome> {
        let id = self.registry.sections().get(index)?.id.clone();
        Some(self.navigate(&id))
    }

    /// Jumps to the section after the active one, wrapping around.
    pub fn next_section(&mut self) -> NavigateOutcome {
        Navigator::next(
            &self.registry,
            &mut self.active,
            &self.document,
            &mut self.scroll,
        )
    }

    /// Scrolls by `delta` lines as a direct user action.
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll.scroll_by(delta);
    }

    /// The footer's "back to top" control.
    pub fn back_to_top(&mut self) {
        self.scroll.scroll_to_top();
    }

    /// Restores a saved reading position without animation.
    pub fn restore(&mut self, active: Option<SectionId>, offset: usize) {
        self.scroll.jump_to(offset);
        if let Some(id) = active {
            self.active.set(id);
        }
        self.tracker.prime(self.scroll.viewport());
    }

    /// Releases the tracker's watches. Dropping the controller does the same.
    pub fn unmount(&mut self) {
        self.tracker.unmount();
    }

    #[must_use]
    /// The active section identifier.
    pub fn active(&self) -> &SectionId {
        self.active.get()
    }

    #[must_use]
    /// The section that "next" would go to.
    pub fn upcoming(&self) -> &Section {
        self.registry.next_after(self.active.get())
    }

    #[must_use]
    /// The page's registry.
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    #[must_use]
    /// The laid-out document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    /// The page data.
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    /// The scroll state.
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    #[must_use]
    /// The visibility tracker.
    pub fn tracker(&self) -> &VisibilityTracker<GeometricObserver> {
        &self.tracker
    }
}

#[cfg(test)]
#[path = "tests/controller.rs"]
mod tests;
