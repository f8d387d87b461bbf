//! User-driven jumps between sections.
//!
//! Navigation marks the target active straight away and then asks the scroll model to bring the
//! region into view. The two effects happen together from one user action. The visibility
//! tracker reconciles the active section with the geometry once the scroll settles.

use crate::active::ActiveSection;
use crate::document::Document;
use crate::registry::SectionRegistry;
use crate::scroll::ScrollState;
use crate::section::SectionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a navigation request did besides updating the active section.
pub enum NavigateOutcome {
    /// The target region exists and a scroll towards it was requested.
    Scrolled,
    /// No region for the target; the scroll was skipped.
    RegionMissing,
}

/// Moves the viewport to sections and records the user's intent in the active section.
pub struct Navigator;

impl Navigator {
    /// Marks `target` active, then scrolls its region into view if it exists.
    ///
    /// The active section is updated even when the region cannot be found, so the highlight can
    /// point at content that is not on screen until the user scrolls.
    pub fn navigate(
        target: &SectionId,
        active: &mut ActiveSection,
        document: &Document,
        scroll: &mut ScrollState,
    ) -> NavigateOutcome {
        active.set(target.clone());
        if let Some(region) = document.find_region(target) {
            scroll.scroll_into_view(region.top);
            tracing::debug!(section = %target, top = region.top, "navigating");
            NavigateOutcome::Scrolled
        } else {
            tracing::info!(section = %target, "navigation target has no region");
            NavigateOutcome::RegionMissing
        }
    }

    /// Navigates to the section after the active one, wrapping after the last.
    pub fn next(
        registry: &SectionRegistry,
        active: &mut ActiveSection,
        document: &Document,
        scroll: &mut ScrollState,
    ) -> NavigateOutcome {
        let target = registry.next_after(active.get()).id.clone();
        Self::navigate(&target, active, document, scroll)
    }
}

#[cfg(test)]
#[path = "tests/navigator.rs"]
mod tests;
