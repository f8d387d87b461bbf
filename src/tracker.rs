//! Keeps the active section in step with what is on screen.
//!
//! On mount every registered section's region is looked up in the document and handed to the
//! observer. Each batch of crossings then promotes newly intersecting sections to active, in
//! delivery order, so when several cross in one batch the last one wins. Watches are released
//! exactly once, either through [`VisibilityTracker::unmount`] or on drop.

use crate::active::ActiveSection;
use crate::document::{Document, Region, Viewport};
use crate::registry::SectionRegistry;
use crate::section::SectionId;
use crate::visibility::{VisibilityEntry, VisibilityObserver};

/// Watches a page's regions and writes crossings into the active section.
pub struct VisibilityTracker<O: VisibilityObserver> {
    observer: O,
    // Non-owning copies; the document owns the regions themselves.
    watched: Vec<(SectionId, Region)>,
    mounted: bool,
}

impl<O: VisibilityObserver> VisibilityTracker<O> {
    /// Registers every section whose region exists in `document`.
    ///
    /// Sections without a region are skipped; they can only become active through navigation.
    pub fn mount(registry: &SectionRegistry, document: &Document, mut observer: O) -> Self {
        let mut watched = Vec::with_capacity(registry.len());
        for section in registry.sections() {
            if let Some(region) = document.find_region(&section.id) {
                observer.observe(&section.id, region.clone());
                watched.push((section.id.clone(), region.clone()));
            } else {
                tracing::debug!(section = %section.id, "no region in document, not tracked");
            }
        }
        tracing::debug!(
            watched = watched.len(),
            declared = registry.len(),
            "visibility tracker mounted"
        );
        Self {
            observer,
            watched,
            mounted: true,
        }
    }

    /// Pulls one batch from the observer and applies it.
    pub fn process(&mut self, viewport: Viewport, active: &mut ActiveSection) {
        if !self.mounted {
            return;
        }
        let batch = self.observer.take_records(viewport);
        Self::process_batch(&batch, active);
    }

    /// Takes the observer's pending batch for `viewport` and discards it.
    ///
    /// After an explicit position is set (a configured default, a restore, a re-layout), the
    /// initial notification would otherwise overwrite it. Only later crossings apply.
    pub fn prime(&mut self, viewport: Viewport) {
        if !self.mounted {
            return;
        }
        let skipped = self.observer.take_records(viewport).len();
        tracing::trace!(skipped, "visibility tracker primed");
    }

    /// Applies a batch: each intersecting entry becomes active, so the last one processed wins.
    pub fn process_batch(batch: &[VisibilityEntry], active: &mut ActiveSection) {
        for entry in batch.iter().filter(|e| e.is_intersecting) {
            active.set(entry.id.clone());
        }
    }

    /// Releases every watch and forgets the regions. Calling it again does nothing.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        for (id, _) in self.watched.drain(..) {
            self.observer.unobserve(&id);
        }
        self.mounted = false;
        tracing::debug!(
            remaining = self.observer.observed_count(),
            "visibility tracker unmounted"
        );
    }

    #[must_use]
    /// Whether watches are currently held.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Identifiers being watched, in registry order.
    pub fn registered_ids(&self) -> impl Iterator<Item = &SectionId> {
        self.watched.iter().map(|(id, _)| id)
    }

    #[must_use]
    /// The underlying observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }
}

impl<O: VisibilityObserver> Drop for VisibilityTracker<O> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
