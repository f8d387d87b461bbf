//! The single "current section" value shared by the tracker and the navigator.

use crate::registry::SectionRegistry;
use crate::section::SectionId;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Exactly one active section identifier, never zero and never several.
///
/// Writes are last-write-wins with no transition restrictions. Both writers (the visibility
/// tracker and the navigator) run on the UI thread, so there is no locking.
pub struct ActiveSection {
    current: SectionId,
}

impl ActiveSection {
    #[must_use]
    /// Starts with an explicit identifier.
    pub fn new(initial: SectionId) -> Self {
        Self { current: initial }
    }

    #[must_use]
    /// Starts with `default` when the registry knows it, otherwise with the first section.
    pub fn initial(registry: &SectionRegistry, default: Option<&SectionId>) -> Self {
        let start = default
            .filter(|id| registry.position(id).is_some())
            .unwrap_or(&registry.first().id);
        Self::new(start.clone())
    }

    #[must_use]
    /// The active identifier.
    pub fn get(&self) -> &SectionId {
        &self.current
    }

    /// Replaces the active identifier.
    pub fn set(&mut self, id: SectionId) {
        if self.current != id {
            tracing::trace!(from = %self.current, to = %id, "active section changed");
        }
        self.current = id;
    }
}

#[cfg(test)]
#[path = "tests/active.rs"]
mod tests;
