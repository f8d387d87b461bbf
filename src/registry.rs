//! The ordered, immutable set of sections declared by a page.
//!
//! Registry order is reading order, and regions are stacked in the document in the same order.
//! The registry is built once when a page mounts and shared behind an `Rc` afterwards, so nothing
//! downstream ever rebuilds or re-subscribes against a fresh copy.

use crate::section::{Section, SectionId};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Reasons a list of sections cannot form a registry.
pub enum RegistryError {
    /// A page must declare at least one section so that an active section always exists.
    #[error("page declares no sections")]
    Empty,
    /// Identifiers must be unique within a page.
    #[error("duplicate section identifier: {0}")]
    DuplicateId(SectionId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fixed, ordered list of a page's sections.
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Validates and freezes the section list.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Empty`] for an empty list and [`RegistryError::DuplicateId`] when
    /// an identifier appears twice.
    pub fn new(sections: Vec<Section>) -> Result<Self, RegistryError> {
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::with_capacity(sections.len());
        for section in &sections {
            if !seen.insert(&section.id) {
                return Err(RegistryError::DuplicateId(section.id.clone()));
            }
        }
        Ok(Self { sections })
    }

    #[must_use]
    /// All sections in reading order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    /// Number of declared sections, never zero.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// Always false; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    /// The first section in reading order.
    pub fn first(&self) -> &Section {
        &self.sections[0]
    }

    #[must_use]
    /// Looks up a section by identifier.
    pub fn get(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    #[must_use]
    /// Reading-order index of an identifier.
    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|s| &s.id == id)
    }

    #[must_use]
    /// The section after `id`, wrapping from the last back to the first.
    ///
    /// An identifier missing from the registry counts as index -1, which lands on the first
    /// section.
    pub fn next_after(&self, id: &SectionId) -> &Section {
        let next = self.position(id).map_or(0, |i| (i + 1) % self.len());
        &self.sections[next]
    }

    #[must_use]
    /// The section before `id`, wrapping from the first to the last.
    ///
    /// An identifier missing from the registry lands on the first section, mirroring
    /// [`next_after`](Self::next_after).
    pub fn previous_before(&self, id: &SectionId) -> &Section {
        let prev = self
            .position(id)
            .map_or(0, |i| (i + self.len() - 1) % self.len());
        &self.sections[prev]
    }
}

#[cfg(test)]
#[path = "tests/registry.rs"]
mod tests;
