//! Visibility observation: which watched regions are on screen, reported as batches of crossings.
//!
//! The [`VisibilityObserver`] trait is the subscription seam. Regions are registered with
//! `observe`, released with `unobserve`, and each `take_records` call delivers one batch of
//! entries for targets whose intersecting state changed since the previous batch. The first batch
//! after a target is observed always includes it.

use crate::document::{Margin, Region, Viewport};
use crate::section::SectionId;

/// Default share of a region that must be visible for it to count as intersecting.
pub const DEFAULT_THRESHOLD: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
/// How intersection is tested.
pub struct VisibilityConfig {
    /// Fixed observation root; `None` tests against the live viewport.
    pub root: Option<Viewport>,
    /// Adjustment applied to the root bounds before testing.
    pub margin: Margin,
    /// Minimum visible ratio of a region for it to be intersecting.
    pub threshold: f32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            root: None,
            margin: Margin::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// One target's visibility as of a batch.
pub struct VisibilityEntry {
    /// Observed section.
    pub id: SectionId,
    /// Visible share of the region, from 0.0 to 1.0.
    pub ratio: f32,
    /// Whether the ratio satisfies the threshold.
    pub is_intersecting: bool,
}

/// Subscription interface for region visibility.
pub trait VisibilityObserver {
    /// Starts watching `region` under `id`.
    fn observe(&mut self, id: &SectionId, region: Region);
    /// Stops watching `id`. Unknown identifiers are ignored.
    fn unobserve(&mut self, id: &SectionId);
    /// Delivers the pending batch of crossings for the given viewport.
    fn take_records(&mut self, viewport: Viewport) -> Vec<VisibilityEntry>;
    /// Number of targets currently watched.
    fn observed_count(&self) -> usize;
}

struct Target {
    id: SectionId,
    region: Region,
    // `None` until the initial notification has been delivered.
    last: Option<bool>,
}

/// Observer that computes intersection ratios from region and viewport geometry.
pub struct GeometricObserver {
    config: VisibilityConfig,
    targets: Vec<Target>,
}

impl GeometricObserver {
    #[must_use]
    /// Creates an observer with no targets.
    pub fn new(config: VisibilityConfig) -> Self {
        Self {
            config,
            targets: Vec::new(),
        }
    }

    #[must_use]
    /// Active configuration.
    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    /// Visible share of `region` inside `root`.
    pub fn ratio(region: &Region, root: Viewport) -> f32 {
        if region.height == 0 {
            return 0.0;
        }
        root.overlap(region) as f32 / region.height as f32
    }

    fn root_for(&self, viewport: Viewport) -> Viewport {
        self.config
            .root
            .unwrap_or(viewport)
            .with_margin(self.config.margin)
    }
}

impl VisibilityObserver for GeometricObserver {
    fn observe(&mut self, id: &SectionId, region: Region) {
        if let Some(existing) = self.targets.iter_mut().find(|t| &t.id == id) {
            existing.region = region;
            existing.last = None;
            return;
        }
        self.targets.push(Target {
            id: id.clone(),
            region,
            last: None,
        });
    }

    fn unobserve(&mut self, id: &SectionId) {
        self.targets.retain(|t| &t.id != id);
    }

    fn take_records(&mut self, viewport: Viewport) -> Vec<VisibilityEntry> {
        let root = self.root_for(viewport);
        let threshold = self.config.threshold;
        let mut batch = Vec::new();

        for target in &mut self.targets {
            let ratio = Self::ratio(&target.region, root);
            let is_intersecting = root.overlap(&target.region) > 0 && ratio >= threshold;
            if target.last != Some(is_intersecting) {
                target.last = Some(is_intersecting);
                batch.push(VisibilityEntry {
                    id: target.id.clone(),
                    ratio,
                    is_intersecting,
                });
            }
        }

        batch
    }

    fn observed_count(&self) -> usize {
        self.targets.len()
    }
}

#[cfg(test)]
#[path = "tests/visibility.rs"]
mod tests;
