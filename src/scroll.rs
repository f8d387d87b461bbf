//! Scroll position of the content pane, with eased smooth scrolling.
//!
//! A smooth scroll sets a target that [`ScrollState::tick`] approaches a fraction at a time. A new
//! request simply replaces the target, and a user scroll drops it. The top padding stands in
//! for the fixed header: it is applied here, by layout, so callers pass raw region tops.

use crate::document::Viewport;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Scroll offset and in-flight animation for one document.
pub struct ScrollState {
    offset: usize,
    target: Option<usize>,
    content_height: usize,
    viewport_height: usize,
    padding_top: usize,
    smooth: bool,
}

impl ScrollState {
    #[must_use]
    /// Starts at the top of the document.
    pub fn new(smooth: bool, padding_top: usize) -> Self {
        Self {
            offset: 0,
            target: None,
            content_height: 0,
            viewport_height: 0,
            padding_top,
            smooth,
        }
    }

    /// Updates document and viewport sizes, clamping the offset and any target.
    pub fn set_dimensions(&mut self, content_height: usize, viewport_height: usize) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
        let max = self.max_offset();
        self.target = self
            .target
            .map(|t| t.min(max))
            .filter(|&t| t != self.offset);
    }

    #[must_use]
    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    #[must_use]
    /// Current first visible line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    /// Where a smooth scroll is heading, if one is in flight.
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    #[must_use]
    /// Whether a smooth scroll is still in flight.
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    #[must_use]
    /// The visible window.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.offset, self.viewport_height)
    }

    /// Brings the line `top` near the top of the viewport, below the header padding.
    pub fn scroll_into_view(&mut self, top: usize) {
        let goal = top.saturating_sub(self.padding_top);
        self.scroll_to(goal);
    }

    /// Smooth-scrolls back to the start of the document.
    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    /// Moves towards `offset`, animated when smooth scrolling is on.
    pub fn scroll_to(&mut self, offset: usize) {
        let goal = offset.min(self.max_offset());
        if self.smooth && goal != self.offset {
            self.target = Some(goal);
        } else {
            self.target = None;
            self.offset = goal;
        }
    }

    /// Direct user scroll; interrupts any animation.
    pub fn scroll_by(&mut self, delta: isize) {
        self.target = None;
        self.offset = self
            .offset
            .saturating_add_signed(delta)
            .min(self.max_offset());
    }

    /// Jumps to `offset` without animating, e.g. when restoring a reading position.
    pub fn jump_to(&mut self, offset: usize) {
        self.target = None;
        self.offset = offset.min(self.max_offset());
    }

    /// Advances an in-flight animation by one step, returning whether the offset moved.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let distance = target.abs_diff(self.offset);
        if distance == 0 {
            self.target = None;
            return false;
        }
        let step = (distance / 3).max(1);
        if target > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        if self.offset == target {
            self.target = None;
        }
        true
    }
}

#[cfg(test)]
#[path = "tests/scroll.rs"]
mod tests;
