//! The laid-out document: styled lines plus one locatable region per section.
//!
//! Geometry is measured in whole terminal lines. The document owns its regions; the visibility
//! tracker only keeps copies for as long as it is mounted.

use crate::section::{HintColor, SectionId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a laid-out line should be styled.
pub enum LineKind {
    /// Page title in the header.
    Title,
    /// Page subtitle in the header.
    Subtitle,
    /// Section heading, coloured by the section's hint.
    Heading(HintColor),
    /// Paragraph text.
    Body,
    /// Quoted source text.
    Quote,
    /// Bullet list item.
    Item,
    /// Footer text.
    Footer,
    /// Empty separator line.
    Blank,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One rendered line of the document.
pub struct DocLine {
    /// Visible text, already wrapped to the layout width.
    pub text: String,
    /// Styling category.
    pub kind: LineKind,
}

impl DocLine {
    #[must_use]
    /// Builds a line of the given kind.
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    #[must_use]
    /// Empty separator line.
    pub fn blank() -> Self {
        Self::new(String::new(), LineKind::Blank)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Vertical extent of a section inside the document.
pub struct Region {
    /// Section this region renders.
    pub id: SectionId,
    /// First document line of the region.
    pub top: usize,
    /// Number of lines the region spans.
    pub height: usize,
}

impl Region {
    #[must_use]
    /// One past the last line of the region.
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// The visible window onto the document, in document lines.
pub struct Viewport {
    /// First visible document line.
    pub top: usize,
    /// Number of visible lines.
    pub height: usize,
}

impl Viewport {
    #[must_use]
    /// Builds a viewport.
    pub fn new(top: usize, height: usize) -> Self {
        Self { top, height }
    }

    #[must_use]
    /// One past the last visible line.
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    #[must_use]
    /// Grows (positive) or shrinks (negative) each edge, saturating at zero.
    pub fn with_margin(self, margin: Margin) -> Self {
        let top = offset(self.top, -i64::from(margin.top));
        let bottom = offset(self.bottom(), i64::from(margin.bottom)).max(top);
        Self {
            top,
            height: bottom - top,
        }
    }

    #[must_use]
    /// Number of lines shared with `region`.
    pub fn overlap(&self, region: &Region) -> usize {
        let start = self.top.max(region.top);
        let end = self.bottom().min(region.bottom());
        end.saturating_sub(start)
    }
}

fn offset(value: usize, delta: i64) -> usize {
    let shifted = i64::try_from(value).unwrap_or(i64::MAX).saturating_add(delta);
    usize::try_from(shifted.max(0)).unwrap_or(usize::MAX)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Adjustment applied to the observation root before intersection testing.
pub struct Margin {
    /// Lines added above the root; negative values shrink it.
    pub top: i32,
    /// Lines added below the root; negative values shrink it.
    pub bottom: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Laid-out page content.
pub struct Document {
    /// All lines from header to footer.
    pub lines: Vec<DocLine>,
    /// Section regions in reading order.
    pub regions: Vec<Region>,
}

impl Document {
    #[must_use]
    /// Locates the region rendering `id`, if the section was laid out.
    pub fn find_region(&self, id: &SectionId) -> Option<&Region> {
        self.regions.iter().find(|r| &r.id == id)
    }

    #[must_use]
    /// Total number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
