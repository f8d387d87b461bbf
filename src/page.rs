//! The shared page template.
//!
//! Every article is the same shape: a header, one block per section, and a footer. A page is
//! therefore just data (`Page`), and [`layout`] turns it into a [`Document`] with exactly one
//! region per section, stacked in registry order.

use crate::document::{DocLine, Document, LineKind, Region};
use crate::registry::{RegistryError, SectionRegistry};
use crate::section::Section;
use unicode_width::UnicodeWidthStr;

/// Narrowest width the layout will wrap to.
pub const MIN_WIDTH: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A piece of section body text.
pub enum Block {
    /// Running text.
    Paragraph(String),
    /// Quoted source text.
    Quote(String),
    /// Bullet list entry.
    Item(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One section of a page with its body.
pub struct ContentBlock {
    /// Registry entry for this block.
    pub section: Section,
    /// Body content in reading order.
    pub body: Vec<Block>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Article data fed to the page template.
pub struct Page {
    /// Heading shown in the header.
    pub title: String,
    /// Optional line under the title.
    pub subtitle: Option<String>,
    /// Sections in reading order.
    pub blocks: Vec<ContentBlock>,
}

impl Page {
    /// Builds the section registry declared by this page.
    ///
    /// # Errors
    ///
    /// Fails when the page has no sections or repeats an identifier.
    pub fn registry(&self) -> Result<SectionRegistry, RegistryError> {
        SectionRegistry::new(self.blocks.iter().map(|b| b.section.clone()).collect())
    }
}

/// Lays the page out at `width` columns.
#[must_use]
pub fn layout(page: &Page, width: usize) -> Document {
    let width = width.max(MIN_WIDTH);
    let mut doc = Document::default();

    push_wrapped(&mut doc.lines, &page.title, width, "", "", LineKind::Title);
    if let Some(subtitle) = &page.subtitle {
        push_wrapped(&mut doc.lines, subtitle, width, "", "", LineKind::Subtitle);
    }
    doc.lines.push(DocLine::new("─".repeat(width), LineKind::Footer));
    doc.lines.push(DocLine::blank());

    for block in &page.blocks {
        let top = doc.lines.len();
        let section = &block.section;
        let heading = format!("{} {}", section.hint.icon, section.title);
        push_wrapped(
            &mut doc.lines,
            &heading,
            width,
            "",
            "  ",
            LineKind::Heading(section.hint.color),
        );
        doc.lines.push(DocLine::blank());
        for item in &block.body {
            match item {
                Block::Paragraph(text) => {
                    push_wrapped(&mut doc.lines, text, width, "", "", LineKind::Body);
                }
                Block::Quote(text) => {
                    push_wrapped(&mut doc.lines, text, width, "│ ", "│ ", LineKind::Quote);
                }
                Block::Item(text) => {
                    push_wrapped(&mut doc.lines, text, width, "• ", "  ", LineKind::Item);
                }
            }
            doc.lines.push(DocLine::blank());
        }
        doc.regions.push(Region {
            id: section.id.clone(),
            top,
            height: doc.lines.len() - top,
        });
    }

    doc.lines.push(DocLine::new("─".repeat(width), LineKind::Footer));
    doc.lines
        .push(DocLine::new("↑ Back to top (t)", LineKind::Footer));
    doc
}

fn push_wrapped(
    lines: &mut Vec<DocLine>,
    text: &str,
    width: usize,
    first_prefix: &str,
    rest_prefix: &str,
    kind: LineKind,
) {
    let mut prefix = first_prefix;
    for row in wrap(text, width.saturating_sub(first_prefix.width()).max(1)) {
        lines.push(DocLine::new(format!("{prefix}{row}"), kind));
        prefix = rest_prefix;
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if word.width() <= width {
            current.push_str(word);
        } else {
            for c in word.chars() {
                if current.width() + c.to_string().width() > width && !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                }
                current.push(c);
            }
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
#[path = "tests/page.rs"]
mod tests;
