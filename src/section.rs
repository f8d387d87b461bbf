//! Section representation for article pages.
//!
//! A section is one logical content block of a page. Its identifier correlates three things: the
//! entry in the table of contents, the region in the laid-out document, and the active-section
//! value. The presentation hint is cosmetic and never affects behaviour.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// Stable token naming a section, unique within one page.
pub struct SectionId(String);

impl SectionId {
    #[must_use]
    /// Wraps an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    /// Borrows the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Named terminal colour for a section's icon and title.
pub enum HintColor {
    #[default]
    /// Terminal foreground.
    Default,
    /// Blue.
    Blue,
    /// Cyan.
    Cyan,
    /// Green.
    Green,
    /// Magenta.
    Magenta,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
}

impl HintColor {
    #[must_use]
    /// Parses a colour name, falling back to `Default` for anything unrecognised.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "blue" => Self::Blue,
            "cyan" | "teal" => Self::Cyan,
            "green" | "emerald" => Self::Green,
            "magenta" | "purple" | "violet" => Self::Magenta,
            "red" | "rose" => Self::Red,
            "yellow" | "amber" | "orange" => Self::Yellow,
            _ => Self::Default,
        }
    }

    #[must_use]
    /// The ratatui colour used when rendering.
    pub fn to_color(self) -> Color {
        match self {
            Self::Default => Color::Reset,
            Self::Blue => Color::Blue,
            Self::Cyan => Color::Cyan,
            Self::Green => Color::Green,
            Self::Magenta => Color::Magenta,
            Self::Red => Color::Red,
            Self::Yellow => Color::Yellow,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Icon and colour shown next to a section title.
pub struct PresentationHint {
    /// Short glyph shown before the title in the table of contents.
    pub icon: String,
    /// Colour of the icon and heading.
    pub color: HintColor,
}

impl Default for PresentationHint {
    fn default() -> Self {
        Self {
            icon: "•".to_string(),
            color: HintColor::Default,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One entry of a page's section registry.
pub struct Section {
    /// Identifier shared by the navigation link, the document region and the active state.
    pub id: SectionId,
    /// Human-readable label used in navigation.
    pub title: String,
    /// Cosmetic icon and colour.
    pub hint: PresentationHint,
}

impl Section {
    #[must_use]
    /// Builds a section with the default presentation hint.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(id),
            title: title.into(),
            hint: PresentationHint::default(),
        }
    }

    #[must_use]
    /// Replaces the presentation hint.
    pub fn with_hint(mut self, icon: impl Into<String>, color: HintColor) -> Self {
        self.hint = PresentationHint {
            icon: icon.into(),
            color,
        };
        self
    }
}

/// Derives an identifier from a heading title.
///
/// ASCII alphanumerics are lowercased, every other run of characters collapses to a single `-`,
/// and leading/trailing dashes are trimmed.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
