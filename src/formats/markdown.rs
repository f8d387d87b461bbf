//! Markdown format implementation using tree-sitter-md.
//!
//! This module provides tree-sitter queries for parsing markdown pages and extracting section
//! structure from ATX-style headings (# syntax).

use crate::formats::Format;
use std::ops::Range;
use tree_sitter::Node;

/// Tree-sitter queries for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }

    fn heading_level(&self, node: Node<'_>) -> Option<usize> {
        let mut walker = node.walk();
        let level = node.children(&mut walker).find_map(|child| {
            child
                .kind()
                .strip_prefix("atx_h")
                .and_then(|rest| rest.strip_suffix("_marker"))
                .and_then(|digit| digit.parse().ok())
        });
        level
    }

    fn heading_text_range(&self, node: Node<'_>) -> Option<Range<usize>> {
        let mut walker = node.walk();
        let range = node
            .children(&mut walker)
            .find(|child| child.kind() == "inline")
            .map(|inline| inline.byte_range());
        range
    }
}
