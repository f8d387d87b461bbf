//! Format trait and implementations for page sources.
//!
//! This module defines the `Format` trait which abstracts over document formats by providing
//! the tree-sitter grammar and the query that locates headings. Headings delimit sections.

pub mod markdown;

/// Grammar and queries needed to split a source file into headed sections.
pub trait Format {
    /// Tree-sitter grammar for the format.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing each heading node as `@heading`.
    fn heading_query(&self) -> &str;
    /// Nesting depth of a captured heading node (1 for top level).
    fn heading_level(&self, node: tree_sitter::Node<'_>) -> Option<usize>;
    /// Byte range of the heading's text within a captured heading node.
    fn heading_text_range(&self, node: tree_sitter::Node<'_>) -> Option<std::ops::Range<usize>>;
}
