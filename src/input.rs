//! Page discovery and parsing.
//!
//! Pages are markdown files. The first `#` heading is the page title, the first paragraph under
//! it is the subtitle, and every `##` heading opens a section. A heading may end with an
//! attribute trailer such as `{#science icon=🔬 color=blue}` to pin its identifier and
//! presentation hint; otherwise the identifier is derived from the title.

use crate::error::FolioError;
use crate::formats::Format;
use crate::page::{Block, ContentBlock, Page};
use crate::section::{slugify, HintColor, PresentationHint, Section, SectionId};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

/// Collects page files from the given paths, descending into directories.
///
/// Hidden entries are skipped. The result is sorted and deduplicated.
///
/// # Errors
///
/// Returns an error if a path cannot be read.
pub fn find_pages(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let roots = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let mut pages = Vec::new();
    for root in roots {
        if root.is_dir() {
            walk(&root, extensions, &mut pages)?;
        } else if root.is_file() {
            pages.push(root);
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {}", root.display()),
            ));
        }
    }
    pages.sort();
    pages.dedup();
    Ok(pages)
}

fn walk(dir: &Path, extensions: &[String], out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if hidden {
            continue;
        }
        if path.is_dir() {
            walk(&path, extensions, out)?;
        } else if has_extension(&path, extensions) {
            out.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

/// Reads and parses a page file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, cannot be parsed, or declares no valid sections.
pub fn load_page(path: &Path, format: &dyn Format) -> Result<Page, FolioError> {
    let source = fs::read_to_string(path)?;
    let fallback = path
        .file_stem()
        .map_or_else(|| "Untitled".to_string(), |s| s.to_string_lossy().to_string());
    let page = parse_page(&source, format, &fallback)?;
    // Surface registry problems at load time rather than on mount.
    page.registry()?;
    Ok(page)
}

struct Heading {
    level: usize,
    text: String,
    start: usize,
    end: usize,
}

/// Splits `source` into a page using the format's heading query.
///
/// `fallback_title` is used when the source has no level-1 heading.
///
/// # Errors
///
/// Returns [`FolioError::Parse`] if the grammar or query cannot be loaded.
pub fn parse_page(
    source: &str,
    format: &dyn Format,
    fallback_title: &str,
) -> Result<Page, FolioError> {
    let headings = extract_headings(source, format)?;

    let mut title = None;
    let mut subtitle = None;
    let mut blocks: Vec<ContentBlock> = Vec::new();

    for (i, heading) in headings.iter().enumerate() {
        let body_end = headings.get(i + 1).map_or(source.len(), |next| next.start);
        let body = parse_body(&source[heading.end.min(body_end)..body_end]);

        match heading.level {
            1 if title.is_none() && blocks.is_empty() => {
                title = Some(heading.text.clone());
                subtitle = body.into_iter().find_map(|b| match b {
                    Block::Paragraph(text) => Some(text),
                    _ => None,
                });
            }
            2 => {
                let mut section = parse_heading(&heading.text);
                // Titles without ASCII alphanumerics slug to nothing.
                if section.id.as_str().is_empty() {
                    section.id = SectionId::new(format!("section-{}", blocks.len() + 1));
                }
                blocks.push(ContentBlock { section, body });
            }
            _ => {
                if let Some(current) = blocks.last_mut() {
                    current
                        .body
                        .push(Block::Paragraph(strip_trailer(&heading.text).to_string()));
                    current.body.extend(body);
                }
            }
        }
    }

    Ok(Page {
        title: title.unwrap_or_else(|| fallback_title.to_string()),
        subtitle,
        blocks,
    })
}

fn extract_headings(source: &str, format: &dyn Format) -> Result<Vec<Heading>, FolioError> {
    let language = format.language();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| FolioError::Parse(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| FolioError::Parse("parser returned no tree".to_string()))?;
    let query =
        Query::new(&language, format.heading_query()).map_err(|e| FolioError::Parse(e.to_string()))?;

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
    let mut headings = Vec::new();

    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            let Some(level) = format.heading_level(node) else {
                continue;
            };
            let text = format
                .heading_text_range(node)
                .and_then(|range| source.get(range))
                .unwrap_or_default()
                .trim()
                .to_string();
            headings.push(Heading {
                level,
                text,
                start: node.start_byte(),
                end: node.end_byte(),
            });
        }
    }

    headings.sort_by_key(|h| h.start);
    Ok(headings)
}

fn strip_trailer(text: &str) -> &str {
    match trailer_start(text) {
        Some(idx) => text[..idx].trim_end(),
        None => text,
    }
}

fn trailer_start(text: &str) -> Option<usize> {
    let trimmed = text.trim_end();
    if !trimmed.ends_with('}') {
        return None;
    }
    trimmed.rfind('{')
}

/// Turns heading text with an optional `{#id icon=… color=…}` trailer into a section.
#[must_use]
pub fn parse_heading(text: &str) -> Section {
    let mut id = None;
    let mut hint = PresentationHint::default();

    if let Some(idx) = trailer_start(text) {
        let attrs = text.trim_end()[idx + 1..].trim_end_matches('}');
        for token in attrs.split_whitespace() {
            if let Some(value) = token.strip_prefix('#') {
                id = Some(value.to_string());
            } else if let Some(value) = token.strip_prefix("icon=") {
                hint.icon = value.to_string();
            } else if let Some(value) = token.strip_prefix("color=") {
                hint.color = HintColor::parse(value);
            }
        }
    }

    let title = strip_trailer(text).to_string();
    let id = id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| slugify(&title));
    Section {
        id: SectionId::new(id),
        title,
        hint,
    }
}

fn parse_body(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut quote: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush(&mut blocks, &mut paragraph, &mut quote);
        } else if let Some(rest) = trimmed.strip_prefix('>') {
            if !paragraph.is_empty() {
                flush(&mut blocks, &mut paragraph, &mut quote);
            }
            quote.push(rest.trim());
        } else if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            flush(&mut blocks, &mut paragraph, &mut quote);
            blocks.push(Block::Item(clean(rest)));
        } else if line.starts_with("  ") && paragraph.is_empty() && quote.is_empty() {
            // Continuation of the previous list item
            if let Some(Block::Item(item)) = blocks.last_mut() {
                item.push(' ');
                item.push_str(&clean(trimmed));
            } else {
                paragraph.push(trimmed);
            }
        } else {
            if !quote.is_empty() {
                flush(&mut blocks, &mut paragraph, &mut quote);
            }
            paragraph.push(trimmed);
        }
    }
    flush(&mut blocks, &mut paragraph, &mut quote);
    blocks
}

fn flush(blocks: &mut Vec<Block>, paragraph: &mut Vec<&str>, quote: &mut Vec<&str>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph(clean(&paragraph.join(" "))));
        paragraph.clear();
    }
    if !quote.is_empty() {
        blocks.push(Block::Quote(clean(&quote.join(" "))));
        quote.clear();
    }
}

/// Drops emphasis and code markers, which the terminal layout does not style inline.
fn clean(text: &str) -> String {
    text.replace("**", "").replace('`', "")
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
