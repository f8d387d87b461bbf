use super::{find_pages, load_page, parse_heading, parse_page};
use crate::error::FolioError;
use crate::formats::markdown::MarkdownFormat;
use crate::page::Block;
use crate::registry::RegistryError;
use crate::section::HintColor;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

const ARTICLE: &str = "# The Expanding Universe

Cosmology and an ancient verse.

## Introduction {#intro icon=📖 color=cyan}

Galaxies are moving apart.
Second line of the same paragraph.

## Scientific Evidence {#science icon=🔬 color=blue}

- Redshift of distant galaxies
- Cosmic **microwave** background

### Hubble's law

Velocity is proportional to distance.

## The Verse {#quran}

> And the heaven We constructed with strength,
> and indeed, We are its expander.

## Reflection
";

#[test]
fn test_parse_page_structure() {
    let page = parse_page(ARTICLE, &MarkdownFormat, "fallback").unwrap();

    assert_eq!(page.title, "The Expanding Universe");
    assert_eq!(
        page.subtitle.as_deref(),
        Some("Cosmology and an ancient verse.")
    );

    let ids: Vec<_> = page.blocks.iter().map(|b| b.section.id.as_str()).collect();
    assert_eq!(ids, ["intro", "science", "quran", "reflection"]);

    let titles: Vec<_> = page.blocks.iter().map(|b| b.section.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Introduction", "Scientific Evidence", "The Verse", "Reflection"]
    );
}

#[test]
fn test_parse_page_bodies() {
    let page = parse_page(ARTICLE, &MarkdownFormat, "fallback").unwrap();

    assert_eq!(
        page.blocks[0].body,
        [Block::Paragraph(
            "Galaxies are moving apart. Second line of the same paragraph.".to_string()
        )]
    );
    assert_eq!(
        page.blocks[1].body,
        [
            Block::Item("Redshift of distant galaxies".to_string()),
            Block::Item("Cosmic microwave background".to_string()),
            Block::Paragraph("Hubble's law".to_string()),
            Block::Paragraph("Velocity is proportional to distance.".to_string()),
        ]
    );
    assert_eq!(
        page.blocks[2].body,
        [Block::Quote(
            "And the heaven We constructed with strength, and indeed, We are its expander."
                .to_string()
        )]
    );
    assert!(page.blocks[3].body.is_empty());
}

#[test]
fn test_parse_page_hints() {
    let page = parse_page(ARTICLE, &MarkdownFormat, "fallback").unwrap();
    assert_eq!(page.blocks[0].section.hint.icon, "📖");
    assert_eq!(page.blocks[0].section.hint.color, HintColor::Cyan);
    assert_eq!(page.blocks[2].section.hint.icon, "•");
    assert_eq!(page.blocks[2].section.hint.color, HintColor::Default);
}

#[test]
fn test_missing_title_uses_fallback() {
    let page = parse_page("## Only Section\n\nText.\n", &MarkdownFormat, "notes").unwrap();
    assert_eq!(page.title, "notes");
    assert_eq!(page.subtitle, None);
    assert_eq!(page.blocks[0].section.id.as_str(), "only-section");
}

#[test]
fn test_unsluggable_titles_get_positional_ids() {
    let source = "# Page\n\n## Notes\n\nA\n\n## 🔬\n\nB\n\n## Глава\n\nC\n";
    let page = parse_page(source, &MarkdownFormat, "fallback").unwrap();
    let ids: Vec<_> = page.blocks.iter().map(|b| b.section.id.as_str()).collect();
    assert_eq!(ids, ["notes", "section-2", "section-3"]);
    assert_eq!(page.blocks[1].section.title, "🔬");
    assert!(page.registry().is_ok());
}

#[test]
fn test_parse_heading_trailer() {
    let section = parse_heading("Scientific Evidence {#science icon=🔬 color=emerald}");
    assert_eq!(section.id.as_str(), "science");
    assert_eq!(section.title, "Scientific Evidence");
    assert_eq!(section.hint.icon, "🔬");
    assert_eq!(section.hint.color, HintColor::Green);

    let plain = parse_heading("Scientific Evidence");
    assert_eq!(plain.id.as_str(), "scientific-evidence");

    let empty_id = parse_heading("Notes {# color=red}");
    assert_eq!(empty_id.id.as_str(), "notes");
    assert_eq!(empty_id.hint.color, HintColor::Red);
}

#[test]
fn test_load_page_rejects_duplicate_ids() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# Page\n\n## Intro\n\nA\n\n## Intro\n\nB").unwrap();
    let err = load_page(file.path(), &MarkdownFormat).unwrap_err();
    assert!(matches!(
        err,
        FolioError::Registry(RegistryError::DuplicateId(_))
    ));
}

#[test]
fn test_load_page_rejects_page_without_sections() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# Page\n\nJust a title.").unwrap();
    let err = load_page(file.path(), &MarkdownFormat).unwrap_err();
    assert!(matches!(err, FolioError::Registry(RegistryError::Empty)));
}

#[test]
fn test_load_page_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{ARTICLE}").unwrap();
    let page = load_page(file.path(), &MarkdownFormat).unwrap();
    assert_eq!(page.blocks.len(), 4);
}

#[test]
fn test_find_pages_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("nested")).unwrap();
    fs::create_dir(root.join(".hidden")).unwrap();
    fs::write(root.join("b.md"), "# B").unwrap();
    fs::write(root.join("a.MD"), "# A").unwrap();
    fs::write(root.join("notes.txt"), "skip").unwrap();
    fs::write(root.join("nested/c.md"), "# C").unwrap();
    fs::write(root.join(".hidden/d.md"), "# D").unwrap();

    let pages = find_pages(vec![root.to_path_buf()], &["md".to_string()]).unwrap();
    let names: Vec<_> = pages
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, ["a.MD", "b.md", "nested/c.md"]);
}

#[test]
fn test_find_pages_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = find_pages(vec![dir.path().join("nope")], &["md".to_string()]).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
