use super::{AppState, FileMode};
use crate::config::Config;
use crate::page::{Block, ContentBlock, Page};
use crate::progress::{PageProgress, ReadingProgress};
use crate::section::Section;
use std::path::PathBuf;

fn page(title: &str, ids: &[&str]) -> Page {
    Page {
        title: title.to_string(),
        subtitle: None,
        blocks: ids
            .iter()
            .map(|id| ContentBlock {
                section: Section::new(*id, id.to_uppercase()),
                body: vec![Block::Paragraph(vec!["text"; 80].join(" "))],
            })
            .collect(),
    }
}

fn instant() -> Config {
    Config {
        smooth_scroll: false,
        ..Config::default()
    }
}

fn two_pages() -> AppState {
    AppState::new(
        vec![PathBuf::from("one.md"), PathBuf::from("two.md")],
        vec![
            page("One", &["intro", "science", "quran", "reflection"]),
            page("Two", &["intro", "evidence"]),
        ],
        instant(),
        (40, 10),
    )
    .unwrap()
}

#[test]
fn test_file_mode_from_page_count() {
    assert_eq!(two_pages().file_mode, FileMode::Multi);

    let single = AppState::new(
        vec![PathBuf::from("one.md")],
        vec![page("One", &["intro"])],
        instant(),
        (40, 10),
    )
    .unwrap();
    assert_eq!(single.file_mode, FileMode::Single);
}

#[test]
fn test_new_without_pages_fails() {
    assert!(AppState::new(vec![], vec![], instant(), (40, 10)).is_err());
}

#[test]
fn test_toc_cursor_wraps_and_opens() {
    let mut app = two_pages();
    app.toc_up();
    assert_eq!(app.toc_cursor, 3);
    app.toc_down();
    app.toc_down();
    assert_eq!(app.toc_cursor, 1);

    app.open_cursor();
    assert_eq!(app.controller().active().as_str(), "science");
}

#[test]
fn test_next_section_moves_cursor_with_active() {
    let mut app = two_pages();
    app.jump_to(3);
    assert_eq!(app.toc_cursor, 3);
    app.next_section();
    assert_eq!(app.controller().active().as_str(), "intro");
    assert_eq!(app.toc_cursor, 0);
}

#[test]
fn test_switching_pages_remembers_position() {
    let mut app = two_pages();
    app.jump_to(2);
    let offset = app.controller().scroll().offset();

    app.next_page();
    assert_eq!(app.current_page_index, 1);
    assert_eq!(app.controller().page().title, "Two");
    assert_eq!(app.controller().active().as_str(), "intro");

    app.prev_page();
    assert_eq!(app.current_page_index, 0);
    assert_eq!(app.controller().active().as_str(), "quran");
    assert_eq!(app.controller().scroll().offset(), offset);
    assert_eq!(app.toc_cursor, 2);
}

#[test]
fn test_page_bounds() {
    let mut app = two_pages();
    app.prev_page();
    assert_eq!(app.current_page_index, 0);
    app.next_page();
    app.next_page();
    assert_eq!(app.current_page_index, 1);
}

#[test]
fn test_resume_applies_saved_position() {
    let mut app = two_pages();
    app.resume(ReadingProgress {
        pages: vec![PageProgress {
            path: "one.md".to_string(),
            active_section: "reflection".into(),
            scroll_offset: 5,
        }],
    });
    assert_eq!(app.controller().active().as_str(), "reflection");
    assert_eq!(app.controller().scroll().offset(), 5);
    assert_eq!(app.toc_cursor, 3);
}

#[test]
fn test_reading_progress_includes_mounted_page() {
    let mut app = two_pages();
    app.jump_to(1);
    app.next_page();

    let progress = app.reading_progress();
    assert_eq!(progress.pages.len(), 2);
    assert_eq!(
        progress.find("one.md").unwrap().active_section.as_str(),
        "science"
    );
    assert_eq!(
        progress.find("two.md").unwrap().active_section.as_str(),
        "intro"
    );
}

#[test]
fn test_navigate_unknown_id_sets_message() {
    let mut app = two_pages();
    app.navigate(&"appendix".into());
    assert_eq!(app.controller().active().as_str(), "appendix");
    assert!(app.message.as_deref().unwrap().contains("appendix"));
}

#[test]
fn test_page_by_scrolls_a_screen() {
    let mut app = two_pages();
    app.page_by(1);
    assert_eq!(app.controller().scroll().offset(), 8);
    app.page_by(-1);
    assert_eq!(app.controller().scroll().offset(), 0);
}
