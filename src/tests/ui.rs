use super::{draw, Panes, TOC_WIDTH};
use crate::app_state::AppState;
use crate::config::Config;
use crate::page::{Block, ContentBlock, Page};
use crate::section::{HintColor, Section};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
use std::path::PathBuf;

fn app(width: u16, height: u16) -> AppState {
    let page = Page {
        title: "The Expanding Universe".to_string(),
        subtitle: Some("Cosmology and an ancient verse".to_string()),
        blocks: ["intro", "science", "quran", "reflection"]
            .iter()
            .map(|id| ContentBlock {
                section: Section::new(*id, id.to_uppercase()).with_hint("*", HintColor::Blue),
                body: vec![Block::Paragraph(vec!["text"; 40].join(" "))],
            })
            .collect(),
    };
    let cfg = Config {
        smooth_scroll: false,
        ..Config::default()
    };
    let panes = Panes::split(Rect::new(0, 0, width, height), &cfg);
    AppState::new(
        vec![PathBuf::from("universe.md")],
        vec![page],
        cfg,
        panes.content_size(),
    )
    .unwrap()
}

fn render(app: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_panes_split_at_breakpoint() {
    let cfg = Config::default();
    let wide = Panes::split(Rect::new(0, 0, 120, 30), &cfg);
    assert!(!wide.is_narrow());
    assert_eq!(wide.toc.unwrap().width, TOC_WIDTH);
    assert_eq!(wide.content_size(), (120 - usize::from(TOC_WIDTH) - 2, 30 - 4 - 2));

    let narrow = Panes::split(Rect::new(0, 0, 60, 30), &cfg);
    assert!(narrow.is_narrow());
    assert_eq!(narrow.content_size(), (58, 24));
}

#[test]
fn test_wide_layout_shows_contents() {
    let app = app(120, 30);
    let screen = render(&app, 120, 30);
    assert!(screen.contains("Contents"));
    assert!(screen.contains("REFLECTION"));
    assert!(screen.contains("The Expanding Universe"));
    assert!(screen.contains("Tab: Contents"));
}

#[test]
fn test_narrow_layout_offers_next_section() {
    let mut app = app(60, 30);
    let screen = render(&app, 60, 30);
    assert!(!screen.contains("Contents"));
    assert!(screen.contains("Next › * SCIENCE"));

    app.jump_to(3);
    let screen = render(&app, 60, 30);
    assert!(screen.contains("Next › * INTRO"));
}
