//! The UI renders the reader state into the page template.
//!
//! Wide terminals show the table of contents beside the content. Below `narrow_width` columns the
//! table of contents collapses and the footer offers a "next section" control instead.

use crate::app_state::{AppState, FileMode};
use crate::config::Config;
use crate::document::{DocLine, LineKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Columns given to the table of contents on wide terminals.
pub const TOC_WIDTH: u16 = 32;

/// Screen areas for one frame.
pub struct Panes {
    /// Single-line page indicator.
    pub header: Rect,
    /// Table of contents, absent on narrow terminals.
    pub toc: Option<Rect>,
    /// Bordered content pane.
    pub content: Rect,
    /// Help, messages and the "next section" control.
    pub footer: Rect,
}

impl Panes {
    #[must_use]
    /// Splits `area` according to the configured breakpoint.
    pub fn split(area: Rect, cfg: &Config) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Page indicator
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(area);

        let (toc, content) = if area.width >= cfg.narrow_width {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(TOC_WIDTH), Constraint::Min(0)])
                .split(rows[1]);
            (Some(cols[0]), cols[1])
        } else {
            (None, rows[1])
        };

        Self {
            header: rows[0],
            toc,
            content,
            footer: rows[2],
        }
    }

    #[must_use]
    /// Columns and rows available for document lines inside the content border.
    pub fn content_size(&self) -> (usize, usize) {
        let inner = Block::default().borders(Borders::ALL).inner(self.content);
        (usize::from(inner.width), usize::from(inner.height))
    }

    #[must_use]
    /// Whether the collapsed, narrow layout is in use.
    pub fn is_narrow(&self) -> bool {
        self.toc.is_none()
    }
}

/// Renders the mounted page.
pub fn draw(f: &mut Frame, app: &AppState) {
    let panes = Panes::split(f.area(), app.config());

    draw_header(f, app, panes.header);
    if let Some(toc) = panes.toc {
        draw_toc(f, app, toc);
    }
    draw_content(f, app, panes.content);
    draw_footer(f, app, &panes);
}

fn draw_header(f: &mut Frame, app: &AppState, area: Rect) {
    let path = app
        .files
        .get(app.current_page_index)
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let text = if app.file_mode == FileMode::Multi {
        format!(
            " Page {}/{} · {path}",
            app.current_page_index + 1,
            app.pages.len()
        )
    } else {
        format!(" {path}")
    };
    let header = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(header, area);
}

fn draw_toc(f: &mut Frame, app: &AppState, area: Rect) {
    let controller = app.controller();
    let active = controller.active();

    let items: Vec<ListItem> = controller
        .registry()
        .sections()
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let color = section.hint.color.to_color();
            let line = Line::from(vec![
                Span::styled(format!("{} ", section.hint.icon), Style::default().fg(color)),
                Span::raw(section.title.clone()),
            ]);

            let mut style = Style::default();
            if &section.id == active {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            if i == app.toc_cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            ListItem::new(line).style(style)
        })
        .collect();

    let scroll = controller.scroll();
    let percent = if scroll.max_offset() == 0 {
        100
    } else {
        scroll.offset() * 100 / scroll.max_offset()
    };
    let title = format!("Contents ({percent}%)");
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn line_style(line: &DocLine) -> Style {
    match line.kind {
        LineKind::Title => Style::default().add_modifier(Modifier::BOLD),
        LineKind::Subtitle => Style::default().add_modifier(Modifier::ITALIC),
        LineKind::Heading(color) => Style::default()
            .fg(color.to_color())
            .add_modifier(Modifier::BOLD),
        LineKind::Quote => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
        LineKind::Footer => Style::default().fg(Color::DarkGray),
        LineKind::Body | LineKind::Item | LineKind::Blank => Style::default(),
    }
}

fn draw_content(f: &mut Frame, app: &AppState, area: Rect) {
    let controller = app.controller();
    let document = controller.document();
    let viewport = controller.scroll().viewport();
    let active_region = document.find_region(controller.active());

    let lines: Vec<Line> = document
        .lines
        .iter()
        .enumerate()
        .skip(viewport.top)
        .take(viewport.height)
        .map(|(i, line)| {
            let in_active = active_region.is_some_and(|r| (r.top..r.bottom()).contains(&i));
            let mut style = line_style(line);
            if in_active && matches!(line.kind, LineKind::Heading(_)) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            Line::from(Span::styled(line.text.clone(), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(controller.page().title.clone());
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_footer(f: &mut Frame, app: &AppState, panes: &Panes) {
    let controller = app.controller();

    let text = if let Some(ref msg) = app.message {
        Line::from(msg.clone())
    } else if panes.is_narrow() {
        let next = controller.upcoming();
        Line::from(vec![
            Span::styled("n", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": Next › "),
            Span::styled(
                format!("{} {}", next.hint.icon, next.title),
                Style::default().fg(next.hint.color.to_color()),
            ),
            Span::raw(" | t: ↑ Top | q: Quit"),
        ])
    } else if app.file_mode == FileMode::Multi {
        Line::from("↑/↓: Scroll | Tab: Contents | Enter: Go | n: Next | t: Top | [/]: Page | q: Quit")
    } else {
        Line::from("↑/↓: Scroll | Tab: Contents | Enter: Go | 1-9: Jump | n: Next | t: Top | q: Quit")
    };

    let footer = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, panes.footer);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
