//! folio: a scroll-synced section reader for article pages.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use folio::{app_state, config, formats, input, logging, progress, ui};
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Scroll-synced section reader for article pages", long_about = None)]
struct Args {
    /// Page files or directories to read
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Restore reading positions from a progress JSON file
    #[arg(long)]
    resume: Option<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Share of a section that must be visible to make it active (0.0 to 1.0)
    #[arg(long)]
    threshold: Option<f32>,

    /// Jump instead of animating when navigating
    #[arg(long)]
    no_smooth: bool,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.log_file.as_deref(), args.verbose)?;
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    if let Some(threshold) = args.threshold {
        if !(0.0..=1.0).contains(&threshold) {
            eprintln!("--threshold must be between 0 and 1");
            return Ok(());
        }
        cfg.threshold = threshold;
    }
    if args.no_smooth {
        cfg.smooth_scroll = false;
    }

    let candidates = input::find_pages(args.paths, &cfg.file_extensions)?;

    let format = formats::markdown::MarkdownFormat;
    let mut files = Vec::new();
    let mut pages = Vec::new();
    for path in candidates {
        match input::load_page(&path, &format) {
            Ok(page) => {
                files.push(path);
                pages.push(page);
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping page"),
        }
    }

    if pages.is_empty() {
        eprintln!("No readable pages found");
        return Ok(());
    }

    let resume = match args.resume {
        Some(path) => Some(progress::ReadingProgress::load(&path).map_err(io::Error::other)?),
        None => None,
    };

    run_tui(files, pages, cfg, resume)
}

fn run_tui(
    files: Vec<PathBuf>,
    pages: Vec<folio::page::Page>,
    cfg: config::Config,
    resume: Option<progress::ReadingProgress>,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let panes = ui::Panes::split(Rect::new(0, 0, size.width, size.height), &cfg);
    let result = app_state::AppState::new(files, pages, cfg, panes.content_size())
        .map_err(io::Error::other)
        .and_then(|mut app| {
            if let Some(progress) = resume {
                app.resume(progress);
            }
            run_app(&mut terminal, &mut app).map(|()| app)
        });

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match result {
        Ok(app) => {
            let json = serde_json::to_string_pretty(&app.reading_progress())
                .map_err(io::Error::other)?;
            println!("{json}");
        }
        Err(e) => eprintln!("Error: {e}"),
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
) -> io::Result<()> {
    let tick = Duration::from_millis(app.config().tick_ms.max(1));

    loop {
        let size = terminal.size()?;
        let panes = ui::Panes::split(Rect::new(0, 0, size.width, size.height), app.config());
        app.resize(panes.content_size());
        app.tick();
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key(app, key) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => app.scroll_by(3),
                MouseEventKind::ScrollUp => app.scroll_by(-3),
                _ => {}
            },
            _ => {}
        }
    }
}

/// Applies a key press, returning true when the reader should quit.
fn handle_key(app: &mut app_state::AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.page_by(1),
        KeyCode::PageUp => app.page_by(-1),
        KeyCode::Tab => app.toc_down(),
        KeyCode::BackTab => app.toc_up(),
        KeyCode::Enter => app.open_cursor(),
        KeyCode::Char('n') => app.next_section(),
        KeyCode::Home | KeyCode::Char('t') => app.back_to_top(),
        KeyCode::Char(']') => app.next_page(),
        KeyCode::Char('[') => app.prev_page(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(index) = c.to_digit(10).and_then(|d| usize::try_from(d - 1).ok()) {
                app.jump_to(index);
            }
        }
        _ => {}
    }
    false
}
