//! scrollwatch: watch a scrolling document and highlight the focused section.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use scrollwatch::app_state::AppState;
use scrollwatch::config::Config;
use scrollwatch::document::Document;
use scrollwatch::formats::markdown::MarkdownFormat;
use scrollwatch::ui;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scrollwatch")]
#[command(about = "Watch a scrolling document and resolve the focused section", long_about = None)]
struct Args {
    /// Markdown document to watch
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Override the resolution mode: height, focus-line or none
    #[arg(long, short = 'r')]
    resolution: Option<String>,

    /// Forward every overlap candidate instead of resolving one
    #[arg(long)]
    multi: bool,

    /// Highlight the focus line while line resolution runs
    #[arg(long)]
    debug_focus_line: bool,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut cfg = Config::load();

    // Override config with command line args
    if let Some(resolution) = args.resolution {
        cfg.resolution = resolution;
    }

    let doc = Document::load(&args.file, &MarkdownFormat)?;

    if doc.sections.is_empty() {
        eprintln!("No sections found in document");
        return Ok(());
    }

    let app = AppState::new(doc, &cfg, args.multi, args.debug_focus_line)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    run_tui(app)
}

fn run_tui(mut app: AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    } else {
        let json =
            serde_json::to_string_pretty(&*app.trail.borrow()).map_err(io::Error::other)?;
        println!("{json}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        let size = terminal.size()?;
        app.set_viewport_rows(ui::content_rows(size.height));
        app.sync()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Up => app.scroll_by(-1),
                KeyCode::Down => app.scroll_by(1),
                KeyCode::PageUp => app.page_up(),
                KeyCode::PageDown => app.page_down(),
                KeyCode::Home => app.scroll_to_top(),
                KeyCode::End => app.scroll_to_bottom(),
                KeyCode::Char('p') => app
                    .toggle_pause()
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
                _ => {}
            },
            Event::Resize(_, height) => app.set_viewport_rows(ui::content_rows(height)),
            _ => {}
        }
    }
}
