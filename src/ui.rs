//! The UI renders the watched document next to its navigation menu.
//!
//! The menu pane lists section titles with the focused one highlighted,
//! which is the whole point of the demo: scroll the content pane and watch
//! the highlight follow. The content pane shows the document from the
//! current scroll offset, with the debug focus line overlaid when enabled.

use crate::app_state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Rows available to the content pane in a terminal of the given height.
///
/// Three rows go to the help bar and two to the content pane's borders;
/// keep in step with the constraints in [`draw`].
#[must_use]
pub fn content_rows(height: u16) -> i64 {
    i64::from(height.saturating_sub(5))
}

/// Renders the menu, the document and the help bar.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(app.menu_width), Constraint::Min(0)])
        .split(chunks[0]);

    draw_menu(f, app, panes[0]);
    draw_content(f, app, panes[1]);
    draw_help(f, app, chunks[1]);
}

fn draw_menu(f: &mut Frame, app: &AppState, area: Rect) {
    let active = app.active.get();
    let multi_active = app.multi_active.borrow();

    let items: Vec<ListItem> = app
        .doc
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let indent = "  ".repeat(section.level.saturating_sub(1));
            let line = Line::from(vec![Span::raw(indent), Span::raw(section.title.clone())]);

            let style = if active == Some(i) {
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else if multi_active.contains(&i) {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!("Sections ({})", app.doc.sections.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

#[allow(clippy::cast_possible_wrap)]
fn draw_content(f: &mut Frame, app: &AppState, area: Rect) {
    let first = usize::try_from(app.scroll_top).unwrap_or(0);
    let rows = usize::from(area.height.saturating_sub(2));
    let focus_line_row = app.focus_line_row.get();

    let lines: Vec<Line> = app
        .doc
        .lines
        .iter()
        .enumerate()
        .skip(first)
        .take(rows)
        .map(|(row, text)| {
            let mut line = if text.starts_with('#') {
                Line::from(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(text.clone())
            };

            if focus_line_row == Some(row as i64) {
                line = line.style(Style::default().bg(Color::Yellow).fg(Color::Black));
            }
            line
        })
        .collect();

    let title = format!(
        "Document (row {}/{})",
        app.scroll_top,
        app.doc.lines.len()
    );
    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(content, area);
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let help = if app.watcher.is_paused() {
        "↑/↓/PgUp/PgDn/Home/End: Scroll | p: Resume (PAUSED) | q: Quit"
    } else {
        "↑/↓/PgUp/PgDn/Home/End: Scroll | p: Pause | q: Quit"
    };

    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, area);
}
