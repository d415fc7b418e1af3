use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::doc::Document;

/// Render the full TUI frame.
pub fn draw(frame: &mut Frame, app: &mut App, doc: &Document) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(1),    // text area
            Constraint::Length(1), // help bar
        ])
        .split(frame.area());

    app.line_count = doc.len();
    // viewport_height = text area height minus 2 for the block borders
    app.viewport_height = chunks[1].height.saturating_sub(2) as usize;

    // Clamp scroll if the viewport grew (e.g. after a resize)
    if app.scroll > app.max_scroll() {
        app.scroll = app.max_scroll();
    }
    app.needs_layout = false;

    // ── Status bar ──────────────────────────────────────────────
    let percent = if doc.len() <= app.viewport_height {
        100
    } else {
        (app.scroll + app.viewport_height) * 100 / doc.len()
    };
    let status_text = format!(
        " {}  {} lines | line {} | {}%",
        doc.name,
        doc.len(),
        app.scroll + 1,
        percent,
    );
    let status_bar = Paragraph::new(Line::from(Span::styled(
        status_text,
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(Color::Cyan));
    frame.render_widget(status_bar, chunks[0]);

    // ── Text area ───────────────────────────────────────────────

    let visible: Vec<Line> = doc
        .window(app.scroll, app.viewport_height)
        .iter()
        .map(|l| Line::from(Span::raw(l.as_str())))
        .collect();

    let text_widget = Paragraph::new(visible).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", doc.name))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(text_widget, chunks[1]);

    // ── Help bar ────────────────────────────────────────────────
    let help = " q: quit | j/k: scroll | wheel: 3 lines (Ctrl: page) | PgUp/PgDn | Ctrl+0: top ";
    let help_bar = Paragraph::new(Line::from(Span::styled(
        help,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help_bar, chunks[2]);
}
