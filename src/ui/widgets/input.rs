// src/ui/widgets/input.rs
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};
use crate::app::App;

/// Renders the URL field. The cursor is only shown while the field is editable.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.is_pending() { "Target URL (scanning...)" } else { "Target URL" };
    let input_block = Block::default().borders(Borders::ALL).title(title);
    let color = if app.accepts_input() { Color::Yellow } else { Color::DarkGray };
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(color));
    frame.render_widget(input_paragraph, area);

    if app.accepts_input() {
        let width = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
        frame.set_cursor_position((area.x.saturating_add(width).saturating_add(1), area.y + 1));
    }
}
