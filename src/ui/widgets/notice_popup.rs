// src/ui/widgets/notice_popup.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{Notice, NoticeKind};

/// Renders a transient notice in a small box near the top of the screen.
///
/// `Clear` wipes the popup area first so the report underneath does not bleed through.
pub fn render_notice_popup(frame: &mut Frame, notice: &Notice, area: Rect) {
    let (title, color) = match notice.kind {
        NoticeKind::Error => ("Error", Color::Red),
        NoticeKind::Info => ("Notice", Color::Green),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let popup_area = top_centered_rect(60, 5, area);
    let popup = Paragraph::new(notice.message.as_str())
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// A rectangle `percent_x` wide and `height` rows tall, centered horizontally
/// and placed just below the input box.
fn top_centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
