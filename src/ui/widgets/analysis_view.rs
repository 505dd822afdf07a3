// src/ui/widgets/analysis_view.rs

use crate::app::{App, AnalysisState, SPINNER_CHARS};
use crate::core::models::SecurityReport;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
};

use super::{certificate_panel, cookie_table, headers_table, technology_stack};

/// All report sections stacked into one scrollable document.
pub fn report_lines(report: &SecurityReport) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("Target: ", Style::default().fg(Color::DarkGray)),
        Span::styled(report.url.clone(), Style::default().fg(Color::Yellow)),
        Span::styled(format!("  ({} mode)", report.mode), Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(""));
    lines.extend(headers_table::header_lines(&report.headers));
    lines.push(Line::from(""));
    lines.extend(certificate_panel::certificate_lines(&report.certificate));
    lines.push(Line::from(""));
    lines.extend(cookie_table::cookie_lines(&report.cookies));
    lines.push(Line::from(""));
    lines.extend(technology_stack::technology_lines(&report.technologies));
    lines
}

pub fn render_analysis_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Analysis Report (Navigate with ↑ ↓)");

    let lines = match &app.state {
        AnalysisState::Idle => {
            let p = Paragraph::new("Enter a URL (e.g. https://example.com) and press Enter to analyze.")
                .alignment(Alignment::Center)
                .block(main_block);
            frame.render_widget(p, area);
            return;
        }
        AnalysisState::Pending => {
            let spinner_char = SPINNER_CHARS[app.spinner_frame % SPINNER_CHARS.len()];
            let p = Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                Span::raw("Scanning... Please wait."),
            ]))
            .alignment(Alignment::Center)
            .block(main_block);
            frame.render_widget(p, area);
            return;
        }
        AnalysisState::Failed(message) => {
            let p = Paragraph::new(Text::from(vec![
                Line::from("Analysis failed".bold().fg(Color::Red)),
                Line::from(""),
                Line::from(message.clone()),
                Line::from(""),
                Line::from("Edit the URL and press Enter to try again."),
            ]))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(main_block);
            frame.render_widget(p, area);
            return;
        }
        AnalysisState::Succeeded(report) => report_lines(report),
    };

    let max_offset = lines.len().saturating_sub(1);
    if app.scroll_offset > max_offset {
        app.scroll_offset = max_offset;
    }
    app.report_scroll_state = app
        .report_scroll_state
        .content_length(lines.len())
        .position(app.scroll_offset);

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let offset = u16::try_from(app.scroll_offset).unwrap_or(u16::MAX);
    let report = Paragraph::new(lines).scroll((offset, 0));
    frame.render_widget(report, inner_area);

    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        area,
        &mut app.report_scroll_state,
    );
}
