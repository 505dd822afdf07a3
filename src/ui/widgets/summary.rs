// src/ui/widgets/summary.rs

use crate::app::App;
use crate::core::analyzer::{cookies, grade, headers};
use crate::core::knowledge_base::HEADERS;
use crate::ui::palette::{badge, grade_color, grade_icon};
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Highest score the grade calculator can hand out.
const MAX_SCORE: usize = grade::HTTPS_POINTS + 5;

/// Renders the grade panel and a short tally of the report.
///
/// Empty until an analysis has succeeded.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Summary");
    frame.render_widget(summary_container, area);

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Grade
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Tally
        ])
        .split(area);

    let Some(report) = app.report() else {
        return;
    };

    // --- Grade ---
    let style = Style::default().fg(grade_color(report.grade)).bold();
    let grade_text = Text::from(vec![
        Line::from(Span::styled(grade_icon(report.grade), style)),
        Line::from(Span::styled(report.grade.to_string(), style)),
        Line::from("Security Grade".fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(grade_text).alignment(Alignment::Center), summary_chunks[0]);

    // --- Tally ---
    let present = headers::present_graded_count(&report.headers);
    let score = grade::score(report.https, present);
    let all_present = report.headers.iter().filter(|h| headers::is_present(h)).count();
    let cookie_issues: usize = report.cookies.iter().map(|c| cookies::issues(c).len()).sum();

    let tally = vec![
        Line::from(format!("Score: {score}/{MAX_SCORE}")),
        Line::from(vec![Span::raw("HTTPS: "), badge(if report.https { "Yes" } else { "No" }, report.https)]),
        Line::from(format!("Headers present: {all_present}/{}", HEADERS.len())),
        Line::from(vec![
            Span::raw("Cookie issues: "),
            Span::styled(
                cookie_issues.to_string(),
                Style::default().fg(if cookie_issues == 0 { Color::Green } else { Color::Red }),
            ),
        ]),
        Line::from(format!("Technologies: {}", report.technologies.len())),
        Line::from(""),
        Line::from(Span::styled(
            format!("Analyzed {}", report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(tally), summary_chunks[2]);
}
