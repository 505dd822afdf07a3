// src/ui/widgets/footer.rs

use crate::app::{AnalysisState, App};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = match app.state {
        AnalysisState::Idle | AnalysisState::Failed(_) => Line::from(vec![
            Span::raw("Press "),
            key("Enter"),
            Span::raw(" to analyze, "),
            key("Esc"),
            Span::raw(" to dismiss, "),
            key("Q"),
            Span::raw(" (empty field) or "),
            key("Ctrl-C"),
            Span::raw(" to quit."),
        ]),
        AnalysisState::Succeeded(_) => Line::from(vec![
            key("[N]"),
            Span::raw("ew Analysis, "),
            key("[E]"),
            Span::raw("xport JSON, "),
            key("[Q]"),
            Span::raw("uit"),
        ]),
        AnalysisState::Pending => Line::from("Scanning... Press Q to quit."),
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
