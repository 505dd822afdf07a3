// src/ui/widgets/headers_table.rs

use ratatui::prelude::*;

use crate::core::analyzer::headers::{is_present, missing};
use crate::core::knowledge_base::{get_header_detail, recommend, HeaderWeight};
use crate::core::models::SecurityHeaderRecord;
use crate::ui::palette::section_title;

const NAME_WIDTH: usize = 27;

/// One status row per header, followed by a recommendation alert per missing header.
pub fn header_lines(headers: &[SecurityHeaderRecord]) -> Vec<Line<'static>> {
    let mut lines = vec![section_title("SECURITY HEADERS")];

    for header in headers {
        let status = if is_present(header) {
            Span::styled("✓ Present ", Style::default().fg(Color::Green))
        } else {
            Span::styled("✗ Missing ", Style::default().fg(Color::Red))
        };
        let mut row = vec![
            status,
            Span::styled(format!("{:<NAME_WIDTH$}", header.name), Style::default().bold()),
            Span::styled(header.description.clone(), Style::default().fg(Color::DarkGray)),
        ];
        // Advisory headers are shown but do not move the grade.
        if let Some(detail) = get_header_detail(&header.name).filter(|d| d.weight == HeaderWeight::Advisory) {
            row.push(Span::styled(format!(" ({})", detail.weight), Style::default().fg(Color::DarkGray).italic()));
        }
        lines.push(Line::from(row));
        if let Some(value) = &header.value {
            lines.push(Line::from(Span::styled(
                format!("           {value}"),
                Style::default().fg(Color::Cyan),
            )));
        }
    }

    let missing: Vec<_> = missing(headers).collect();
    if !missing.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_title("RECOMMENDATIONS"));
        for header in missing {
            lines.push(Line::from(vec![
                Span::styled("! ", Style::default().fg(Color::Red).bold()),
                Span::styled(format!("{}: ", header.name), Style::default().bold()),
                Span::raw(recommend(&header.name)),
            ]));
        }
    }
    lines
}
