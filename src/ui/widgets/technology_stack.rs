// src/ui/widgets/technology_stack.rs

use ratatui::prelude::*;

use crate::core::models::TechnologyRecord;
use crate::core::scanner::fingerprint_scanner::group_by_category;
use crate::ui::palette::{category_color, category_icon, section_title};

pub fn technology_lines(techs: &[TechnologyRecord]) -> Vec<Line<'static>> {
    let mut lines = vec![section_title("DETECTED TECHNOLOGIES")];
    if techs.is_empty() {
        lines.push(Line::from("Not identified."));
        return lines;
    }

    for (category, members) in group_by_category(techs) {
        let color = category_color(category);
        let mut title = category.to_string();
        if let Some(first) = title.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", category_icon(category)), Style::default().fg(color)),
            Span::styled(title, Style::default().bold()),
        ]));
        let names: Vec<Span<'static>> = members
            .iter()
            .flat_map(|tech| {
                let label = match &tech.version {
                    Some(v) => format!("{} ({v})", tech.name),
                    None => tech.name.clone(),
                };
                [Span::raw("  "), Span::styled(label, Style::default().fg(color))]
            })
            .collect();
        lines.push(Line::from(names));
    }
    lines
}
