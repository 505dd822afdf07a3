// src/ui/palette.rs

//! Fixed color and icon mappings for the enumerated report fields.

use ratatui::prelude::*;

use crate::core::models::{CertStrength, Grade, TechCategory};

pub fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::APlus | Grade::A => Color::Green,
        Grade::B | Grade::C => Color::Yellow,
        Grade::D => Color::Red,
    }
}

pub fn grade_icon(grade: Grade) -> &'static str {
    match grade {
        Grade::APlus | Grade::A => "✔",
        Grade::B | Grade::C => "◆",
        Grade::D => "✗",
    }
}

pub fn strength_color(strength: CertStrength) -> Color {
    match strength {
        CertStrength::Strong => Color::Green,
        CertStrength::Moderate => Color::Yellow,
        CertStrength::Weak => Color::Red,
    }
}

pub fn category_icon(category: TechCategory) -> &'static str {
    match category {
        TechCategory::Server => "■",
        TechCategory::Frontend => "●",
        TechCategory::Security => "◆",
        TechCategory::Other => "▲",
    }
}

pub fn category_color(category: TechCategory) -> Color {
    match category {
        TechCategory::Server => Color::Blue,
        TechCategory::Frontend => Color::Green,
        TechCategory::Security => Color::Magenta,
        TechCategory::Other => Color::Gray,
    }
}

/// A pass/fail badge: green when `ok`, red otherwise.
pub fn badge(text: impl Into<String>, ok: bool) -> Span<'static> {
    let color = if ok { Color::Green } else { Color::Red };
    Span::styled(format!("[{}]", text.into()), Style::default().fg(color).bold())
}

pub fn section_title(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, Style::default().bold().underlined()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn grade_colors_group_letters() {
        assert_eq!(grade_color(Grade::APlus), grade_color(Grade::A));
        assert_eq!(grade_color(Grade::B), grade_color(Grade::C));
        assert_eq!(grade_color(Grade::D), Color::Red);
    }

    #[test]
    fn every_category_has_a_distinct_icon() {
        let icons: std::collections::HashSet<_> = TechCategory::iter().map(category_icon).collect();
        assert_eq!(icons.len(), TechCategory::iter().count());
    }

    #[test]
    fn badge_wraps_text() {
        assert_eq!(badge("Yes", true).content, "[Yes]");
        assert_eq!(badge("No", false).style.fg, Some(Color::Red));
    }
}
