// src/ui/widgets/certificate_panel.rs

use ratatui::prelude::*;

use crate::core::models::CertificateRecord;
use crate::ui::palette::{badge, section_title, strength_color};

/// Certificates closer than this to expiry get a renewal alert.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

pub fn certificate_lines(cert: &CertificateRecord) -> Vec<Line<'static>> {
    let row = |label: &'static str, value: Span<'static>| {
        Line::from(vec![Span::raw(format!("{label:<20}")), value])
    };

    let mut lines = vec![
        section_title("SSL/TLS CERTIFICATE"),
        row("Status", badge(if cert.valid { "Valid" } else { "Invalid" }, cert.valid)),
        row("Issuer", Span::raw(cert.issuer.clone())),
        row("Protocol Version", Span::raw(cert.protocol.clone())),
        row(
            "Encryption Strength",
            Span::styled(cert.strength.to_string(), Style::default().fg(strength_color(cert.strength))),
        ),
        row("Expires", Span::raw(cert.expiration_date.clone())),
    ];

    if cert.days_until_expiration < EXPIRY_WARNING_DAYS {
        lines.push(Line::from(Span::styled(
            format!(
                "! Certificate expires in {} days. Consider renewal soon.",
                cert.days_until_expiration
            ),
            Style::default().fg(Color::Red),
        )));
    }
    lines
}
