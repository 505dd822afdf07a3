// src/ui/widgets/cookie_table.rs

use ratatui::prelude::*;

use crate::core::analyzer::cookies::{has_vulnerable_cookies, issues, same_site_ok};
use crate::core::models::CookieRecord;
use crate::ui::palette::{badge, section_title};

/// Column widths of the table, badges included.
const NAME_COL: usize = 16;
const SECURE_COL: usize = 9;
const HTTP_ONLY_COL: usize = 11;
const SAME_SITE_COL: usize = 12;

/// Widest badge text per column ("Yes"/"No", "Not Set").
const FLAG_TEXT: usize = 3;
const SAME_SITE_TEXT: usize = 7;

fn yes_no(flag: bool) -> String {
    format!("{:<FLAG_TEXT$}", if flag { "Yes" } else { "No" })
}

/// Fills what a badge (text plus brackets) leaves of its column.
fn gap(column: usize, text: usize) -> Span<'static> {
    Span::raw(" ".repeat(column.saturating_sub(text + 2)))
}

/// Cookie flags table, then one alert per cookie with issues.
pub fn cookie_lines(cookies: &[CookieRecord]) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_title("COOKIES"),
        Line::from(Span::styled(
            format!(
                "{:<NAME_COL$}{:<SECURE_COL$}{:<HTTP_ONLY_COL$}{:<SAME_SITE_COL$}{}",
                "Cookie Name", "Secure", "HttpOnly", "SameSite", "Expires"
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if cookies.is_empty() {
        lines.push(Line::from("No cookies observed."));
        return lines;
    }

    for cookie in cookies {
        let same_site = cookie
            .same_site
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Not Set".to_string());
        lines.push(Line::from(vec![
            Span::styled(format!("{:<NAME_COL$}", cookie.name), Style::default().bold()),
            badge(yes_no(cookie.secure), cookie.secure),
            gap(SECURE_COL, FLAG_TEXT),
            badge(yes_no(cookie.http_only), cookie.http_only),
            gap(HTTP_ONLY_COL, FLAG_TEXT),
            badge(format!("{same_site:<SAME_SITE_TEXT$}"), same_site_ok(cookie)),
            gap(SAME_SITE_COL, SAME_SITE_TEXT),
            Span::raw(cookie.expires.clone().unwrap_or_else(|| "Session".to_string())),
        ]));
    }

    if has_vulnerable_cookies(cookies) {
        lines.push(Line::from(""));
        for cookie in cookies {
            let found = issues(cookie);
            if found.is_empty() {
                continue;
            }
            lines.push(Line::from(vec![
                Span::styled("! ", Style::default().fg(Color::Red).bold()),
                Span::styled(format!("{}: ", cookie.name), Style::default().bold()),
                Span::styled(found.join(", "), Style::default().fg(Color::Red)),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::cookies::{MISSING_HTTP_ONLY, MISSING_SECURE};
    use crate::core::models::SameSite;

    fn flat(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn one_alert_per_vulnerable_cookie() {
        let cookies = vec![
            CookieRecord {
                name: "session_id".into(),
                secure: true,
                http_only: true,
                same_site: Some(SameSite::Strict),
                expires: None,
            },
            CookieRecord {
                name: "_ga".into(),
                secure: false,
                http_only: false,
                same_site: Some(SameSite::Lax),
                expires: Some("2025-01-01".into()),
            },
        ];
        let rows = flat(&cookie_lines(&cookies));
        let alerts: Vec<_> = rows.iter().filter(|r| r.starts_with("! ")).collect();
        assert_eq!(alerts.len(), 1);
        assert_eq!(*alerts[0], format!("! _ga: {MISSING_SECURE}, {MISSING_HTTP_ONLY}"));
        assert!(rows.iter().any(|r| r.contains("Session")));
    }

    #[test]
    fn columns_line_up_with_header() {
        let cookies = vec![
            CookieRecord {
                name: "a".into(),
                secure: true,
                http_only: false,
                same_site: None,
                expires: Some("2030-01-01".into()),
            },
            CookieRecord {
                name: "b".into(),
                secure: false,
                http_only: true,
                same_site: Some(SameSite::Lax),
                expires: None,
            },
        ];
        let rows = flat(&cookie_lines(&cookies));
        let header = &rows[1];
        for (column, row_value) in [("SameSite", "[Not Set]"), ("Expires", "2030-01-01")] {
            assert_eq!(header.find(column), rows[2].find(row_value), "{column}");
        }
        assert_eq!(header.find("HttpOnly"), rows[3].find("[Yes]"));
        assert_eq!(header.find("SameSite"), rows[3].find("[Lax"));
        assert_eq!(header.find("Expires"), rows[3].find("Session"));
    }
}
