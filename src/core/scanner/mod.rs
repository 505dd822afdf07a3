// src/core/scanner/mod.rs

pub mod fingerprint_scanner;
pub mod headers_scanner;
pub mod synthetic_scanner;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info};
use url::Url;

use crate::config::Config;
use crate::core::analyzer::{grade, headers};
use crate::core::error::ScanError;
use crate::core::models::{ScanMode, SecurityReport};
use self::fingerprint_scanner::detect_technologies;
use self::headers_scanner::HeaderFetcher;
use self::synthetic_scanner::{
    frontend_hints, synthetic_certificate, synthetic_cookies, synthetic_headers, HostProfile,
};

/// Validates raw user input as an absolute http(s) URL with a host.
pub fn parse_target(input: &str) -> Result<Url, ScanError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ScanError::EmptyInput);
    }
    let url = Url::parse(input)?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(ScanError::UnsupportedScheme(other.to_string())),
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ScanError::MissingHost(input.to_string()));
    }
    Ok(url)
}

/// Runs one analysis of `target` in the configured mode.
///
/// Synthetic mode never touches `fetcher`; it only waits out the simulated
/// latency. Live mode makes exactly one call to `fetcher`. In both modes the
/// certificate and cookies are synthesized.
pub async fn run_analysis(
    target: &Url,
    config: &Config,
    fetcher: &dyn HeaderFetcher,
) -> Result<SecurityReport, ScanError> {
    info!(target = %target, mode = %config.mode, "Starting analysis.");

    let header_map = match config.mode {
        ScanMode::Synthetic => {
            tokio::time::sleep(config.simulated_delay()).await;
            None
        }
        ScanMode::Live => Some(fetcher.fetch_headers(target).await?),
    };

    let report = assemble_report(target, config.mode, header_map, &mut rand::thread_rng(), Utc::now());
    info!(grade = %report.grade, "Analysis finished.");
    Ok(report)
}

/// Builds a full report. `header_map` is `None` for synthetic mode, in which
/// case headers are synthesized from the hostname as well.
pub fn assemble_report<R: Rng + ?Sized>(
    target: &Url,
    mode: ScanMode,
    header_map: Option<HashMap<String, String>>,
    rng: &mut R,
    now: DateTime<Utc>,
) -> SecurityReport {
    let https = target.scheme() == "https";
    let profile = HostProfile::new(target.host_str().unwrap_or_default(), https);
    let today = now.date_naive();

    let (header_map, mut technologies) = match header_map {
        Some(map) => {
            let techs = detect_technologies(&map);
            (map, techs)
        }
        None => {
            let map = synthetic_headers(&profile);
            let mut techs = detect_technologies(&map);
            techs.extend(frontend_hints(&profile));
            (map, techs)
        }
    };
    technologies.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));

    let security_headers = headers::classify(headers::records_from_map(&header_map));
    let present = headers::present_graded_count(&security_headers);
    let grade = grade::grade(https, present);
    debug!(https, present, score = grade::score(https, present), "Computed grade.");

    SecurityReport {
        url: target.to_string(),
        https,
        mode,
        headers: security_headers,
        cookies: synthetic_cookies(&profile, today),
        certificate: synthetic_certificate(&profile, rng, today),
        technologies,
        grade,
        analyzed_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z").unwrap().with_timezone(&Utc)
    }

    fn synthetic(url: &str) -> SecurityReport {
        let url = Url::parse(url).unwrap();
        assemble_report(&url, ScanMode::Synthetic, None, &mut StdRng::seed_from_u64(9), now())
    }

    #[test]
    fn parse_target_rejects_garbage() {
        assert!(matches!(parse_target("not a url"), Err(ScanError::InvalidUrl(_))));
        assert!(matches!(parse_target("   "), Err(ScanError::EmptyInput)));
        assert!(matches!(parse_target("ftp://example.com"), Err(ScanError::UnsupportedScheme(_))));
        assert!(matches!(parse_target("example.com"), Err(ScanError::InvalidUrl(_))));
    }

    #[test]
    fn parse_target_accepts_http_and_https() {
        assert_eq!(parse_target(" https://example.com ").unwrap().host_str(), Some("example.com"));
        assert!(parse_target("http://localhost:8080/x").is_ok());
    }

    #[test]
    fn synthetic_grades_follow_hostname() {
        assert_eq!(synthetic("https://www.google.com").grade, Grade::APlus);
        assert_eq!(synthetic("https://example.com").grade, Grade::B);
        assert_eq!(synthetic("http://example.com").grade, Grade::D);
    }

    #[test]
    fn synthetic_report_is_deterministic() {
        assert_eq!(synthetic("https://example.org"), synthetic("https://example.org"));
    }

    #[test]
    fn live_headers_drive_the_grade() {
        let url = Url::parse("https://example.com").unwrap();
        let map: HashMap<String, String> = [
            ("strict-transport-security", "max-age=1"),
            ("content-security-policy", "default-src 'self'"),
            ("x-frame-options", "DENY"),
            ("server", "nginx/1.25.3"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let report = assemble_report(&url, ScanMode::Live, Some(map), &mut StdRng::seed_from_u64(1), now());
        assert_eq!(report.grade, Grade::A);
        assert_eq!(report.technologies.len(), 1);
        assert_eq!(report.technologies[0].version.as_deref(), Some("1.25.3"));
        assert_eq!(report.mode, ScanMode::Live);
    }
}
