// src/core/scanner/synthetic_scanner.rs

//! Derives plausible scan data from nothing but the URL string.
//!
//! Every decision is a substring check on the lowercased hostname, except the
//! certificate expiry which is drawn uniformly from [1, 365] days. The random
//! source and the current date are passed in so callers (and tests) control them.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use rand::Rng;
use tracing::debug;

use crate::core::models::{
    CertStrength, CertificateRecord, CookieRecord, SameSite, TechCategory, TechnologyRecord,
};

pub const MIN_EXPIRY_DAYS: i64 = 1;
pub const MAX_EXPIRY_DAYS: i64 = 365;

/// Hostname hints that switch the generator to its "well-run site" profile.
const POPULAR_HOSTS: &[&str] = &["google", "facebook", "cloudflare", "github"];

/// What the generator knows about a host, computed once per analysis.
#[derive(Debug, Clone)]
pub struct HostProfile {
    host: String,
    pub https: bool,
}

impl HostProfile {
    pub fn new(host: &str, https: bool) -> Self {
        Self { host: host.to_ascii_lowercase(), https }
    }

    fn contains(&self, needle: &str) -> bool {
        self.host.contains(needle)
    }

    fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.contains(n))
    }

    pub fn is_popular(&self) -> bool {
        self.contains_any(POPULAR_HOSTS)
    }
}

/// Synthesizes the response headers a host of this profile would plausibly send.
pub fn synthetic_headers(profile: &HostProfile) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    let mut set = |name: &str, value: &str| {
        headers.insert(name.to_string(), value.to_string());
    };

    if profile.https {
        if profile.is_popular() {
            set("strict-transport-security", "max-age=31536000; includeSubDomains; preload");
        } else {
            set("strict-transport-security", "max-age=31536000");
        }
    }
    if profile.contains_any(&["google", "facebook", "github"]) {
        set("content-security-policy", "default-src 'self'");
    }
    if profile.is_popular() {
        set("x-frame-options", "SAMEORIGIN");
    }
    set("x-content-type-options", "nosniff");
    if profile.contains_any(&["google", "cloudflare", "github"]) {
        set("referrer-policy", "strict-origin-when-cross-origin");
    }
    if profile.contains("google") {
        set("permissions-policy", "camera=(), microphone=(), geolocation=()");
    }

    let server = if profile.contains("google") {
        "gws"
    } else if profile.contains("cloudflare") {
        "cloudflare"
    } else if profile.contains("github") {
        "GitHub.com"
    } else if profile.contains("facebook") {
        ""
    } else {
        "nginx/1.24.0"
    };
    if !server.is_empty() {
        set("server", server);
    }

    debug!(host = %profile.host, count = headers.len(), "Synthesized headers.");
    headers
}

/// Frontend technologies guessed from the hostname alone.
pub fn frontend_hints(profile: &HostProfile) -> Vec<TechnologyRecord> {
    let (name, version) = if profile.contains("facebook") {
        ("React", Some("18.2.0"))
    } else if profile.contains("google") {
        ("Angular", Some("17.1.0"))
    } else if profile.contains("github") {
        ("Catalyst", None)
    } else {
        ("jQuery", Some("3.6.0"))
    };
    vec![TechnologyRecord {
        name: name.to_string(),
        category: TechCategory::Frontend,
        version: version.map(str::to_string),
    }]
}

/// Simulated certificate; only the expiry draw is random.
pub fn synthetic_certificate<R: Rng + ?Sized>(
    profile: &HostProfile,
    rng: &mut R,
    today: NaiveDate,
) -> CertificateRecord {
    let days = rng.gen_range(MIN_EXPIRY_DAYS..=MAX_EXPIRY_DAYS);

    let issuer = if profile.contains("google") {
        "Google Trust Services"
    } else if profile.contains("cloudflare") {
        "Cloudflare Inc ECC CA-3"
    } else if profile.contains("facebook") {
        "DigiCert Inc"
    } else if profile.contains("github") {
        "Sectigo Limited"
    } else if profile.https {
        "Let's Encrypt"
    } else {
        "None"
    };

    let (protocol, strength) = match (profile.https, profile.is_popular()) {
        (false, _) => ("None", CertStrength::Weak),
        (true, true) => ("TLS 1.3", CertStrength::Strong),
        (true, false) => ("TLS 1.2", CertStrength::Moderate),
    };

    CertificateRecord {
        valid: profile.https,
        issuer: issuer.to_string(),
        expiration_date: date_after(today, days),
        days_until_expiration: days,
        protocol: protocol.to_string(),
        strength,
    }
}

/// Simulated cookie jar; well-run hosts get hardened cookies.
pub fn synthetic_cookies(profile: &HostProfile, today: NaiveDate) -> Vec<CookieRecord> {
    if profile.is_popular() {
        vec![
            CookieRecord {
                name: "session_id".into(),
                secure: profile.https,
                http_only: true,
                same_site: Some(SameSite::Strict),
                expires: None,
            },
            CookieRecord {
                name: "preferences".into(),
                secure: profile.https,
                http_only: false,
                same_site: Some(SameSite::Lax),
                expires: Some(date_after(today, 30)),
            },
        ]
    } else {
        vec![
            CookieRecord {
                name: "session_id".into(),
                secure: profile.https,
                http_only: true,
                same_site: Some(SameSite::Lax),
                expires: None,
            },
            CookieRecord {
                name: "_ga".into(),
                secure: false,
                http_only: false,
                same_site: None,
                expires: Some(date_after(today, 730)),
            },
            CookieRecord {
                name: "tracking".into(),
                secure: profile.https,
                http_only: false,
                same_site: Some(SameSite::None),
                expires: Some(date_after(today, 365)),
            },
        ]
    }
}

fn date_after(today: NaiveDate, days: i64) -> String {
    let days = u64::try_from(days).unwrap_or(0);
    today
        .checked_add_days(Days::new(days))
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn plain_host_gets_baseline_headers() {
        let headers = synthetic_headers(&HostProfile::new("example.com", true));
        assert_eq!(headers.get("strict-transport-security").map(String::as_str), Some("max-age=31536000"));
        assert_eq!(headers.get("x-content-type-options").map(String::as_str), Some("nosniff"));
        assert!(!headers.contains_key("content-security-policy"));
        assert!(!headers.contains_key("x-frame-options"));
    }

    #[test]
    fn plain_http_has_no_hsts() {
        let headers = synthetic_headers(&HostProfile::new("example.com", false));
        assert!(!headers.contains_key("strict-transport-security"));
    }

    #[test]
    fn popular_host_detection_ignores_case() {
        let profile = HostProfile::new("WWW.Google.com", true);
        assert!(profile.is_popular());
        assert!(synthetic_headers(&profile).contains_key("permissions-policy"));
    }

    #[test]
    fn expiry_draw_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let profile = HostProfile::new("example.com", true);
        for _ in 0..500 {
            let cert = synthetic_certificate(&profile, &mut rng, today());
            assert!((MIN_EXPIRY_DAYS..=MAX_EXPIRY_DAYS).contains(&cert.days_until_expiration));
        }
    }

    #[test]
    fn same_seed_same_certificate() {
        let profile = HostProfile::new("example.com", true);
        let a = synthetic_certificate(&profile, &mut StdRng::seed_from_u64(42), today());
        let b = synthetic_certificate(&profile, &mut StdRng::seed_from_u64(42), today());
        assert_eq!(a, b);
    }

    #[test]
    fn expiration_date_matches_day_count() {
        let profile = HostProfile::new("example.com", true);
        let cert = synthetic_certificate(&profile, &mut StdRng::seed_from_u64(1), today());
        let expected = today()
            .checked_add_days(Days::new(cert.days_until_expiration as u64))
            .unwrap()
            .format("%Y-%m-%d")
            .to_string();
        assert_eq!(cert.expiration_date, expected);
    }

    #[test]
    fn certificate_strength_follows_profile() {
        let mut rng = StdRng::seed_from_u64(3);
        let http = synthetic_certificate(&HostProfile::new("example.com", false), &mut rng, today());
        assert!(!http.valid);
        assert_eq!(http.strength, CertStrength::Weak);
        let popular = synthetic_certificate(&HostProfile::new("cloudflare.com", true), &mut rng, today());
        assert_eq!(popular.strength, CertStrength::Strong);
        assert_eq!(popular.protocol, "TLS 1.3");
        assert_eq!(popular.issuer, "Cloudflare Inc ECC CA-3");
    }

    #[test]
    fn plain_host_cookies_include_a_session_cookie() {
        let cookies = synthetic_cookies(&HostProfile::new("example.com", true), today());
        assert_eq!(cookies.len(), 3);
        assert_eq!(cookies[0].expires, None);
        assert_eq!(cookies[1].expires.as_deref(), Some("2025-12-31"));
    }

    #[test]
    fn hints_for_facebook() {
        let hints = frontend_hints(&HostProfile::new("facebook.com", true));
        assert_eq!(hints[0].name, "React");
    }
}
