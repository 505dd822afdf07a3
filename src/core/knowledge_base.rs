//! Static catalogue of the security headers the analyzer recognizes.
//! Each entry carries the human-readable description shown in the headers table
//! and the remediation text shown when the header is missing.

use std::fmt;

/// Generic advice returned for header names outside the catalogue.
pub const FALLBACK_RECOMMENDATION: &str =
    "Consider implementing this security header based on your application's needs";

/// Whether a header contributes a point to the letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderWeight {
    /// Counts toward the grade.
    Graded,
    /// Reported and recommended, but not scored.
    Advisory,
}

impl fmt::Display for HeaderWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderWeight::Graded => write!(f, "graded"),
            HeaderWeight::Advisory => write!(f, "advisory"),
        }
    }
}

/// Everything known about one recognized security header.
pub struct HeaderDetail {
    /// Canonical header name as it is displayed (e.g. "X-Frame-Options").
    pub name: &'static str,
    /// One-line explanation of what the header does.
    pub description: &'static str,
    /// Actionable advice shown when the header is missing.
    pub recommendation: &'static str,
    pub weight: HeaderWeight,
}

/// The recognized headers, in display order.
pub static HEADERS: &[HeaderDetail] = &[
    HeaderDetail {
        name: "Strict-Transport-Security",
        description: "Ensures secure HTTPS connection",
        recommendation: "Add 'Strict-Transport-Security: max-age=31536000; includeSubDomains' to force HTTPS connections",
        weight: HeaderWeight::Graded,
    },
    HeaderDetail {
        name: "Content-Security-Policy",
        description: "Controls resources the user agent is allowed to load",
        recommendation: "Implement a Content Security Policy to prevent XSS attacks. Start with 'default-src 'self'' and gradually add required sources",
        weight: HeaderWeight::Graded,
    },
    HeaderDetail {
        name: "X-Frame-Options",
        description: "Prevents clickjacking attacks",
        recommendation: "Set 'X-Frame-Options: DENY' to prevent clickjacking attacks, or 'SAMEORIGIN' if frame embedding is needed",
        weight: HeaderWeight::Graded,
    },
    HeaderDetail {
        name: "X-Content-Type-Options",
        description: "Prevents MIME type sniffing",
        recommendation: "Add 'X-Content-Type-Options: nosniff' to prevent MIME type sniffing",
        weight: HeaderWeight::Graded,
    },
    HeaderDetail {
        name: "Referrer-Policy",
        description: "Controls how much referrer information is sent with requests",
        recommendation: "Set 'Referrer-Policy: strict-origin-when-cross-origin' to control information in the Referer header",
        weight: HeaderWeight::Graded,
    },
    HeaderDetail {
        name: "Permissions-Policy",
        description: "Restricts which browser features the page may use",
        recommendation: "Implement Permissions-Policy to control browser features. Example: 'camera=(), microphone=(), geolocation=()'",
        weight: HeaderWeight::Advisory,
    },
];

/// Looks up a recognized header by name, ignoring ASCII case.
pub fn get_header_detail(name: &str) -> Option<&'static HeaderDetail> {
    HEADERS.iter().find(|h| h.name.eq_ignore_ascii_case(name))
}

/// Returns the remediation advice for `name`, or the generic fallback.
pub fn recommend(name: &str) -> &'static str {
    get_header_detail(name)
        .map(|h| h.recommendation)
        .unwrap_or(FALLBACK_RECOMMENDATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommend_known_header() {
        assert_eq!(
            recommend("X-Frame-Options"),
            "Set 'X-Frame-Options: DENY' to prevent clickjacking attacks, or 'SAMEORIGIN' if frame embedding is needed"
        );
    }

    #[test]
    fn recommend_is_case_insensitive() {
        assert_eq!(recommend("x-frame-options"), recommend("X-Frame-Options"));
    }

    #[test]
    fn recommend_unknown_header_falls_back() {
        assert_eq!(recommend("Unknown-Header"), FALLBACK_RECOMMENDATION);
        assert_eq!(recommend(""), FALLBACK_RECOMMENDATION);
    }

    #[test]
    fn five_headers_are_graded() {
        let graded = HEADERS.iter().filter(|h| h.weight == HeaderWeight::Graded).count();
        assert_eq!(graded, 5);
        assert_eq!(
            get_header_detail("Permissions-Policy").map(|h| h.weight),
            Some(HeaderWeight::Advisory)
        );
    }
}
