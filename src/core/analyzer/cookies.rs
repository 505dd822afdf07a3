// src/core/analyzer/cookies.rs

use crate::core::models::{CookieRecord, SameSite};

pub const MISSING_SECURE: &str = "Missing Secure flag";
pub const MISSING_HTTP_ONLY: &str = "Missing HttpOnly flag";
pub const WEAK_SAME_SITE: &str = "SameSite attribute should be set to Strict or Lax";

/// Lists the security issues of a cookie.
///
/// The three checks are independent and always reported in this order:
/// Secure, HttpOnly, SameSite.
pub fn issues(cookie: &CookieRecord) -> Vec<&'static str> {
    let mut issues = Vec::new();
    if !cookie.secure {
        issues.push(MISSING_SECURE);
    }
    if !cookie.http_only {
        issues.push(MISSING_HTTP_ONLY);
    }
    if !same_site_ok(cookie) {
        issues.push(WEAK_SAME_SITE);
    }
    issues
}

/// `true` for `Strict` and `Lax`; absent or `None` is not acceptable.
pub fn same_site_ok(cookie: &CookieRecord) -> bool {
    matches!(cookie.same_site, Some(SameSite::Strict | SameSite::Lax))
}

pub fn has_vulnerable_cookies(cookies: &[CookieRecord]) -> bool {
    cookies.iter().any(|c| !issues(c).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie(secure: bool, http_only: bool, same_site: Option<SameSite>) -> CookieRecord {
        CookieRecord {
            name: "session".into(),
            secure,
            http_only,
            same_site,
            expires: None,
        }
    }

    #[test]
    fn insecure_cookie_reports_all_three_in_order() {
        assert_eq!(
            issues(&cookie(false, false, None)),
            vec![MISSING_SECURE, MISSING_HTTP_ONLY, WEAK_SAME_SITE]
        );
    }

    #[test]
    fn hardened_cookie_has_no_issues() {
        assert!(issues(&cookie(true, true, Some(SameSite::Strict))).is_empty());
        assert!(issues(&cookie(true, true, Some(SameSite::Lax))).is_empty());
    }

    #[test]
    fn same_site_none_is_flagged() {
        assert_eq!(issues(&cookie(true, true, Some(SameSite::None))), vec![WEAK_SAME_SITE]);
    }

    #[test]
    fn checks_are_independent() {
        assert_eq!(issues(&cookie(true, false, Some(SameSite::Lax))), vec![MISSING_HTTP_ONLY]);
        assert_eq!(issues(&cookie(false, true, Some(SameSite::Strict))), vec![MISSING_SECURE]);
    }

    #[test]
    fn vulnerable_if_any_cookie_has_issues() {
        let good = cookie(true, true, Some(SameSite::Strict));
        assert!(!has_vulnerable_cookies(&[good.clone()]));
        assert!(has_vulnerable_cookies(&[good, cookie(true, true, None)]));
        assert!(!has_vulnerable_cookies(&[]));
    }
}
