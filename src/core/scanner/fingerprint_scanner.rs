// src/core/scanner/fingerprint_scanner.rs

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::core::models::{TechCategory, TechnologyRecord};

/// A rule that detects a technology from a single response header.
struct FingerprintRule<'a> {
    tech_name: &'a str,
    category: TechCategory,
    /// Lowercase header name the pattern is applied to.
    header: &'a str,
    /// The first capture group, if any, is taken as the version.
    pattern: &'a Lazy<Regex>,
}

static RE_NGINX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)nginx(?:/([\d\.]+))?").unwrap());
static RE_APACHE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)apache(?:/([\d\.]+))?").unwrap());
static RE_IIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)microsoft-iis(?:/([\d\.]+))?").unwrap());
static RE_LITESPEED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)litespeed").unwrap());
static RE_GWS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i)gws$").unwrap());
static RE_GITHUB: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)github\.com").unwrap());
static RE_CLOUDFLARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)cloudflare").unwrap());
static RE_ANY: Lazy<Regex> = Lazy::new(|| Regex::new(r".+").unwrap());
static RE_PHP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)php(?:/([\d\.]+))?").unwrap());
static RE_EXPRESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)express").unwrap());
static RE_ASPNET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)asp\.net").unwrap());
static RE_NEXTJS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)next\.js(?:\s+([\d\.]+))?").unwrap());
static RE_VARNISH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)varnish").unwrap());

static RULES: &[FingerprintRule] = &[
    FingerprintRule { tech_name: "Nginx", category: TechCategory::Server, header: "server", pattern: &RE_NGINX },
    FingerprintRule { tech_name: "Apache", category: TechCategory::Server, header: "server", pattern: &RE_APACHE },
    FingerprintRule { tech_name: "IIS", category: TechCategory::Server, header: "server", pattern: &RE_IIS },
    FingerprintRule { tech_name: "LiteSpeed", category: TechCategory::Server, header: "server", pattern: &RE_LITESPEED },
    FingerprintRule { tech_name: "Google Web Server", category: TechCategory::Server, header: "server", pattern: &RE_GWS },
    FingerprintRule { tech_name: "GitHub Pages", category: TechCategory::Server, header: "server", pattern: &RE_GITHUB },
    FingerprintRule { tech_name: "Cloudflare", category: TechCategory::Security, header: "server", pattern: &RE_CLOUDFLARE },
    FingerprintRule { tech_name: "Cloudflare", category: TechCategory::Security, header: "cf-ray", pattern: &RE_ANY },
    FingerprintRule { tech_name: "PHP", category: TechCategory::Other, header: "x-powered-by", pattern: &RE_PHP },
    FingerprintRule { tech_name: "Express", category: TechCategory::Server, header: "x-powered-by", pattern: &RE_EXPRESS },
    FingerprintRule { tech_name: "ASP.NET", category: TechCategory::Server, header: "x-powered-by", pattern: &RE_ASPNET },
    FingerprintRule { tech_name: "ASP.NET", category: TechCategory::Server, header: "x-aspnet-version", pattern: &RE_ANY },
    FingerprintRule { tech_name: "Next.js", category: TechCategory::Frontend, header: "x-powered-by", pattern: &RE_NEXTJS },
    FingerprintRule { tech_name: "Varnish", category: TechCategory::Other, header: "via", pattern: &RE_VARNISH },
];

/// Identifies technologies from response headers.
///
/// Keys of `headers` are matched case-insensitively. A technology matched by
/// several rules is reported once, keeping the first version found. The result
/// is sorted by category, then name.
pub fn detect_technologies(headers: &HashMap<String, String>) -> Vec<TechnologyRecord> {
    let lowered: HashMap<String, &str> = headers
        .iter()
        .map(|(k, v)| (k.to_ascii_lowercase(), v.as_str()))
        .collect();

    let mut found: HashMap<&str, TechnologyRecord> = HashMap::new();

    debug!(total_rules = %RULES.len(), "Applying fingerprinting rules.");
    for rule in RULES {
        let Some(version) = check_with_regex(lowered.get(rule.header).copied(), rule.pattern) else {
            continue;
        };
        debug!(tech = %rule.tech_name, version = ?version, "Rule matched.");
        match found.get_mut(rule.tech_name) {
            Some(existing) => {
                if existing.version.is_none() && version.is_some() {
                    existing.version = version;
                }
            }
            None => {
                found.insert(
                    rule.tech_name,
                    TechnologyRecord {
                        name: rule.tech_name.to_string(),
                        category: rule.category,
                        version,
                    },
                );
            }
        }
    }

    let mut techs: Vec<TechnologyRecord> = found.into_values().collect();
    techs.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
    techs
}

/// `Some(version)` on match, where the version is the first non-empty capture.
fn check_with_regex(text: Option<&str>, re: &Regex) -> Option<Option<String>> {
    text.and_then(|text| {
        re.captures(text).map(|caps| {
            caps.get(1)
                .map(|m| m.as_str().to_string())
                .filter(|s| !s.is_empty())
        })
    })
}

/// Groups technologies by category, in category order.
pub fn group_by_category(techs: &[TechnologyRecord]) -> Vec<(TechCategory, Vec<&TechnologyRecord>)> {
    let mut groups: Vec<(TechCategory, Vec<&TechnologyRecord>)> = Vec::new();
    for tech in techs {
        match groups.iter_mut().find(|(c, _)| *c == tech.category) {
            Some((_, members)) => members.push(tech),
            None => groups.push((tech.category, vec![tech])),
        }
    }
    groups.sort_by_key(|(c, _)| *c);
    groups
}
