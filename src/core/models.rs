// src/core/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

// --- Header Models ---

/// A single recognized security header as observed on the target.
///
/// The header is considered present iff `value` is `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityHeaderRecord {
    pub name: String,
    pub value: Option<String>,
    pub description: String,
}

// --- Cookie Models ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

/// A cookie and its security-relevant attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieRecord {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: Option<SameSite>,
    /// `None` means a session cookie.
    pub expires: Option<String>,
}

// --- Certificate Models ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum CertStrength {
    Weak,
    Moderate,
    Strong,
}

/// Summary of the (simulated) TLS certificate of the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub valid: bool,
    pub issuer: String,
    pub expiration_date: String,
    pub days_until_expiration: i64,
    pub protocol: String,
    pub strength: CertStrength,
}

// --- Technology Models ---

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TechCategory {
    Server,
    Frontend,
    Security,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TechnologyRecord {
    pub name: String,
    pub category: TechCategory,
    pub version: Option<String>,
}

// --- Grade ---

/// Letter grade summarizing HTTPS and header posture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display)]
pub enum Grade {
    #[strum(serialize = "A+")]
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
}

// --- Main Report ---

/// Where the header data of a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ScanMode {
    /// Everything derived from the URL string, no network access.
    Synthetic,
    /// Headers read from a single HEAD request, the rest synthesized.
    Live,
}

/// Everything produced by one analysis. Replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityReport {
    pub url: String,
    pub https: bool,
    pub mode: ScanMode,
    pub headers: Vec<SecurityHeaderRecord>,
    pub cookies: Vec<CookieRecord>,
    pub certificate: CertificateRecord,
    pub technologies: Vec<TechnologyRecord>,
    pub grade: Grade,
    pub analyzed_at: DateTime<Utc>,
}
