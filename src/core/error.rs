//! Error types for analysis, fetching and export.
//!
//! Uses `thiserror`; the binary wraps these with `color_eyre` at the edge.

use thiserror::Error;

/// Errors surfaced while validating input, fetching headers or exporting a report.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The input field was empty.
    #[error("Please enter a URL")]
    EmptyInput,

    /// The input could not be parsed as an absolute URL.
    #[error("Please enter a valid URL")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL parsed but carries no host (e.g. `mailto:`).
    #[error("Please enter a valid URL: '{0}' has no host")]
    MissingHost(String),

    /// Only http and https targets can be analyzed.
    #[error("Please enter a valid URL: unsupported scheme '{0}'")]
    UnsupportedScheme(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// The HEAD request failed before a response arrived.
    #[error("Failed to fetch headers: {0}")]
    Fetch(String),

    /// The relay answered, but not with a success status.
    #[error("Relay returned HTTP {status} for {url}")]
    RelayStatus { status: u16, url: String },

    /// Writing the JSON export failed.
    #[error("Export failed: {0}")]
    Export(String),
}
