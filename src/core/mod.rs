// src/core/mod.rs

/// Data structures shared by scanners, analyzers and the UI.
pub mod models;

/// Error type for validation, fetching and export.
pub mod error;

/// Pure analysis: header classification, cookie flags, letter grade.
pub mod analyzer;

/// Produces the records of a report, synthetically or from a live fetch.
pub mod scanner;

/// Catalogue of recognized security headers and their remediation advice.
pub mod knowledge_base;

/// JSON export of a finished report.
pub mod export;
