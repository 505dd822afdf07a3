// src/core/analyzer/mod.rs

// Pure, read-only analysis over records produced by the scanners.
pub mod cookies;
pub mod grade;
pub mod headers;
