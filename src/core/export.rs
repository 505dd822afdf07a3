// src/core/export.rs

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::core::error::ScanError;
use crate::core::models::SecurityReport;

/// File name for a report: host plus analysis timestamp.
pub fn export_file_name(report: &SecurityReport) -> String {
    let host = url::Url::parse(&report.url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| "report".to_string());
    let safe_host: String = host
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect();
    format!("{}-{}.json", safe_host, report.analyzed_at.format("%Y%m%dT%H%M%SZ"))
}

/// Writes `report` as pretty JSON into `dir`, creating it if needed.
pub fn export_report(report: &SecurityReport, dir: &Path) -> Result<PathBuf, ScanError> {
    std::fs::create_dir_all(dir).map_err(|e| ScanError::Export(e.to_string()))?;
    let path = dir.join(export_file_name(report));
    let json = serde_json::to_string_pretty(report).map_err(|e| ScanError::Export(e.to_string()))?;
    std::fs::write(&path, json).map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to write export.");
        ScanError::Export(e.to_string())
    })?;
    info!(path = %path.display(), "Report exported.");
    Ok(path)
}
