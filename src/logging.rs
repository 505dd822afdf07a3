// src/logging.rs

//! File-only tracing setup and the per-user directories shieldgrade writes to.
//!
//! The terminal belongs to the TUI, so nothing is logged to stdout or stderr.

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use std::path::PathBuf;
use tracing_error::ErrorLayer;
use tracing_subscriber::{self, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// `ProjectDirs` identity: `~/.local/share/shieldgrade` on Linux,
/// `~/Library/Application Support/dev.shieldgrade.shieldgrade` on macOS.
const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "shieldgrade";

lazy_static! {
    /// Prefix of every environment variable the tool reads (`SHIELDGRADE`).
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", *PROJECT_NAME);
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, env!("CARGO_PKG_NAME"))
}

/// Holds the log file and, unless configured otherwise, JSON exports.
pub fn get_data_dir() -> PathBuf {
    project_directory()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(".data"))
}

/// Holds the optional `config.json`.
pub fn get_config_dir() -> PathBuf {
    project_directory()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(".config"))
}

/// Filter directive: `RUST_LOG`, then `SHIELDGRADE_LOGLEVEL`, then info for this crate only.
fn log_directive<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup("RUST_LOG")
        .or_else(|| lookup(LOG_ENV.as_str()))
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| format!("{}=info", env!("CARGO_CRATE_NAME")))
}

/// Installs the subscriber and returns the path of the log file, which is
/// truncated on every start.
pub fn initialize_logging() -> Result<PathBuf> {
    let directory = get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = std::fs::File::create(&log_path)?;

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(log_directive(|key| std::env::var(key).ok())));

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .init();

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_names_derive_from_crate() {
        assert_eq!(PROJECT_NAME.as_str(), "SHIELDGRADE");
        assert_eq!(LOG_ENV.as_str(), "SHIELDGRADE_LOGLEVEL");
        assert_eq!(LOG_FILE.as_str(), "shieldgrade.log");
    }

    #[test]
    fn rust_log_takes_precedence() {
        let directive = log_directive(|key| match key {
            "RUST_LOG" => Some("debug".to_string()),
            "SHIELDGRADE_LOGLEVEL" => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(directive, "debug");
    }

    #[test]
    fn project_level_then_default() {
        let directive = log_directive(|key| (key == "SHIELDGRADE_LOGLEVEL").then(|| "trace".to_string()));
        assert_eq!(directive, "trace");
        assert_eq!(log_directive(|_| Some(" ".to_string())), "shieldgrade=info");
        assert_eq!(log_directive(|_| None), "shieldgrade=info");
    }
}
