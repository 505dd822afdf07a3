// src/cli.rs

use std::path::PathBuf;

use clap::Parser;

use crate::core::models::ScanMode;

/// Terminal security-header scanner with letter grading.
#[derive(Debug, Default, Parser)]
#[command(name = "shieldgrade", version, about)]
pub struct Cli {
    /// URL to analyze as soon as the interface opens.
    pub url: Option<String>,

    /// Where header data comes from.
    #[arg(long, value_enum)]
    pub mode: Option<ScanMode>,

    /// Relay prefix for live mode; the encoded target URL is appended.
    #[arg(long, conflicts_with = "no_relay")]
    pub relay: Option<String>,

    /// Send the live HEAD request straight to the target.
    #[arg(long)]
    pub no_relay: bool,

    /// HTTP timeout in seconds for live mode.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Simulated latency in milliseconds for synthetic mode.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Path to a JSON config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory JSON exports are written to.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}
