// src/config.rs

//! Runtime configuration.
//!
//! Layers, later wins: built-in defaults, a JSON file (`--config` or
//! `<config dir>/config.json` when present), `SHIELDGRADE_*` environment
//! variables, then command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::cli::Cli;
use crate::core::models::ScanMode;
use crate::logging::{get_config_dir, PROJECT_NAME};

/// Relay used by live mode unless configured otherwise.
pub const DEFAULT_RELAY: &str = "https://corsproxy.io/?url=";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DELAY_MS: u64 = 1500;
pub const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: ScanMode,
    /// `None` sends live requests straight to the target.
    pub relay_url: Option<String>,
    pub timeout_secs: u64,
    pub simulated_delay_ms: u64,
    pub user_agent: String,
    /// Defaults to the platform data directory.
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: ScanMode::Synthetic,
            relay_url: Some(DEFAULT_RELAY.to_string()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            simulated_delay_ms: DEFAULT_DELAY_MS,
            user_agent: format!("Shieldgrade/{}", env!("CARGO_PKG_VERSION")),
            export_dir: None,
        }
    }
}

impl Config {
    /// Builds the effective configuration for this run.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = get_config_dir().join(CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    debug!(path = %default_path.display(), "No config file, using defaults.");
                    Self::default()
                }
            }
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_cli(cli);
        config.validate()?;
        info!(mode = %config.mode, relay = ?config.relay_url, "Configuration loaded.");
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `SHIELDGRADE_*` overrides read through `lookup`.
    ///
    /// An empty `SHIELDGRADE_RELAY` disables the relay.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = |suffix: &str| format!("{}_{}", *PROJECT_NAME, suffix);

        if let Some(value) = lookup(&key("MODE")) {
            self.mode = value.parse::<ScanMode>().map_err(|_| ConfigError::InvalidValue {
                key: key("MODE"),
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(&key("RELAY")) {
            self.relay_url = if value.trim().is_empty() { None } else { Some(value) };
        }
        if let Some(value) = lookup(&key("TIMEOUT")) {
            self.timeout_secs = parse_number(&key("TIMEOUT"), &value)?;
        }
        if let Some(value) = lookup(&key("DELAY_MS")) {
            self.simulated_delay_ms = parse_number(&key("DELAY_MS"), &value)?;
        }
        Ok(())
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(mode) = cli.mode {
            self.mode = mode;
        }
        if let Some(relay) = &cli.relay {
            self.relay_url = Some(relay.clone());
        }
        if cli.no_relay {
            self.relay_url = None;
        }
        if let Some(timeout) = cli.timeout {
            self.timeout_secs = timeout;
        }
        if let Some(delay) = cli.delay_ms {
            self.simulated_delay_ms = delay;
        }
        if let Some(dir) = &cli.export_dir {
            self.export_dir = Some(dir.clone());
        }
    }

    /// Normalizes and checks the merged layers.
    ///
    /// A blank relay from any layer means "no relay". A relay that is set must
    /// be an absolute http(s) URL, and the live timeout must be non-zero.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.relay_url = self
            .relay_url
            .take()
            .map(|relay| relay.trim().to_string())
            .filter(|relay| !relay.is_empty());

        if let Some(relay) = &self.relay_url {
            let invalid = || ConfigError::InvalidValue {
                key: "relay_url".to_string(),
                value: relay.clone(),
            };
            let parsed = Url::parse(relay).map_err(|_| invalid())?;
            if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
                return Err(invalid());
            }
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs".to_string(),
                value: self.timeout_secs.to_string(),
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.mode, ScanMode::Synthetic);
        assert_eq!(config.relay_url.as_deref(), Some(DEFAULT_RELAY));
        assert_eq!(config.simulated_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(env(&[
                ("SHIELDGRADE_MODE", "LIVE"),
                ("SHIELDGRADE_RELAY", ""),
                ("SHIELDGRADE_TIMEOUT", "3"),
            ]))
            .unwrap();
        assert_eq!(config.mode, ScanMode::Live);
        assert_eq!(config.relay_url, None);
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn env_rejects_garbage() {
        let mut config = Config::default();
        let err = config.apply_env(env(&[("SHIELDGRADE_DELAY_MS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        let err = config.apply_env(env(&[("SHIELDGRADE_MODE", "fast")])).unwrap_err();
        assert!(err.to_string().contains("SHIELDGRADE_MODE"));
    }

    #[test]
    fn cli_wins_over_env() {
        let mut config = Config::default();
        config.apply_env(env(&[("SHIELDGRADE_MODE", "live")])).unwrap();
        let cli = Cli { mode: Some(ScanMode::Synthetic), delay_ms: Some(0), ..Default::default() };
        config.apply_cli(&cli);
        assert_eq!(config.mode, ScanMode::Synthetic);
        assert_eq!(config.simulated_delay_ms, 0);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "mode": "live", "relay_url": null }}"#).unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.mode, ScanMode::Live);
        assert_eq!(config.relay_url, None);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    fn file_with(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    fn load_with(file: &tempfile::NamedTempFile, cli: Cli) -> Result<Config, ConfigError> {
        Config::load(&Cli { config: Some(file.path().to_path_buf()), ..cli })
    }

    #[test]
    fn blank_relay_in_file_means_no_relay() {
        let file = file_with(r#"{ "mode": "live", "relay_url": "   " }"#);
        let config = load_with(&file, Cli::default()).unwrap();
        assert_eq!(config.relay_url, None);
    }

    #[test]
    fn zero_timeout_in_file_is_rejected() {
        let file = file_with(r#"{ "mode": "live", "relay_url": "", "timeout_secs": 0 }"#);
        let err = load_with(&file, Cli::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "timeout_secs"));
    }

    #[test]
    fn relay_flag_must_be_an_http_url() {
        let file = file_with("{}");
        for relay in ["not-a-relay", "ftp://relay.test/?url="] {
            let cli = Cli { relay: Some(relay.to_string()), ..Default::default() };
            let err = load_with(&file, cli).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "relay_url"));
        }
    }

    #[test]
    fn empty_relay_flag_disables_relay() {
        let file = file_with("{}");
        let cli = Cli { relay: Some(String::new()), ..Default::default() };
        assert_eq!(load_with(&file, cli).unwrap().relay_url, None);
    }

    #[test]
    fn default_relay_passes_validation() {
        let mut config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.relay_url.as_deref(), Some(DEFAULT_RELAY));
    }

    #[test]
    fn malformed_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "mode = live").unwrap();
        assert!(matches!(Config::from_file(file.path()), Err(ConfigError::Parse { .. })));
    }
}
