// src/core/scanner/headers_scanner.rs

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::Config;
use crate::core::error::ScanError;

/// Anything that can produce the response headers of a target URL.
///
/// Keys of the returned map are lowercase header names; a header that was not
/// sent is simply absent.
#[async_trait]
pub trait HeaderFetcher: Send + Sync {
    async fn fetch_headers(&self, target: &Url) -> Result<HashMap<String, String>, ScanError>;
}

/// Issues a single HEAD request, optionally routed through a relay.
///
/// With a relay prefix configured, the request goes to
/// `prefix + percent-encoded target`, mirroring how public CORS relays are
/// addressed. What comes back is whatever the relay forwards.
pub struct RelayFetcher {
    client: reqwest::Client,
    relay: Option<String>,
}

impl RelayFetcher {
    pub fn new(config: &Config) -> Result<Self, ScanError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                error!(error = %e, "Failed to build HTTP client for headers scan.");
                ScanError::ClientBuild(e.to_string())
            })?;
        Ok(Self {
            client,
            relay: config.relay_url.clone(),
        })
    }

    /// The URL the HEAD request is actually sent to.
    pub fn request_url(&self, target: &Url) -> String {
        match &self.relay {
            Some(prefix) => {
                let encoded: String =
                    url::form_urlencoded::byte_serialize(target.as_str().as_bytes()).collect();
                format!("{prefix}{encoded}")
            }
            None => target.to_string(),
        }
    }
}

#[async_trait]
impl HeaderFetcher for RelayFetcher {
    async fn fetch_headers(&self, target: &Url) -> Result<HashMap<String, String>, ScanError> {
        let url = self.request_url(target);
        info!(target = %target, via_relay = self.relay.is_some(), "Starting headers scan.");

        let response = self.client.head(&url).send().await.map_err(|e| {
            error!(url = %url, error = %e, "HTTP request failed for headers scan.");
            ScanError::Fetch(e.to_string())
        })?;

        let status = response.status();
        info!(status = %status, "Received HTTP response for headers scan.");
        if !status.is_success() {
            return Err(ScanError::RelayStatus {
                status: status.as_u16(),
                url,
            });
        }

        let headers = header_map_to_strings(response.headers());
        info!(count = headers.len(), "Headers scan finished.");
        Ok(headers)
    }
}

/// Flattens a `HeaderMap`; repeated headers are joined with ", ".
fn header_map_to_strings(headers: &HeaderMap) -> HashMap<String, String> {
    let mut out: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let value = match value.to_str() {
            Ok(s) => s.to_string(),
            Err(_) => {
                warn!(header_name = %name, "Header found but contained invalid UTF-8.");
                "[Invalid UTF-8]".to_string()
            }
        };
        debug!(header_name = %name, value = %value, "Header found.");
        out.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn fetcher(relay: Option<&str>) -> RelayFetcher {
        let config = Config {
            relay_url: relay.map(str::to_string),
            ..Config::default()
        };
        RelayFetcher::new(&config).unwrap()
    }

    #[test]
    fn relay_url_encodes_target() {
        let target = Url::parse("https://example.com/a?b=c").unwrap();
        assert_eq!(
            fetcher(Some("https://relay.test/?url=")).request_url(&target),
            "https://relay.test/?url=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc"
        );
    }

    #[test]
    fn direct_url_without_relay() {
        let target = Url::parse("https://example.com/").unwrap();
        assert_eq!(fetcher(None).request_url(&target), "https://example.com/");
    }

    #[test]
    fn repeated_headers_are_joined() {
        let mut map = HeaderMap::new();
        map.append("Vary", HeaderValue::from_static("Accept"));
        map.append("Vary", HeaderValue::from_static("Origin"));
        map.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
        let flat = header_map_to_strings(&map);
        assert_eq!(flat.get("vary").map(String::as_str), Some("Accept, Origin"));
        assert_eq!(flat.get("x-frame-options").map(String::as_str), Some("DENY"));
    }
}
