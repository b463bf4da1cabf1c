//! HTTP client for fetching the gallery index.
//!
//! The index is a static JSON array served at a fixed path; every reveal
//! fetches it fresh with a single plain GET - no caching, no retry, no
//! timeout, no extra headers.

use super::models::{IndexEntry, RevealError};

/// Anything that can produce a gallery index.
///
/// The seam between the reveal component and the transport; hosts use
/// [`GalleryClient`], tests substitute fakes.
pub trait IndexSource {
    fn fetch_index(&self) -> Result<Vec<IndexEntry>, RevealError>;
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the gallery index
    pub index_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            index_url: "http://localhost:8000/index.json".to_string(),
        }
    }
}

/// `ureq`-backed index source.
#[derive(Clone)]
pub struct GalleryClient {
    config: ClientConfig,
    agent: ureq::Agent,
}

impl GalleryClient {
    /// Create a new client for the configured index location
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            agent: ureq::Agent::new(),
        }
    }

    /// The URL this client fetches
    pub fn index_url(&self) -> &str {
        &self.config.index_url
    }
}

impl IndexSource for GalleryClient {
    fn fetch_index(&self) -> Result<Vec<IndexEntry>, RevealError> {
        // Body read failures count as fetch failures; only JSON decoding
        // of a fully-received body is a parse failure.
        let body = self
            .agent
            .get(&self.config.index_url)
            .call()
            .map_err(|e| RevealError::Fetch(e.to_string()))?
            .into_string()
            .map_err(|e| RevealError::Fetch(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| RevealError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_index_json() {
        let config = ClientConfig::default();
        assert!(config.index_url.ends_with("/index.json"));
    }

    #[test]
    fn test_client_reports_configured_url() {
        let client = GalleryClient::new(ClientConfig {
            index_url: "http://example.test/index.json".to_string(),
        });
        assert_eq!(client.index_url(), "http://example.test/index.json");
    }

    #[test]
    fn test_index_body_decodes() {
        let entries: Vec<IndexEntry> =
            serde_json::from_str(r#"[{"url":"a.png"},{"url":"b.png"}]"#).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].url, "b.png");
    }

    #[test]
    fn test_non_array_body_is_a_parse_failure() {
        let result: Result<Vec<IndexEntry>, _> = serde_json::from_str("{\"oops\":1}");
        assert!(result.is_err());
    }
}
