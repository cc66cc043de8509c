//! HTTP gateway to the external verse-search service.
//!
//! The matcher only needs one read-only call: a full-text query returning
//! hits with per-word highlight flags. [`VerseSearch`] is the seam; the
//! production implementation is [`QuranSearchClient`], and tests substitute
//! synthetic gateways.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::types::SearchHit;

/// Endpoint configuration for the verse-search service.
///
/// Only collaborator-owned endpoint settings live here; scoring thresholds
/// are fixed constants in [`crate::matcher`] and deliberately not
/// configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the verse-search API.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Number of hits requested per query.
    pub page_size: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.quran.com/api/v4".to_string(),
            timeout_secs: 10,
            page_size: 10,
        }
    }
}

impl SearchConfig {
    /// Validates the configuration before a client is built from it.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.base_url.trim().is_empty() {
            return Err(SearchError::InvalidConfig(
                "base_url must not be empty".into(),
            ));
        }
        if self.page_size == 0 {
            return Err(SearchError::InvalidConfig(
                "page_size must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Errors produced by the search gateway.
///
/// These never reach the matcher's caller: the orchestrator logs them and
/// treats the call as having returned no results.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid endpoint configuration.
    #[error("invalid search config: {0}")]
    InvalidConfig(String),
    /// Network failure, timeout, or non-success HTTP status.
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Response body was not the expected JSON shape.
    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read-only full-text verse search.
#[async_trait]
pub trait VerseSearch: Send + Sync {
    /// Returns candidate hits for a trimmed query, in relevance order.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}

/// Client for the hosted verse-search endpoint.
///
/// Holds one pooled `reqwest::Client`; cheap to share across concurrent
/// calls.
#[derive(Debug, Clone)]
pub struct QuranSearchClient {
    client: reqwest::Client,
    config: SearchConfig,
}

impl QuranSearchClient {
    /// Builds a client after validating the configuration.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl VerseSearch for QuranSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let size = self.config.page_size.to_string();
        debug!(query_chars = query.chars().count(), "verse_search_request");

        let body = self
            .client
            .get(&url)
            .query(&[("q", query), ("size", size.as_str()), ("page", "1")])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let hits = parse_search_response(&body)?;
        debug!(hits = hits.len(), "verse_search_response");
        Ok(hits)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    search: SearchBody,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(default)]
    results: Vec<SearchHit>,
}

fn parse_search_response(body: &str) -> Result<Vec<SearchHit>, SearchError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.search.results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharType;

    #[test]
    fn default_config_is_valid() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_base_url_rejected() {
        let cfg = SearchConfig {
            base_url: "  ".into(),
            ..SearchConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SearchError::InvalidConfig(msg)) if msg.contains("base_url")
        ));
    }

    #[test]
    fn zero_page_size_rejected() {
        let cfg = SearchConfig {
            page_size: 0,
            ..SearchConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SearchError::InvalidConfig(msg)) if msg.contains("page_size")
        ));
    }

    #[test]
    fn parses_typical_response() {
        let body = r#"{
            "search": {
                "query": "الحمد لله",
                "results": [
                    {
                        "verse_key": "1:2",
                        "text": "الحمد لله رب العالمين",
                        "words": [
                            {"char_type": "word", "highlighted": true},
                            {"char_type": "word", "highlighted": true},
                            {"char_type": "word"},
                            {"char_type": "word"},
                            {"char_type": "end"}
                        ]
                    }
                ]
            }
        }"#;
        let hits = parse_search_response(body).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].verse_key, "1:2");
        assert_eq!(hits[0].words.len(), 5);
        assert!(hits[0].words[0].is_highlighted());
        assert!(!hits[0].words[2].is_highlighted());
        assert_eq!(hits[0].words[4].char_type, CharType::Other);
    }

    #[test]
    fn empty_results_parse_as_no_hits() {
        let hits = parse_search_response(r#"{"search":{"results":[]}}"#).unwrap();
        assert!(hits.is_empty());
        let hits = parse_search_response(r#"{"search":{}}"#).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(
            parse_search_response("not json"),
            Err(SearchError::Decode(_))
        ));
        assert!(matches!(
            parse_search_response(r#"{"unexpected":true}"#),
            Err(SearchError::Decode(_))
        ));
    }
}
