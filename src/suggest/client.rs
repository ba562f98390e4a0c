//! HTTP suggestion source
//!
//! `SuggestionSource` is the seam between the controller and the network.
//! `SuggestClient` is the reqwest implementation used by the binary.

use async_trait::async_trait;
use reqwest::Url;

use super::payload::parse_results;
use super::types::{SuggestError, Suggestion};
use crate::error::HinterError;

const USER_AGENT: &str = concat!("hinter/", env!("CARGO_PKG_VERSION"));

/// Anything that can answer "which suggestions match this value?"
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn fetch(&self, value: &str) -> Result<Vec<Suggestion>, SuggestError>;
}

/// reqwest-backed client for the `/autocomplete` endpoint
#[derive(Debug, Clone)]
pub struct SuggestClient {
    http: reqwest::Client,
    endpoint: String,
    param: String,
}

impl SuggestClient {
    /// Create a client for `endpoint`, sending the typed value as `param`
    ///
    /// The endpoint must be an absolute http(s) URL.
    pub fn new(endpoint: &str, param: &str) -> Result<Self, HinterError> {
        let url = Url::parse(endpoint).map_err(|e| HinterError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(HinterError::InvalidEndpoint {
                url: endpoint.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HinterError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            param: param.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the request URL for a typed value
    ///
    /// The value is percent-encoded so spaces, `&` and `#` in titles cannot
    /// break the query string.
    pub fn request_url(&self, value: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}={}",
            self.endpoint,
            separator,
            self.param,
            urlencoding::encode(value)
        )
    }
}

#[async_trait]
impl SuggestionSource for SuggestClient {
    async fn fetch(&self, value: &str) -> Result<Vec<Suggestion>, SuggestError> {
        let url = self.request_url(value);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        parse_results(&body)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
