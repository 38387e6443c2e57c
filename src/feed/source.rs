//! Transport for the feed endpoints

use crate::feed::error::{FetchError, FetchResult};
use crate::feed::types::Endpoint;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Something that can return the raw body of a feed endpoint.
///
/// Implementations report transport and status failures; decoding is left
/// to the fetcher so every source gets the same payload validation.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Issue one read request and return the response body
    async fn get(&self, endpoint: Endpoint) -> FetchResult<Vec<u8>>;

    /// Human readable description used in logs
    fn describe(&self) -> String;
}

/// HTTP feed source backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: Client,
    base_url: Url,
}

impl HttpFeedSource {
    /// Create a source for the given API base URL
    pub fn new(base_url: &str) -> FetchResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| FetchError::invalid_url(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::invalid_url(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("stellarfeed/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::invalid_url(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Absolute URL of an endpoint
    pub fn endpoint_url(&self, endpoint: Endpoint) -> FetchResult<Url> {
        self.base_url
            .join(endpoint.path())
            .map_err(|e| FetchError::invalid_url(e.to_string()))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn get(&self, endpoint: Endpoint) -> FetchResult<Vec<u8>> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::network(endpoint, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(endpoint, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::network(endpoint, e.to_string()))?;

        tracing::debug!("{} returned {} bytes", endpoint, body.len());
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}
