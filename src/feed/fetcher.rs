//! Concurrent fan-out fetch of the four feed endpoints

use crate::feed::error::{FetchError, FetchResult};
use crate::feed::retry::{RetryConfig, RetryPolicy};
use crate::feed::source::FeedSource;
use crate::feed::types::{AstronomyPicture, Constellation, Endpoint, FeedSnapshot, NewsArticle, Poem};
use chrono::Local;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds complete feed snapshots from a [`FeedSource`]
#[derive(Clone)]
pub struct FeedFetcher {
    source: Arc<dyn FeedSource>,
    request_timeout: Duration,
    retry: RetryPolicy,
}

impl FeedFetcher {
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        Self {
            source,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn with_retry(mut self, config: RetryConfig) -> Self {
        self.retry = RetryPolicy::new(config);
        self
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Fetch all four endpoints and assemble a snapshot.
    ///
    /// Either every request succeeds and a fully populated snapshot is returned,
    /// or the first failure is returned and nothing is produced. Retryable
    /// failures re-issue the whole batch.
    pub async fn fetch_all(&self) -> FetchResult<FeedSnapshot> {
        tracing::debug!("Fetching feed from {}", self.source.describe());

        let result = self.retry.run(|| self.fetch_batch()).await;
        match &result {
            Ok(snapshot) => tracing::info!(
                "Feed fetched: {} articles, {} poems",
                snapshot.news.len(),
                snapshot.poems.len()
            ),
            Err(e) => tracing::error!("Feed fetch failed: {}", e),
        }
        result
    }

    /// One attempt: all four requests start before any is awaited
    async fn fetch_batch(&self) -> FetchResult<FeedSnapshot> {
        let (picture, news, poems, constellation) = futures::try_join!(
            self.fetch_json::<AstronomyPicture>(Endpoint::Apod),
            self.fetch_json::<Vec<NewsArticle>>(Endpoint::News),
            self.fetch_json::<Vec<Poem>>(Endpoint::Poems),
            self.fetch_json::<Constellation>(Endpoint::Constellation),
        )?;

        Ok(FeedSnapshot {
            picture,
            news,
            poems,
            constellation,
            fetched_at: Local::now(),
        })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> FetchResult<T> {
        let body = timeout(self.request_timeout, self.source.get(endpoint))
            .await
            .map_err(|_| FetchError::timeout(endpoint, self.request_timeout))??;

        serde_json::from_slice(&body).map_err(|e| FetchError::decode(endpoint, e.to_string()))
    }
}
