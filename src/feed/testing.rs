//! Scripted feed source for tests

use crate::feed::error::{FetchError, FetchResult};
use crate::feed::source::FeedSource;
use crate::feed::types::Endpoint;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

/// Canned response for one request
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Respond with this body
    Body(Vec<u8>),
    /// Fail with this error
    Error(FetchError),
    /// Wait before answering with the inner response
    Delayed(Duration, Box<MockResponse>),
}

impl MockResponse {
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Body(value.to_string().into_bytes())
    }

    pub fn text(body: &str) -> Self {
        MockResponse::Body(body.as_bytes().to_vec())
    }

    pub fn delayed(self, delay: Duration) -> Self {
        MockResponse::Delayed(delay, Box::new(self))
    }
}

/// Feed source answering from per-endpoint scripts.
///
/// Each endpoint has a queue of responses; once only one response is left it
/// is repeated for every further call.
#[derive(Debug, Default)]
pub struct MockFeedSource {
    scripts: Mutex<HashMap<Endpoint, VecDeque<MockResponse>>>,
    calls: Mutex<Vec<Endpoint>>,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source where every endpoint returns a small valid payload
    pub fn healthy() -> Self {
        Self::new()
            .respond(Endpoint::Apod, MockResponse::json(sample_apod()))
            .respond(Endpoint::News, MockResponse::json(sample_news()))
            .respond(Endpoint::Poems, MockResponse::json(sample_poems()))
            .respond(Endpoint::Constellation, MockResponse::json(sample_constellation()))
    }

    /// Replace the script of an endpoint with a single repeating response
    pub fn respond(self, endpoint: Endpoint, response: MockResponse) -> Self {
        self.lock_scripts()
            .insert(endpoint, VecDeque::from(vec![response]));
        self
    }

    /// Replace the script of an endpoint with a sequence of responses
    pub fn respond_sequence(self, endpoint: Endpoint, responses: Vec<MockResponse>) -> Self {
        self.lock_scripts()
            .insert(endpoint, VecDeque::from(responses));
        self
    }

    /// Number of requests made to an endpoint
    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.lock_calls().iter().filter(|&&e| e == endpoint).count()
    }

    /// Number of requests made in total
    pub fn total_calls(&self) -> usize {
        self.lock_calls().len()
    }

    fn next_response(&self, endpoint: Endpoint) -> MockResponse {
        let mut scripts = self.lock_scripts();
        match scripts.get_mut(&endpoint) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_else(|| missing(endpoint)),
            Some(queue) => queue.front().cloned().unwrap_or_else(|| missing(endpoint)),
            None => missing(endpoint),
        }
    }

    fn lock_scripts(&self) -> std::sync::MutexGuard<'_, HashMap<Endpoint, VecDeque<MockResponse>>> {
        self.scripts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<Endpoint>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn get(&self, endpoint: Endpoint) -> FetchResult<Vec<u8>> {
        self.lock_calls().push(endpoint);

        let mut response = self.next_response(endpoint);
        loop {
            match response {
                MockResponse::Body(body) => return Ok(body),
                MockResponse::Error(error) => return Err(error),
                MockResponse::Delayed(delay, inner) => {
                    tokio::time::sleep(delay).await;
                    response = *inner;
                }
            }
        }
    }

    fn describe(&self) -> String {
        "mock feed source".to_string()
    }
}

fn missing(endpoint: Endpoint) -> MockResponse {
    MockResponse::Error(FetchError::status(endpoint, 404))
}

pub fn sample_apod() -> serde_json::Value {
    serde_json::json!({
        "title": "The Pillars of Creation",
        "url": "https://apod.nasa.gov/apod/image/pillars.jpg",
        "explanation": "Towers of cold gas and dust in the Eagle Nebula."
    })
}

pub fn sample_news() -> serde_json::Value {
    serde_json::json!([
        {
            "source": {"id": null, "name": "Space.com"},
            "title": "Mars Rover Lands",
            "description": "NASA",
            "url": "https://news.example/mars",
            "urlToImage": "https://news.example/mars.jpg",
            "publishedAt": "2024-05-01T10:00:00Z"
        },
        {
            "source": {"id": null, "name": "Sky News"},
            "title": "Jupiter Moons",
            "description": "new discovery",
            "url": "https://news.example/jupiter",
            "urlToImage": null,
            "publishedAt": "2024-05-02T08:30:00Z"
        }
    ])
}

pub fn sample_poems() -> serde_json::Value {
    serde_json::json!([
        {"text": "The night unfolds its silver map", "author": "Gemini AI"},
        {"text": "I have loved the stars too fondly to be fearful of the night", "author": "Sarah Williams"}
    ])
}

pub fn sample_constellation() -> serde_json::Value {
    serde_json::json!({"name": "Orion", "abbreviation": "Ori", "brightest_star": "Rigel"})
}
