//! Feed content types as served by the StellarFeed API

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One of the four fixed read endpoints that make up a feed snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    /// Astronomy picture of the day
    Apod,
    /// Ordered list of news articles
    News,
    /// Ordered list of poems
    Poems,
    /// Constellation of the day
    Constellation,
}

impl Endpoint {
    /// All endpoints in fan-out order
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Apod,
        Endpoint::News,
        Endpoint::Poems,
        Endpoint::Constellation,
    ];

    /// Path of the endpoint relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Apod => "/api/apod",
            Endpoint::News => "/api/news",
            Endpoint::Poems => "/api/poems",
            Endpoint::Constellation => "/api/constellation",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Astronomy picture of the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstronomyPicture {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub explanation: String,
    #[serde(rename = "url", alias = "imageUrl")]
    pub image_url: String,
}

/// Publisher of a news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSource {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// A single space news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(
        rename = "urlToImage",
        alias = "imageUrl",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<NewsSource>,
    #[serde(rename = "publishedAt", default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl NewsArticle {
    /// Create an article with only the fields the news page needs
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            image_url: image_url.into(),
            source: None,
            published_at: None,
        }
    }

    /// Name of the publisher, if the API reported one
    pub fn source_name(&self) -> Option<&str> {
        self.source
            .as_ref()
            .map(|source| source.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

/// A short space-themed poem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poem {
    pub text: String,
    pub author: String,
}

impl Poem {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Constellation of the day, kept exactly as the server sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Constellation(serde_json::Value);

impl Constellation {
    pub fn new(raw: serde_json::Value) -> Self {
        Self(raw)
    }

    /// The untouched JSON payload
    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Fully populated result of one successful fan-out batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedSnapshot {
    pub picture: AstronomyPicture,
    pub news: Vec<NewsArticle>,
    pub poems: Vec<Poem>,
    pub constellation: Constellation,
    pub fetched_at: DateTime<Local>,
}

impl FeedSnapshot {
    /// First poem of the batch, shown as the poem of the day
    pub fn poem_of_the_day(&self) -> Option<&Poem> {
        self.poems.first()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
