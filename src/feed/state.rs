//! Last known feed content plus the loading indicator

use crate::feed::error::FetchError;
use crate::feed::types::{AstronomyPicture, Constellation, FeedSnapshot, NewsArticle, Poem};
use chrono::{DateTime, Local};

/// Application-wide feed state.
///
/// Content only changes through [`FeedState::apply_snapshot`], which replaces
/// all four parts together. A failed fetch only touches the loading flag and
/// the error message.
#[derive(Debug, Clone)]
pub struct FeedState {
    picture: Option<AstronomyPicture>,
    news: Vec<NewsArticle>,
    poems: Vec<Poem>,
    constellation: Option<Constellation>,
    loading: bool,
    last_error: Option<String>,
    last_updated: Option<DateTime<Local>>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            picture: None,
            news: Vec::new(),
            poems: Vec::new(),
            constellation: None,
            loading: true,
            last_error: None,
            last_updated: None,
        }
    }
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fetch has been issued
    pub fn begin_refresh(&mut self) {
        self.loading = true;
        self.last_error = None;
    }

    /// Replace all content with a freshly fetched snapshot
    pub fn apply_snapshot(&mut self, snapshot: FeedSnapshot) {
        let FeedSnapshot {
            picture,
            news,
            poems,
            constellation,
            fetched_at,
        } = snapshot;

        self.picture = Some(picture);
        self.news = news;
        self.poems = poems;
        self.constellation = Some(constellation);
        self.loading = false;
        self.last_error = None;
        self.last_updated = Some(fetched_at);
    }

    /// Clear the loading indicator and keep whatever was displayed before
    pub fn record_failure(&mut self, error: &FetchError) {
        self.loading = false;
        self.last_error = Some(error.to_string());
    }

    pub fn picture(&self) -> Option<&AstronomyPicture> {
        self.picture.as_ref()
    }

    pub fn news(&self) -> &[NewsArticle] {
        &self.news
    }

    pub fn poems(&self) -> &[Poem] {
        &self.poems
    }

    pub fn constellation(&self) -> Option<&Constellation> {
        self.constellation.as_ref()
    }

    /// The first poem of the last snapshot
    pub fn poem_of_the_day(&self) -> Option<&Poem> {
        self.poems.first()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    /// Whether any snapshot has ever been applied
    pub fn has_content(&self) -> bool {
        self.last_updated.is_some()
    }
}
