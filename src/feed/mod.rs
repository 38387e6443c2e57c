//! Feed data: content types, the fan-out fetcher, the news filter and the
//! single-owner feed state.

pub mod error;
pub mod fetcher;
pub mod filter;
pub mod retry;
pub mod source;
pub mod state;
pub mod testing;
pub mod types;

pub use error::{FetchError, FetchResult};
pub use fetcher::FeedFetcher;
pub use filter::{filter_news, NewsQuery};
pub use retry::{RetryConfig, RetryPolicy};
pub use source::{FeedSource, HttpFeedSource};
pub use state::FeedState;
pub use types::{AstronomyPicture, Constellation, Endpoint, FeedSnapshot, NewsArticle, NewsSource, Poem};
