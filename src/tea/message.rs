//! Central message type for StellarFeed following the TEA pattern
//!
//! Key presses, ticks and fetch results all arrive here and are applied to
//! the model by `update`.

use crate::feed::{FeedSnapshot, FetchError};
use crate::routes::Route;

/// Main application message type
#[derive(Debug, Clone)]
pub enum Message {
    /// System-level messages
    System(SystemMessage),

    /// Navigation and shell messages
    UI(UIMessage),

    /// News page search and selection
    News(NewsMessage),

    /// Feed fetch lifecycle
    Feed(FeedMessage),
}

/// System-level messages for application lifecycle
#[derive(Debug, Clone)]
pub enum SystemMessage {
    /// Application should quit
    Quit,

    /// Shell mounted: show the start page and issue the first fetch
    Initialize(Route),

    /// Tick for spinner animation and toast expiry
    Tick,

    /// Terminal resized
    Resize(u16, u16),
}

/// Shell messages
#[derive(Debug, Clone)]
pub enum UIMessage {
    /// Navigate to a page
    Navigate(Route),

    /// Next tab in the navigation bar
    NextPage,

    /// Previous tab in the navigation bar
    PreviousPage,

    /// Scroll the current page body down by this many rows
    ScrollDown(u16),

    /// Scroll the current page body up by this many rows
    ScrollUp(u16),

    /// Show toast notification
    ShowToast(String, ToastLevel),
}

/// News page messages
#[derive(Debug, Clone)]
pub enum NewsMessage {
    /// Focus the search box
    StartSearch,

    /// Leave the search box, keeping the term
    EndSearch,

    /// Character typed into the search box
    SearchInput(char),

    /// Remove the last character of the term
    SearchBackspace,

    /// Clear the term
    SearchClear,

    /// Move the selection down
    SelectNext,

    /// Move the selection up
    SelectPrevious,

    /// Open the selected article in the browser
    OpenSelected,
}

/// Feed fetch messages
#[derive(Debug, Clone)]
pub enum FeedMessage {
    /// Issue a new fan-out batch
    Refresh,

    /// All four requests succeeded
    Loaded(Box<FeedSnapshot>),

    /// The batch failed
    Failed(FetchError),
}

/// Toast notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}
