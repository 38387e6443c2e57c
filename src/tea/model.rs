//! Application model following TEA pattern
//!
//! All state lives here and only `update` changes it.

use crate::feed::{FeedState, NewsArticle, NewsQuery};
use crate::routes::Route;
use crate::ui::toast::ToastManager;

/// Main application model containing all state
#[derive(Debug, Clone)]
pub struct Model {
    /// Application lifecycle state
    pub app_state: AppState,

    /// Page currently shown by the navigation shell
    pub route: Route,

    /// Fetched content and loading indicator
    pub feed: FeedState,

    /// News page search and selection
    pub news: NewsPageState,

    /// Scroll offsets of the Home and Poems bodies
    pub scroll: PageScroll,

    /// Toast notifications
    pub toasts: ToastManager,
}

impl Model {
    pub fn new(route: Route) -> Self {
        Self {
            app_state: AppState::default(),
            route,
            feed: FeedState::new(),
            news: NewsPageState::default(),
            scroll: PageScroll::default(),
            toasts: ToastManager::new(),
        }
    }

    /// Article under the news cursor
    pub fn selected_article(&self) -> Option<&NewsArticle> {
        self.news.selected_article(self.feed.news())
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

/// Application lifecycle state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Whether the application should quit
    pub should_quit: bool,

    /// A fan-out batch is outstanding
    pub fetch_in_flight: bool,

    /// Terminal dimensions
    pub terminal_size: (u16, u16),

    /// Loading spinner frame
    pub spinner_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            fetch_in_flight: false,
            terminal_size: (80, 24),
            spinner_frame: 0,
        }
    }
}

/// Rows scrolled past at the top of each scrollable page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageScroll {
    pub home: u16,
    pub poems: u16,
}

impl PageScroll {
    pub fn offset(&self, route: Route) -> u16 {
        match route {
            Route::Home => self.home,
            Route::Poems => self.poems,
            Route::News | Route::About => 0,
        }
    }

    /// Set the offset of `route`, clamped to `max`. Pages that do not scroll are left alone
    pub fn set(&mut self, route: Route, offset: u16, max: u16) {
        match route {
            Route::Home => self.home = offset.min(max),
            Route::Poems => self.poems = offset.min(max),
            Route::News | Route::About => {}
        }
    }
}

/// News page state: search term, derived matches and cursor
#[derive(Debug, Clone, Default)]
pub struct NewsPageState {
    /// Whether the search box has focus
    pub search_active: bool,

    term: String,
    matches: Vec<usize>,
    selected: usize,
}

impl NewsPageState {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn set_term(&mut self, term: impl Into<String>, news: &[NewsArticle]) {
        self.term = term.into();
        self.recompute(news);
    }

    pub fn push_char(&mut self, c: char, news: &[NewsArticle]) {
        self.term.push(c);
        self.recompute(news);
    }

    pub fn pop_char(&mut self, news: &[NewsArticle]) {
        if self.term.pop().is_some() {
            self.recompute(news);
        }
    }

    /// Rebuild the filtered view after the term or the list changed
    pub fn recompute(&mut self, news: &[NewsArticle]) {
        self.matches = NewsQuery::new(&self.term).positions(news);
        self.selected = self.selected.min(self.matches.len().saturating_sub(1));
    }

    /// Filtered articles in display order
    pub fn visible<'a>(&self, news: &'a [NewsArticle]) -> Vec<&'a NewsArticle> {
        self.matches.iter().filter_map(|&index| news.get(index)).collect()
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.matches.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_article<'a>(&self, news: &'a [NewsArticle]) -> Option<&'a NewsArticle> {
        self.matches.get(self.selected).and_then(|&index| news.get(index))
    }
}
