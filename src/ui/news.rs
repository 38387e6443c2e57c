use crate::feed::{FeedState, NewsArticle};
use crate::tea::model::NewsPageState;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub const NEWS_HEADING: &str = "Latest Space News";
pub const NO_NEWS_MESSAGE: &str = "No news available.";
pub const NO_RESULTS_MESSAGE: &str = "No articles found for your search.";
pub const SEARCH_PLACEHOLDER: &str = "Search for articles...";

/// What the news page can show.
///
/// An empty feed and a search without hits are different states.
#[derive(Debug, PartialEq)]
pub enum NewsView<'a> {
    /// The feed has no articles at all
    NoNews,
    /// Articles exist but none match the term
    NoResults { term: &'a str },
    /// Matching articles in feed order
    Articles(Vec<&'a NewsArticle>),
}

pub fn news_view<'a>(feed: &'a FeedState, page: &'a NewsPageState) -> NewsView<'a> {
    if feed.news().is_empty() {
        return NewsView::NoNews;
    }

    let visible = page.visible(feed.news());
    if visible.is_empty() {
        NewsView::NoResults { term: page.term() }
    } else {
        NewsView::Articles(visible)
    }
}

pub fn render_news(frame: &mut Frame, area: Rect, feed: &FeedState, page: &NewsPageState, theme: &Theme) {
    let articles = match news_view(feed, page) {
        NewsView::NoNews => {
            render_centered(frame, area, NO_NEWS_MESSAGE, theme);
            return;
        }
        view => view,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Length(3), // Search box
            Constraint::Min(3),    // Articles
        ])
        .split(area);

    let heading = Paragraph::new(NEWS_HEADING)
        .style(theme.heading())
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    render_search_box(frame, chunks[1], page, theme);

    match articles {
        NewsView::Articles(articles) => {
            render_article_list(frame, chunks[2], &articles, feed.news().len(), page, theme)
        }
        _ => render_centered(frame, chunks[2], NO_RESULTS_MESSAGE, theme),
    }
}

fn render_search_box(frame: &mut Frame, area: Rect, page: &NewsPageState, theme: &Theme) {
    let content = if page.term().is_empty() && !page.search_active {
        Span::styled(SEARCH_PLACEHOLDER, theme.muted())
    } else if page.search_active {
        Span::styled(format!("{}█", page.term()), theme.text())
    } else {
        Span::styled(page.term(), theme.text())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(page.search_active))
        .title(" Search (/) ");
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);
}

fn render_article_list(
    frame: &mut Frame,
    area: Rect,
    articles: &[&NewsArticle],
    total: usize,
    page: &NewsPageState,
    theme: &Theme,
) {
    let items: Vec<ListItem> = articles
        .iter()
        .map(|article| {
            let mut lines = vec![Line::from(Span::styled(
                article.title.as_str(),
                theme.heading().fg(theme.colors.pages.article_title),
            ))];
            if !article.description.is_empty() {
                lines.push(Line::from(Span::styled(article.description.as_str(), theme.text())));
            }
            let meta = match article.source_name() {
                Some(source) => format!("{} · {}", source, article.url),
                None => article.url.clone(),
            };
            lines.push(Line::from(Span::styled(meta, theme.muted())));
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let title = format!(" {} of {} articles ", articles.len(), total);
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border(!page.search_active))
                .title(title),
        )
        .highlight_style(theme.selected())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(page.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_centered(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    let paragraph = Paragraph::new(message)
        .style(theme.text())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, vertical[1]);
}
