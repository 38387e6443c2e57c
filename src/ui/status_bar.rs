use crate::routes::Route;
use crate::tea::Model;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// Feed state summary shown on the left of the status bar
pub fn feed_status(model: &Model) -> String {
    let feed = &model.feed;
    if feed.is_loading() {
        return if feed.has_content() {
            "Refreshing…".to_string()
        } else {
            "Loading feed…".to_string()
        };
    }

    if let Some(error) = feed.last_error() {
        return format!("Fetch failed: {} (press r to retry)", error);
    }

    match feed.last_updated() {
        Some(updated) => format!("Updated {}", updated.format("%H:%M")),
        None => "No data".to_string(),
    }
}

/// Key hints for the current page
pub fn key_hints(model: &Model) -> &'static str {
    match model.route {
        Route::News if model.news.search_active => "type to search · Enter/Esc done · Ctrl-U clear",
        Route::News => "/ search · j/k move · Enter open · r refresh · q quit",
        Route::Home | Route::Poems => "j/k scroll · 1-4/Tab pages · r refresh · q quit",
        Route::About => "1-4/Tab pages · r refresh · q quit",
    }
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let status_style = if model.feed.last_error().is_some() && !model.feed.is_loading() {
        Style::default().fg(theme.colors.palette.error)
    } else {
        theme.muted()
    };

    frame.render_widget(
        Paragraph::new(Span::styled(feed_status(model), status_style)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(key_hints(model), theme.muted())).alignment(Alignment::Right),
        chunks[1],
    );
}
