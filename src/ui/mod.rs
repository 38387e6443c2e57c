pub mod about;
pub mod document;
pub mod home;
pub mod navbar;
pub mod news;
pub mod poems;
pub mod status_bar;
pub mod toast;

use crate::routes::Route;
use crate::tea::Model;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub use home::{home_view, HomeView};
pub use news::{news_view, NewsView};
pub use poems::{poems_view, PoemsView};

/// Frames of the loading spinner
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub const LOADING_MESSAGE: &str = "Fetching today's cosmos...";

/// Draw the navigation shell and the page for the current route
pub fn render(frame: &mut Frame, model: &Model, theme: &Theme) {
    let area = frame.size();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.colors.palette.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Navigation bar
            Constraint::Min(3),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    navbar::render_navbar(frame, chunks[0], model.route, theme);

    let page_area = inset(chunks[1]);
    if model.feed.is_loading() && !model.feed.has_content() {
        render_loading(frame, page_area, model.app_state.spinner_frame, theme);
    } else {
        render_page(frame, page_area, model, theme);
    }

    status_bar::render_status_bar(frame, chunks[2], model, theme);
    toast::render_toasts(frame, area, &model.toasts, theme);
}

fn render_page(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    match model.route {
        Route::Home => home::render_home(frame, area, &model.feed, model.scroll.home, theme),
        Route::News => news::render_news(frame, area, &model.feed, &model.news, theme),
        Route::Poems => {
            poems::render_poems(frame, area, model.feed.poems(), model.scroll.poems, theme)
        }
        Route::About => about::render_about(frame, area, theme),
    }
}

/// Body size of the Home and Poems pages for a terminal of `(width, height)`.
///
/// Navigation bar, status bar, page heading and body borders take seven rows;
/// the page margin and borders take four columns.
pub fn page_viewport((width, height): (u16, u16)) -> (u16, u16) {
    (width.saturating_sub(4), height.saturating_sub(7))
}

/// Furthest a scrollable page can move at the current terminal size
pub fn max_scroll(model: &Model, route: Route) -> u16 {
    let (width, height) = page_viewport(model.app_state.terminal_size);
    match route {
        Route::Home => home::home_document(&model.feed, width)
            .map(|doc| doc.max_scroll(height))
            .unwrap_or(0),
        Route::Poems => poems::poems_document(model.feed.poems(), width).max_scroll(height),
        Route::News | Route::About => 0,
    }
}

fn render_loading(frame: &mut Frame, area: Rect, spinner_frame: usize, theme: &Theme) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            spinner,
            Style::default().fg(theme.colors.palette.info),
        )),
        Line::from(""),
        Line::from(Span::styled(LOADING_MESSAGE, theme.muted())),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        vertical[1],
    );
}

/// Page area with a one-column margin on both sides
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    }
}
