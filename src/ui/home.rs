use crate::feed::{AstronomyPicture, FeedState, Poem};
use crate::theme::Theme;
use crate::ui::document::{Document, LineStyle};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const HOME_HEADING: &str = "Your Daily Dose of the Cosmos";
pub const POEM_HEADING: &str = "Poem of the Day";
pub const HOME_LOADING: &str = "Loading...";

/// What the home page can show for the current feed state
#[derive(Debug, PartialEq)]
pub enum HomeView<'a> {
    /// Picture or poem of the day missing
    Loading,
    Ready {
        picture: &'a AstronomyPicture,
        poem: &'a Poem,
    },
}

pub fn home_view(feed: &FeedState) -> HomeView<'_> {
    match (feed.picture(), feed.poem_of_the_day()) {
        (Some(picture), Some(poem)) => HomeView::Ready { picture, poem },
        _ => HomeView::Loading,
    }
}

/// Picture and poem of the day as one scrollable body, or `None` while loading
pub fn home_document(feed: &FeedState, width: u16) -> Option<Document> {
    let HomeView::Ready { picture, poem } = home_view(feed) else {
        return None;
    };

    let mut doc = Document::new(width);
    doc.push(LineStyle::Title, &picture.title);
    doc.push(LineStyle::Link, &picture.image_url);
    doc.blank();
    doc.push(LineStyle::Body, &picture.explanation);
    doc.blank();
    doc.push(LineStyle::Heading, POEM_HEADING);
    doc.push(LineStyle::Verse, &format!("\"{}\"", poem.text));
    doc.push(LineStyle::Attribution, &format!("- {}", poem.author));
    Some(doc)
}

pub fn render_home(frame: &mut Frame, area: Rect, feed: &FeedState, scroll: u16, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Min(3),    // Picture and poem of the day
        ])
        .split(area);

    let heading = Paragraph::new(HOME_HEADING)
        .style(theme.heading())
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(false));
    let body = block.inner(chunks[1]);

    let Some(doc) = home_document(feed, body.width) else {
        let placeholder = Paragraph::new(HOME_LOADING)
            .style(theme.muted())
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, chunks[1]);
        return;
    };

    let offset = scroll.min(doc.max_scroll(body.height));
    frame.render_widget(
        Paragraph::new(doc.to_lines(theme))
            .block(block)
            .scroll((offset, 0)),
        chunks[1],
    );
}
