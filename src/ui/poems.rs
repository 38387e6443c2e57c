use crate::feed::Poem;
use crate::theme::Theme;
use crate::ui::document::{Document, LineStyle};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const POEMS_HEADING: &str = "Cosmic Poems";
pub const NO_POEMS_MESSAGE: &str = "No poems available.";

#[derive(Debug, PartialEq)]
pub enum PoemsView<'a> {
    Empty,
    Poems(&'a [Poem]),
}

pub fn poems_view(poems: &[Poem]) -> PoemsView<'_> {
    if poems.is_empty() {
        PoemsView::Empty
    } else {
        PoemsView::Poems(poems)
    }
}

/// Every poem in order: verse lines, then the author, then a blank row
pub fn poems_document(poems: &[Poem], width: u16) -> Document {
    let mut doc = Document::new(width);
    for poem in poems {
        doc.push(LineStyle::Verse, &poem.text);
        doc.push(LineStyle::Attribution, &format!("- {}", poem.author));
        doc.blank();
    }
    doc
}

pub fn render_poems(frame: &mut Frame, area: Rect, poems: &[Poem], scroll: u16, theme: &Theme) {
    if poems_view(poems) == PoemsView::Empty {
        let message = Paragraph::new(NO_POEMS_MESSAGE)
            .style(theme.text())
            .alignment(Alignment::Center);
        frame.render_widget(message, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let heading = Paragraph::new(POEMS_HEADING)
        .style(theme.heading())
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(false));
    let body = block.inner(chunks[1]);
    let doc = poems_document(poems, body.width);
    let offset = scroll.min(doc.max_scroll(body.height));

    frame.render_widget(
        Paragraph::new(doc.to_lines(theme))
            .block(block)
            .scroll((offset, 0)),
        chunks[1],
    );
}
