use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const ABOUT_HEADING: &str = "About StellarFeed";

const MISSION: &str = "StellarFeed brings you a daily collection of cosmic content: \
an astronomy picture, the latest space news and a few poems about the night sky.";

const INTEGRATIONS: [&str; 3] = [
    "NASA Astronomy Picture of the Day (APOD)",
    "NewsAPI.org",
    "Google Gemini API",
];

pub fn render_about(frame: &mut Frame, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new(ABOUT_HEADING)
        .style(theme.heading())
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    let mission = Paragraph::new(MISSION)
        .style(theme.text())
        .wrap(Wrap { trim: true })
        .block(section("Our Mission", theme));
    frame.render_widget(mission, chunks[1]);

    let integrations: Vec<Line> = INTEGRATIONS
        .iter()
        .map(|name| Line::from(Span::styled(format!("• {}", name), theme.text())))
        .collect();
    frame.render_widget(
        Paragraph::new(integrations).block(section("API Integrations", theme)),
        chunks[2],
    );
}

fn section<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(false))
        .title(Span::styled(title, theme.heading().fg(theme.colors.pages.picture_title)))
}
