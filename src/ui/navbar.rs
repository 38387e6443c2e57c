use crate::routes::Route;
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub const BRAND: &str = "✦ StellarFeed";

/// Brand on the left, one tab per route on the right
pub fn render_navbar(frame: &mut Frame, area: Rect, active: Route, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(0)])
        .split(inner);

    let brand = Paragraph::new(Span::styled(
        BRAND,
        Style::default()
            .fg(theme.colors.palette.accent)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(brand, chunks[0]);

    let titles: Vec<Line> = Route::ALL
        .iter()
        .map(|route| Line::from(format!("{} {}", route.index() + 1, route.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(theme.text())
        .highlight_style(
            Style::default()
                .fg(theme.colors.palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│");
    frame.render_widget(tabs, chunks[1]);
}
