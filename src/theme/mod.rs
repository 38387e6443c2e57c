pub mod color;

use ratatui::style::{Modifier, Style};

pub use color::{ColorPalette, PageColors, ThemeColors};

/// Colours and text styles used by the page views
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn stellar_dark() -> Self {
        Self {
            name: "Stellar Dark".to_string(),
            colors: ThemeColors::stellar_dark(),
        }
    }

    pub fn basic() -> Self {
        Self {
            name: "Basic".to_string(),
            colors: ThemeColors::basic(),
        }
    }

    /// Pick a theme from the `COLORTERM` capability
    pub fn detect() -> Self {
        match std::env::var("COLORTERM").as_deref() {
            Ok("truecolor") | Ok("24bit") => Self::stellar_dark(),
            _ => Self::basic(),
        }
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.colors.pages.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.colors.palette.text_secondary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.colors.palette.text_muted)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.colors.palette.border_focused)
        } else {
            Style::default().fg(self.colors.palette.border)
        }
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.colors.palette.selection_text)
            .bg(self.colors.palette.selection)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::stellar_dark()
    }
}
