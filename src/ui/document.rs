//! Pre-wrapped page text for the scrollable Home and Poems bodies
//!
//! Text is wrapped to the body width up front so the number of screen rows is
//! known before drawing. `update` uses that count to bound scrolling.

use crate::theme::Theme;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
};

/// How a row of a document is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Link,
    Body,
    Heading,
    Verse,
    /// Right aligned author line
    Attribution,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLine {
    pub style: LineStyle,
    pub text: String,
}

/// Rows of text already wrapped to a fixed width
#[derive(Debug, Clone, Default)]
pub struct Document {
    width: usize,
    lines: Vec<DocLine>,
}

impl Document {
    pub fn new(width: u16) -> Self {
        Self {
            width: usize::from(width).max(1),
            lines: Vec::new(),
        }
    }

    /// Append `text`, wrapping every source line to the document width
    pub fn push(&mut self, style: LineStyle, text: &str) {
        for row in wrap_text(text, self.width) {
            self.lines.push(DocLine { style, text: row });
        }
    }

    pub fn blank(&mut self) {
        self.lines.push(DocLine {
            style: LineStyle::Blank,
            text: String::new(),
        });
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Largest offset that still fills a viewport of `height` rows
    pub fn max_scroll(&self, height: u16) -> u16 {
        let hidden = self.lines.len().saturating_sub(usize::from(height));
        u16::try_from(hidden).unwrap_or(u16::MAX)
    }

    pub fn to_lines(&self, theme: &Theme) -> Vec<Line<'_>> {
        self.lines
            .iter()
            .map(|line| {
                let span = Span::styled(line.text.as_str(), line_style(line.style, theme));
                match line.style {
                    LineStyle::Attribution => Line::from(span).alignment(Alignment::Right),
                    _ => Line::from(span),
                }
            })
            .collect()
    }
}

fn line_style(style: LineStyle, theme: &Theme) -> Style {
    let pages = &theme.colors.pages;
    match style {
        LineStyle::Title => theme.heading().fg(pages.picture_title),
        LineStyle::Link => theme.text().fg(pages.link),
        LineStyle::Body => theme.text(),
        LineStyle::Heading => theme.heading().fg(pages.poem_title),
        LineStyle::Verse => theme.text().fg(pages.poem_text),
        LineStyle::Attribution => theme.muted(),
        LineStyle::Blank => Style::default(),
    }
}

/// Greedy word wrap by character count.
///
/// Source line breaks are kept, runs of whitespace collapse to one space and a
/// word longer than `width` is split across rows. Always returns at least one
/// row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for source in text.lines() {
        let mut row = String::new();
        let mut row_len = 0;

        for word in source.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();

            if row_len > 0 && row_len + 1 + chars.len() > width {
                rows.push(std::mem::take(&mut row));
                row_len = 0;
            }

            while chars.len() > width {
                let rest = chars.split_off(width);
                rows.push(chars.into_iter().collect());
                chars = rest;
            }

            if row_len > 0 {
                row.push(' ');
                row_len += 1;
            }
            row_len += chars.len();
            row.extend(chars);
        }

        rows.push(row);
    }

    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_between_words() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
        assert_eq!(wrap_text("fits", 10), vec!["fits"]);
    }

    #[test]
    fn test_wrap_keeps_line_breaks_and_blank_lines() {
        assert_eq!(
            wrap_text("first verse\n\nsecond verse", 40),
            vec!["first verse", "", "second verse"]
        );
        assert_eq!(wrap_text("", 40), vec![""]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(
            wrap_text("see https://apod.nasa.gov/x", 10),
            vec!["see", "https://ap", "od.nasa.go", "v/x"]
        );
    }

    #[test]
    fn test_wrap_counts_characters_not_bytes() {
        assert_eq!(wrap_text("étoile étoile", 6), vec!["étoile", "étoile"]);
    }

    #[test]
    fn test_max_scroll() {
        let mut doc = Document::new(20);
        doc.push(LineStyle::Body, "one two three four five six seven eight nine ten");
        doc.blank();
        doc.push(LineStyle::Attribution, "- Anon");
        assert_eq!(doc.len(), 5);

        assert_eq!(doc.max_scroll(2), 3);
        assert_eq!(doc.max_scroll(5), 0);
        assert_eq!(doc.max_scroll(40), 0);
    }
}
