//! Toast notifications for feed events
//!
//! Short-lived messages drawn in the top-right corner over the current page.

use crate::tea::message::ToastLevel;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::collections::VecDeque;
use tokio::time::{Duration, Instant};

/// Maximum number of toasts to display simultaneously
const MAX_VISIBLE_TOASTS: usize = 5;

/// Toast notification item
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    /// Create a new toast notification
    pub fn new(message: String, level: ToastLevel) -> Self {
        let duration = match level {
            ToastLevel::Info => Duration::from_secs(3),
            ToastLevel::Success => Duration::from_secs(2),
            ToastLevel::Warning => Duration::from_secs(4),
            ToastLevel::Error => Duration::from_secs(5),
        };

        Self {
            message,
            level,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Check if toast has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    pub fn icon(&self) -> &'static str {
        match self.level {
            ToastLevel::Info => "ℹ",
            ToastLevel::Success => "✓",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✗",
        }
    }

    /// Accent colour for the toast border and icon
    pub fn accent(&self, theme: &Theme) -> Color {
        match self.level {
            ToastLevel::Info => theme.colors.palette.info,
            ToastLevel::Success => theme.colors.palette.success,
            ToastLevel::Warning => theme.colors.palette.warning,
            ToastLevel::Error => theme.colors.palette.error,
        }
    }
}

/// Bounded queue of active toasts
#[derive(Debug, Clone)]
pub struct ToastManager {
    toasts: VecDeque<Toast>,
    max_visible: usize,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: VecDeque::new(),
            max_visible: MAX_VISIBLE_TOASTS,
        }
    }

    /// Add a toast, dropping the oldest one when full
    pub fn add_toast(&mut self, toast: Toast) {
        if self.toasts.len() >= self.max_visible {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    pub fn show(&mut self, message: String, level: ToastLevel) {
        self.add_toast(Toast::new(message, level));
    }

    /// Remove expired toasts
    pub fn update(&mut self) {
        self.toasts.retain(|toast| !toast.is_expired());
    }

    pub fn toasts(&self) -> &VecDeque<Toast> {
        &self.toasts
    }

    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

/// Draw toasts newest first in the top-right corner of `area`
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &ToastManager, theme: &Theme) {
    let toast_width = area.width.min(50);
    let toast_height = 4;
    let mut current_y = area.y + 1;

    for toast in toasts.toasts().iter().rev() {
        if current_y + toast_height > area.y + area.height {
            break;
        }

        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(toast_width).saturating_sub(2),
            y: current_y,
            width: toast_width,
            height: toast_height,
        };
        render_toast(frame, toast_area, toast, theme);
        current_y += toast_height + 1;
    }
}

fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast, theme: &Theme) {
    frame.render_widget(Clear, area);

    let accent = toast.accent(theme);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(theme.colors.palette.surface));

    let inner_area = block.inner(area);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner_area);

    frame.render_widget(block, area);

    let icon = Paragraph::new(toast.icon())
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(icon, chunks[0]);

    let lines: Vec<Line> = toast
        .message
        .lines()
        .map(|line| Line::from(Span::styled(line, theme.text())))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_creation() {
        let toast = Toast::new("Feed refreshed".to_string(), ToastLevel::Success);
        assert_eq!(toast.message, "Feed refreshed");
        assert_eq!(toast.duration, Duration::from_secs(2));
        assert_eq!(toast.icon(), "✓");
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_manager_is_bounded() {
        let mut manager = ToastManager::new();
        for i in 0..7 {
            manager.show(format!("toast {}", i), ToastLevel::Info);
        }
        assert_eq!(manager.toasts().len(), MAX_VISIBLE_TOASTS);
        assert_eq!(manager.toasts().front().unwrap().message, "toast 2");

        manager.clear();
        assert!(!manager.has_toasts());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_toasts_are_removed() {
        let mut manager = ToastManager::new();
        manager.show("short".to_string(), ToastLevel::Success);
        manager.show("long".to_string(), ToastLevel::Error);

        tokio::time::advance(Duration::from_secs(3)).await;
        manager.update();
        assert_eq!(manager.toasts().len(), 1);
        assert_eq!(manager.toasts()[0].message, "long");

        tokio::time::advance(Duration::from_secs(3)).await;
        manager.update();
        assert!(!manager.has_toasts());
    }
}
