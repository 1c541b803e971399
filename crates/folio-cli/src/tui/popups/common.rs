//! Shared popup layout and chrome

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::tui::themes::Theme;

/// Standard popup sizes (width, height) in cells
#[derive(Debug, Clone, Copy)]
pub enum PopupSize {
    Medium,
    Large,
}

impl PopupSize {
    pub fn dimensions(self) -> (u16, u16) {
        match self {
            PopupSize::Medium => (60, 20),
            PopupSize::Large => (90, 30),
        }
    }
}

/// Center a `width` x `height` rect inside `area`, shrinking to fit
pub fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Inset `area` horizontally by `margin` on each side
pub fn center_content(area: Rect, margin: u16) -> Rect {
    let margin = margin.min(area.width / 2);
    Rect {
        x: area.x + margin,
        width: area.width - margin * 2,
        ..area
    }
}

/// Clear whatever is under the popup and paint the theme background
pub fn render_popup_background(f: &mut Frame, area: Rect, theme: &Theme) {
    f.render_widget(Clear, area);
    f.render_widget(Block::default().style(Style::default().bg(theme.bg_color)), area);
}

pub fn popup_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .style(Style::default().bg(theme.bg_color))
}

/// Title line followed by a spacer
pub fn popup_title(text: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

/// Key hint pairs rendered as `key: label  key: label`
pub fn key_hints(hints: &[(&str, &str)], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(": {}  ", label),
            Style::default().fg(theme.text_color),
        ));
    }
    Line::from(spans)
}
