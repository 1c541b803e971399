//! Keyboard shortcuts popup

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::common::{
    center_content, center_rect, key_hints, popup_block, popup_title, render_popup_background,
    PopupSize,
};
use crate::tui::shortcuts;
use crate::tui::themes::Theme;

const BINDINGS: &[(&str, &str)] = &[
    (shortcuts::SEARCH, "Search everything"),
    (shortcuts::SEARCH_ALT, "Search everything"),
    (shortcuts::NEXT_SECTION, "Next section"),
    (shortcuts::PREV_SECTION, "Previous section"),
    (shortcuts::JUMP_SECTION, "Jump to section"),
    (shortcuts::SCROLL, "Scroll"),
    (shortcuts::HELP, "Toggle this help"),
    (shortcuts::QUIT, "Quit"),
];

pub fn render(f: &mut Frame, theme: &Theme) {
    let (w, h) = PopupSize::Medium.dimensions();
    let area = center_rect(w, h, f.area());
    render_popup_background(f, area, theme);

    let block = popup_block(theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Content
            Constraint::Length(2), // Footer
        ])
        .split(inner);

    let title = Paragraph::new(popup_title("Keyboard Shortcuts", theme)).alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<14}", key),
                    Style::default()
                        .fg(theme.accent_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(action.to_string(), Style::default().fg(theme.text_color)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme.bg_color)),
        center_content(chunks[1], 4),
    );

    let footer = Paragraph::new(key_hints(&[("Esc", "close")], theme)).alignment(Alignment::Center);
    f.render_widget(footer, chunks[2]);
}
