//! UI rendering coordinator
//!
//! Main entry point that draws the header, the active section, and any popup.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use folio_core::Section;

use crate::tui::app::{App, Popup};
use crate::tui::popups::{self, common::key_hints};
use crate::tui::shortcuts;
use crate::tui::views::sections::section_body;

impl App {
    /// Main UI rendering dispatcher
    pub fn ui(&mut self, f: &mut Frame) {
        let bg = Block::default().style(Style::default().bg(self.theme.bg_color));
        f.render_widget(bg, f.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Section body
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_section(f, chunks[1]);
        self.render_status_bar(f, chunks[2]);

        match self.popup {
            Popup::None => {}
            Popup::Search => popups::search::render(f, &self.theme, &self.search),
            Popup::Help => popups::help::render(f, &self.theme),
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let profile = self.services.store.profile();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(2)])
            .split(area);

        let name = Line::from(vec![
            Span::styled(
                format!(" {}", profile.name),
                Style::default()
                    .fg(self.theme.title_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", profile.headline),
                Style::default().fg(self.theme.dim_color),
            ),
        ]);
        f.render_widget(Paragraph::new(name), rows[0]);

        let titles: Vec<Line> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| Line::from(format!("{} {}", i + 1, s.title())))
            .collect();
        let selected = Section::ALL
            .iter()
            .position(|s| *s == self.route.section)
            .unwrap_or(0);
        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(self.theme.dim_color))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(self.theme.border_color)),
            );
        f.render_widget(tabs, rows[1]);
    }

    fn render_section(&mut self, f: &mut Frame, area: Rect) {
        let body = section_body(
            &self.services.store,
            &self.route,
            &self.theme,
            area.width.saturating_sub(2) as usize,
        );

        if self.pending_anchor_scroll {
            self.scroll = body.anchor_line.unwrap_or(0);
            self.pending_anchor_scroll = false;
        }
        let max_scroll = body.lines.len().saturating_sub(area.height as usize);
        self.scroll = self.scroll.min(max_scroll);

        let scroll = u16::try_from(self.scroll).unwrap_or(u16::MAX);
        let paragraph = Paragraph::new(body.lines)
            .style(Style::default().bg(self.theme.bg_color))
            .scroll((scroll, 0));
        f.render_widget(paragraph, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let hints = key_hints(
            &[
                (shortcuts::SEARCH, "search"),
                (shortcuts::NEXT_SECTION, "section"),
                (shortcuts::HELP, "help"),
                (shortcuts::QUIT, "quit"),
            ],
            &self.theme,
        );
        f.render_widget(
            Paragraph::new(hints).style(Style::default().bg(self.theme.status_bar_bg_color)),
            area,
        );
    }
}
