//! Global search popup
//!
//! Renders the query input and the keyboard-navigable result list held by
//! the [`SearchController`].

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use folio_core::text::truncate_ellipsis;
use folio_core::{OverlayState, SearchController};

use super::common::{
    center_content, center_rect, key_hints, popup_block, popup_title, render_popup_background,
    PopupSize,
};
use crate::tui::themes::Theme;

/// Each result takes a title line and a description line
const LINES_PER_RESULT: usize = 2;

/// First result index to draw so the selection stays on screen
fn first_visible(selected: Option<usize>, visible: usize) -> usize {
    match selected {
        Some(i) if visible > 0 && i >= visible => i + 1 - visible,
        _ => 0,
    }
}

pub fn render(f: &mut Frame, theme: &Theme, search: &SearchController) {
    let (w, h) = PopupSize::Large.dimensions();
    let area = center_rect(w, h, f.area());
    render_popup_background(f, area, theme);

    let block = popup_block(theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Input
            Constraint::Min(3),    // Results
            Constraint::Length(2), // Footer
        ])
        .split(inner);

    let title = Paragraph::new(popup_title("Search", theme)).alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    // Input line
    let mut input = vec![
        Span::styled("  › ", Style::default().fg(theme.accent_color)),
        Span::styled(search.query().to_string(), Style::default().fg(theme.text_color)),
        Span::styled(
            "_",
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ];
    if search.is_pending() {
        input.push(Span::styled("  …", Style::default().fg(theme.dim_color)));
    }
    f.render_widget(
        Paragraph::new(Line::from(input)).style(Style::default().bg(theme.input_bg_color)),
        center_content(chunks[1], 2),
    );

    let content_area = center_content(chunks[2], 2);
    let desc_width = (content_area.width as usize).saturating_sub(6);
    let mut lines: Vec<Line> = Vec::new();

    match search.state() {
        OverlayState::Closed => {}
        OverlayState::OpenEmpty if search.shows_no_results() => {
            lines.push(Line::from(Span::styled(
                format!("  No results for \"{}\"", search.settled_query().trim()),
                Style::default().fg(theme.dim_color),
            )));
        }
        OverlayState::OpenEmpty => {
            lines.push(Line::from(Span::styled(
                "  Search projects, papers, work, talks, and posts",
                Style::default().fg(theme.dim_color),
            )));
        }
        OverlayState::OpenResults { selected } => {
            let visible = (content_area.height as usize) / LINES_PER_RESULT;
            let start = first_visible(selected, visible);

            for (idx, item) in search
                .results()
                .iter()
                .enumerate()
                .skip(start)
                .take(visible)
            {
                let is_selected = selected == Some(idx);
                let prefix = if is_selected { " › " } else { "   " };
                let title_style = if is_selected {
                    Style::default()
                        .fg(theme.accent_color)
                        .bg(theme.selection_bg_color)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text_color)
                };

                lines.push(Line::from(vec![
                    Span::styled(prefix, title_style),
                    Span::styled(
                        format!("[{}]", item.kind.badge()),
                        Style::default().fg(theme.badge_color(item.kind)),
                    ),
                    Span::raw(" "),
                    Span::styled(item.title.clone(), title_style),
                ]));
                lines.push(Line::from(vec![
                    Span::raw("      "),
                    Span::styled(
                        truncate_ellipsis(&item.description, desc_width).into_owned(),
                        Style::default().fg(theme.dim_color),
                    ),
                ]));
            }
        }
    }

    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme.bg_color)),
        content_area,
    );

    let footer = Paragraph::new(key_hints(
        &[("↑↓", "nav"), ("Enter", "open"), ("Esc", "close")],
        theme,
    ))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::{ContentData, Project};
    use folio_core::{ContentStore, NavKey, SearchEngine};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn controller() -> SearchController {
        let store = ContentStore::new(ContentData {
            projects: vec![Project {
                id: "site".into(),
                title: "Portfolio Site".into(),
                description: "Sections and search".into(),
                technologies: vec!["React".into()],
                link: None,
            }],
            ..Default::default()
        })
        .unwrap();
        SearchController::new(SearchEngine::new(Arc::new(store)), Duration::ZERO)
    }

    fn screen(search: &SearchController) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 34)).unwrap();
        terminal
            .draw(|f| render(f, &Theme::default(), search))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn type_query(search: &mut SearchController, query: &str) {
        let now = Instant::now();
        search.open();
        for c in query.chars() {
            search.insert_char(c, now);
        }
        search.tick(now);
    }

    #[test]
    fn test_renders_no_results_message() {
        let mut search = controller();
        type_query(&mut search, "zzzzz");
        let text = screen(&search);
        assert!(text.contains("No results for \"zzzzz\""));
    }

    #[test]
    fn test_renders_badge_and_title() {
        let mut search = controller();
        type_query(&mut search, "react");
        search.handle_key(NavKey::Down);
        let text = screen(&search);
        assert!(text.contains("[project] Portfolio Site"));
        assert!(text.contains("Sections and search"));
        assert!(text.contains("›"));
    }

    #[test]
    fn test_empty_query_shows_hint() {
        let mut search = controller();
        search.open();
        assert!(screen(&search).contains("Search projects, papers"));
    }

    #[test]
    fn test_first_visible_follows_selection() {
        assert_eq!(first_visible(None, 5), 0);
        assert_eq!(first_visible(Some(4), 5), 0);
        assert_eq!(first_visible(Some(5), 5), 1);
        assert_eq!(first_visible(Some(9), 3), 7);
        assert_eq!(first_visible(Some(2), 0), 0);
    }
}
