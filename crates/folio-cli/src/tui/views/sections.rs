//! Section bodies
//!
//! Turns the content store into pre-wrapped lines for the active section.
//! Wrapping happens here (not in the Paragraph widget) so the line index of
//! the anchored entry is exact and can be scrolled to.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use folio_core::content::TimelineKind;
use folio_core::{ContentStore, Route, Section};

use crate::tui::themes::Theme;

/// Lines for one section plus where the anchored entry starts
pub struct SectionBody {
    pub lines: Vec<Line<'static>>,
    pub anchor_line: Option<usize>,
}

struct BodyBuilder<'a> {
    theme: &'a Theme,
    width: usize,
    anchor: Option<&'a str>,
    lines: Vec<Line<'static>>,
    anchor_line: Option<usize>,
}

impl<'a> BodyBuilder<'a> {
    fn new(theme: &'a Theme, width: usize, anchor: Option<&'a str>) -> Self {
        Self {
            theme,
            width: width.max(20),
            anchor,
            lines: Vec::new(),
            anchor_line: None,
        }
    }

    /// Entry title; highlighted when `id` is the route anchor
    fn entry(&mut self, id: &str, title: &str, meta: Option<String>) {
        let is_anchor = self.anchor == Some(id);
        if is_anchor {
            self.anchor_line = Some(self.lines.len());
        }

        let (prefix, style) = if is_anchor {
            (
                "› ",
                Style::default()
                    .fg(self.theme.highlight_color)
                    .bg(self.theme.selection_bg_color)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                "  ",
                Style::default()
                    .fg(self.theme.title_color)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let mut spans = vec![Span::styled(prefix, style), Span::styled(title.to_string(), style)];
        if let Some(meta) = meta {
            spans.push(Span::styled(
                format!("  {}", meta),
                Style::default().fg(self.theme.dim_color),
            ));
        }
        self.lines.push(Line::from(spans));
    }

    fn text(&mut self, text: &str) {
        self.wrapped(text, Style::default().fg(self.theme.text_color));
    }

    fn dim(&mut self, text: &str) {
        self.wrapped(text, Style::default().fg(self.theme.dim_color));
    }

    fn wrapped(&mut self, text: &str, style: Style) {
        let indent = "    ";
        for line in textwrap::wrap(text, self.width.saturating_sub(indent.len())) {
            self.lines.push(Line::from(Span::styled(format!("{}{}", indent, line), style)));
        }
    }

    fn tags(&mut self, tags: &[String]) {
        if tags.is_empty() {
            return;
        }
        let joined = tags.join(" · ");
        self.wrapped(&joined, Style::default().fg(self.theme.link_color));
    }

    fn bullets(&mut self, items: &[String]) {
        for item in items {
            self.text(&format!("• {}", item));
        }
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn finish(self) -> SectionBody {
        SectionBody {
            lines: self.lines,
            anchor_line: self.anchor_line,
        }
    }
}

fn period(start: &str, end: Option<&str>) -> String {
    format!("{} – {}", start, end.unwrap_or("present"))
}

/// Build the body of `route.section`, wrapped to `width` columns
pub fn section_body(store: &ContentStore, route: &Route, theme: &Theme, width: usize) -> SectionBody {
    let mut b = BodyBuilder::new(theme, width, route.anchor.as_deref());

    match route.section {
        Section::About => {
            let profile = store.profile();
            b.entry("about", &profile.name, profile.location.clone());
            b.dim(&profile.headline);
            b.blank();
            b.text(&profile.summary);
            b.blank();
            for link in &profile.links {
                b.dim(&format!("{}: {}", link.label, link.url));
            }
        }
        Section::Experience => {
            for e in store.experience() {
                b.entry(
                    &e.id,
                    &format!("{} · {}", e.position, e.company),
                    Some(period(&e.start, e.end.as_deref())),
                );
                b.text(&e.description);
                b.blank();
            }
        }
        Section::Timeline => {
            for entry in store.timeline() {
                let badge = match entry.kind {
                    TimelineKind::Work => "work",
                    TimelineKind::Education => "study",
                };
                b.entry(
                    entry.id,
                    &format!("{}, {}", entry.title, entry.organisation),
                    Some(format!("[{}] {}", badge, period(entry.start, entry.end))),
                );
            }
        }
        Section::Skills => {
            for group in store.skills() {
                b.entry(&group.category, &group.category, None);
                b.tags(&group.items);
                b.blank();
            }
        }
        Section::Projects => {
            for p in store.projects() {
                b.entry(&p.id, &p.title, p.link.clone());
                b.text(&p.description);
                b.tags(&p.technologies);
                b.blank();
            }
        }
        Section::Publications => {
            for p in store.publications() {
                b.entry(&p.id, &p.title, Some(format!("{} {}", p.venue, p.year)));
                b.text(&p.abstract_text);
                b.tags(&p.keywords);
                b.blank();
            }
        }
        Section::Blog => {
            for post in store.blog() {
                b.entry(&post.slug, &post.title, Some(post.published.clone()));
                b.text(&post.excerpt);
                b.tags(&post.tags);
                b.blank();
            }
        }
        Section::Talks => {
            for t in store.talks() {
                b.entry(&t.id, &t.title, Some(format!("{}, {}", t.event, t.date)));
                b.text(&t.description);
                b.blank();
            }
        }
        Section::Consultancy => {
            for s in store.services() {
                b.entry(&s.id, &s.title, None);
                b.text(&s.summary);
                b.bullets(&s.deliverables);
                b.blank();
            }
        }
    }

    b.finish()
}
