//! Search overlay
//!
//! Keyboard navigation state machine for the global search overlay, and the
//! controller that ties it to the debouncer and the search engine.
//!
//! ```text
//! Closed --open--> OpenEmpty --settled query with hits--> OpenResults(None)
//!   ^                  |  ^                                   |
//!   +------Esc---------+  +------settled query, no hits-------+
//!   +------Esc / Enter on a selection-------------------------+
//! ```

use std::time::{Duration, Instant};

use crate::debounce::Debouncer;
use crate::search::{SearchEngine, SearchableItem};

/// Overlay state. `selected: None` means nothing is highlighted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    OpenEmpty,
    OpenResults { selected: Option<usize> },
}

/// Keys the overlay reacts to, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
}

/// What the caller should do after a key was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayOutcome {
    None,
    Closed,
    /// Overlay closed; go to this URL
    Navigate(String),
}

/// Owns the query, the debounced input, and the current results
#[derive(Debug, Clone)]
pub struct SearchController {
    engine: SearchEngine,
    debouncer: Debouncer<String>,
    state: OverlayState,
    query: String,
    results: Vec<SearchableItem>,
}

impl SearchController {
    pub fn new(engine: SearchEngine, quiescence: Duration) -> Self {
        Self {
            engine,
            debouncer: Debouncer::new(quiescence),
            state: OverlayState::Closed,
            query: String::new(),
            results: Vec::new(),
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != OverlayState::Closed
    }

    /// Raw text as typed
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Query the current results were computed for
    pub fn settled_query(&self) -> &str {
        self.debouncer.settled()
    }

    pub fn results(&self) -> &[SearchableItem] {
        &self.results
    }

    pub fn selected(&self) -> Option<usize> {
        match self.state {
            OverlayState::OpenResults { selected } => selected,
            _ => None,
        }
    }

    pub fn selected_item(&self) -> Option<&SearchableItem> {
        self.selected().and_then(|i| self.results.get(i))
    }

    /// A non-blank query settled and found nothing
    pub fn shows_no_results(&self) -> bool {
        self.state == OverlayState::OpenEmpty && !self.settled_query().trim().is_empty()
    }

    /// Typing has not paused long enough yet
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the event loop should wake up to settle the input
    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn open(&mut self) {
        if self.state == OverlayState::Closed {
            self.state = OverlayState::OpenEmpty;
            tracing::debug!("Search overlay opened");
        }
    }

    /// Close and forget the query, results, and any pending input
    pub fn close(&mut self) {
        self.state = OverlayState::Closed;
        self.query.clear();
        self.results.clear();
        self.debouncer.reset();
    }

    pub fn insert_char(&mut self, c: char, now: Instant) {
        if self.is_open() {
            self.query.push(c);
            self.debouncer.push(self.query.clone(), now);
        }
    }

    pub fn backspace(&mut self, now: Instant) {
        if self.is_open() && self.query.pop().is_some() {
            self.debouncer.push(self.query.clone(), now);
        }
    }

    /// Settle the input if typing paused. Returns true when results changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_open() {
            return false;
        }
        match self.debouncer.poll(now) {
            Some(settled) => {
                self.evaluate(&settled);
                true
            }
            None => false,
        }
    }

    fn evaluate(&mut self, query: &str) {
        self.results = self.engine.search(query);
        self.state = if self.results.is_empty() {
            OverlayState::OpenEmpty
        } else {
            OverlayState::OpenResults { selected: None }
        };
    }

    pub fn handle_key(&mut self, key: NavKey) -> OverlayOutcome {
        if !self.is_open() {
            return OverlayOutcome::None;
        }

        match key {
            NavKey::Escape => {
                self.close();
                OverlayOutcome::Closed
            }
            NavKey::Down => {
                if let OverlayState::OpenResults { selected } = &mut self.state {
                    let last = self.results.len().saturating_sub(1);
                    *selected = Some(selected.map_or(0, |i| (i + 1).min(last)));
                }
                OverlayOutcome::None
            }
            NavKey::Up => {
                if let OverlayState::OpenResults { selected } = &mut self.state {
                    *selected = selected.and_then(|i| i.checked_sub(1));
                }
                OverlayOutcome::None
            }
            NavKey::Enter => match self.selected_item() {
                Some(item) => {
                    let url = item.url.clone();
                    tracing::info!(url = %url, "Search result selected");
                    self.close();
                    OverlayOutcome::Navigate(url)
                }
                None => OverlayOutcome::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentData, ContentStore, Project};
    use std::sync::Arc;

    const WINDOW: Duration = Duration::from_millis(300);

    fn controller(titles: &[&str]) -> SearchController {
        let projects = titles
            .iter()
            .enumerate()
            .map(|(i, title)| Project {
                id: format!("p{i}"),
                title: title.to_string(),
                description: String::new(),
                technologies: Vec::new(),
                link: None,
            })
            .collect();
        let store = ContentStore::new(ContentData {
            projects,
            ..Default::default()
        })
        .unwrap();
        SearchController::new(SearchEngine::new(Arc::new(store)), WINDOW)
    }

    fn type_and_settle(c: &mut SearchController, text: &str, now: Instant) -> Instant {
        for ch in text.chars() {
            c.insert_char(ch, now);
        }
        let settled_at = now + WINDOW;
        assert!(c.tick(settled_at));
        settled_at
    }

    #[test]
    fn test_starts_closed_and_ignores_input() {
        let mut c = controller(&["Data One"]);
        let now = Instant::now();
        assert_eq!(c.state(), OverlayState::Closed);

        c.insert_char('d', now);
        assert_eq!(c.query(), "");
        assert!(!c.tick(now + WINDOW));
        assert_eq!(c.handle_key(NavKey::Down), OverlayOutcome::None);
    }

    #[test]
    fn test_open_then_results() {
        let mut c = controller(&["Data One", "Data Two"]);
        c.open();
        assert_eq!(c.state(), OverlayState::OpenEmpty);

        type_and_settle(&mut c, "data", Instant::now());
        assert_eq!(c.state(), OverlayState::OpenResults { selected: None });
        assert_eq!(c.results().len(), 2);
    }

    #[test]
    fn test_no_results_stays_open_empty() {
        let mut c = controller(&["Data One"]);
        c.open();
        assert!(!c.shows_no_results());

        type_and_settle(&mut c, "zzzzz", Instant::now());
        assert_eq!(c.state(), OverlayState::OpenEmpty);
        assert!(c.results().is_empty());
        assert!(c.shows_no_results());
    }

    #[test]
    fn test_results_drop_back_to_open_empty() {
        let mut c = controller(&["Data One"]);
        c.open();
        let t = type_and_settle(&mut c, "data", Instant::now());
        assert!(matches!(c.state(), OverlayState::OpenResults { .. }));

        for _ in 0..4 {
            c.backspace(t);
        }
        assert!(c.tick(t + WINDOW));
        assert_eq!(c.state(), OverlayState::OpenEmpty);
        assert!(!c.shows_no_results());
    }

    #[test]
    fn test_arrow_down_three_times_then_enter_selects_last() {
        let mut c = controller(&["Data A", "Data B", "Data C"]);
        c.open();
        type_and_settle(&mut c, "data", Instant::now());
        assert_eq!(c.results().len(), 3);

        for _ in 0..3 {
            c.handle_key(NavKey::Down);
        }
        assert_eq!(c.selected(), Some(2));

        let expected = c.results()[2].url.clone();
        assert_eq!(c.handle_key(NavKey::Enter), OverlayOutcome::Navigate(expected));
        assert_eq!(c.state(), OverlayState::Closed);
        assert_eq!(c.query(), "");
    }

    #[test]
    fn test_arrow_up_stops_at_no_selection() {
        let mut c = controller(&["Data A", "Data B"]);
        c.open();
        type_and_settle(&mut c, "data", Instant::now());

        c.handle_key(NavKey::Down);
        c.handle_key(NavKey::Up);
        assert_eq!(c.selected(), None);
        c.handle_key(NavKey::Up);
        assert_eq!(c.selected(), None);

        // Enter without a selection does nothing
        assert_eq!(c.handle_key(NavKey::Enter), OverlayOutcome::None);
        assert!(c.is_open());
    }

    #[test]
    fn test_escape_closes_and_clears() {
        let mut c = controller(&["Data A"]);
        c.open();
        let now = Instant::now();
        type_and_settle(&mut c, "data", now);
        c.insert_char('x', now + WINDOW);

        assert_eq!(c.handle_key(NavKey::Escape), OverlayOutcome::Closed);
        assert_eq!(c.state(), OverlayState::Closed);
        assert_eq!(c.query(), "");
        assert!(c.results().is_empty());
        assert_eq!(c.deadline(), None);
        assert_eq!(c.settled_query(), "");
    }

    #[test]
    fn test_stale_query_never_evaluated() {
        let mut c = controller(&["Data A", "Other"]);
        c.open();
        let start = Instant::now();

        for ch in "zz".chars() {
            c.insert_char(ch, start);
        }
        c.backspace(start + Duration::from_millis(100));
        c.backspace(start + Duration::from_millis(150));
        for ch in "data".chars() {
            c.insert_char(ch, start + Duration::from_millis(200));
        }

        // The "zz" deadline has passed but was superseded
        assert!(!c.tick(start + WINDOW));
        assert!(c.tick(start + Duration::from_millis(500)));
        assert_eq!(c.settled_query(), "data");
        assert_eq!(c.results().len(), 1);
    }

    #[test]
    fn test_reopen_after_close_starts_empty() {
        let mut c = controller(&["Data A"]);
        c.open();
        type_and_settle(&mut c, "data", Instant::now());
        c.close();
        c.open();
        assert_eq!(c.state(), OverlayState::OpenEmpty);
        assert!(c.results().is_empty());
    }
}
