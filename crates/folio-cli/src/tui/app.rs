//! Application state

use std::sync::Arc;
use std::time::Duration;

use folio_core::{ContentStore, Route, SearchController, SearchEngine, Section};

use crate::tui::themes::Theme;

/// Services shared by the UI, constructed once in `main` and passed in
#[derive(Debug, Clone)]
pub struct Services {
    pub store: Arc<ContentStore>,
    pub engine: SearchEngine,
}

impl Services {
    pub fn new(store: ContentStore) -> Self {
        let store = Arc::new(store);
        Self {
            engine: SearchEngine::new(Arc::clone(&store)),
            store,
        }
    }
}

/// Which popup is drawn over the current section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Search,
    Help,
}

pub struct App {
    pub services: Services,
    pub theme: Theme,
    pub route: Route,
    pub popup: Popup,
    pub search: SearchController,
    /// Vertical scroll of the section body, in wrapped lines
    pub scroll: usize,
    /// Scroll to the anchored entry on the next render
    pub(crate) pending_anchor_scroll: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(services: Services, quiescence: Duration) -> Self {
        let search = SearchController::new(services.engine.clone(), quiescence);
        Self {
            services,
            theme: Theme::default(),
            route: Route::new(Section::About),
            popup: Popup::None,
            search,
            scroll: 0,
            pending_anchor_scroll: false,
            should_quit: false,
        }
    }

    pub fn open_search(&mut self) {
        self.search.open();
        self.popup = Popup::Search;
    }

    pub fn close_search(&mut self) {
        self.search.close();
        self.popup = Popup::None;
    }

    pub fn switch_section(&mut self, section: Section) {
        self.route = Route::new(section);
        self.scroll = 0;
        self.pending_anchor_scroll = false;
    }

    /// Follow a result URL. Unknown URLs are logged and ignored.
    pub fn navigate(&mut self, url: &str) {
        match Route::parse(url) {
            Some(route) => {
                tracing::info!(url = %url, section = route.section.title(), "Navigating");
                self.pending_anchor_scroll = route.anchor.is_some();
                self.route = route;
                self.scroll = 0;
            }
            None => tracing::warn!(url = %url, "Ignoring unknown navigation target"),
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }
}

/// App over the builtin content with no debounce delay
#[cfg(test)]
pub(crate) fn test_app() -> App {
    let store = ContentStore::builtin().unwrap();
    App::new(Services::new(store), Duration::ZERO)
}
