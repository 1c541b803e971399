//! Keyboard event handling

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_core::{NavKey, OverlayOutcome, Section};

use crate::tui::app::{App, Popup};

/// Lines moved per PageUp/PageDown
const PAGE: isize = 10;

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.popup {
            Popup::Search => self.handle_search_key(key, now),
            Popup::Help => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                    self.popup = Popup::None;
                }
            }
            Popup::None => self.handle_main_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        if is_ctrl(&key, 'c') {
            self.close_search();
            return;
        }

        let nav = match key.code {
            KeyCode::Esc => NavKey::Escape,
            KeyCode::Up => NavKey::Up,
            KeyCode::Down => NavKey::Down,
            KeyCode::Enter => NavKey::Enter,
            KeyCode::Backspace => {
                self.search.backspace(now);
                return;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.insert_char(c, now);
                return;
            }
            _ => return,
        };

        match self.search.handle_key(nav) {
            OverlayOutcome::None => {}
            OverlayOutcome::Closed => self.popup = Popup::None,
            OverlayOutcome::Navigate(url) => {
                self.popup = Popup::None;
                self.navigate(&url);
            }
        }
    }

    fn handle_main_key(&mut self, key: KeyEvent) {
        if is_ctrl(&key, 'c') {
            self.should_quit = true;
            return;
        }
        if is_ctrl(&key, 'k') {
            self.open_search();
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.open_search(),
            KeyCode::Char('?') => self.popup = Popup::Help,
            KeyCode::Tab => self.switch_section(self.route.section.next()),
            KeyCode::BackTab => self.switch_section(self.route.section.prev()),
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                if let Some(section) = Section::ALL.get(idx) {
                    self.switch_section(*section);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(PAGE),
            KeyCode::PageUp => self.scroll_by(-PAGE),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
    }
}
