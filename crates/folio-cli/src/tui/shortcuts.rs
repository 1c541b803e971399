//! Keyboard shortcut labels for consistent documentation.

pub const SEARCH: &str = "Ctrl+K";
pub const SEARCH_ALT: &str = "/";
pub const NEXT_SECTION: &str = "Tab";
pub const PREV_SECTION: &str = "Shift+Tab";
pub const JUMP_SECTION: &str = "1-9";
pub const SCROLL: &str = "↑↓ j/k PgUp/PgDn";
pub const HELP: &str = "?";
pub const QUIT: &str = "q / Ctrl+C";
