//! Event handlers for the TUI

pub mod event_loop;
pub mod keyboard;
pub mod rendering;
