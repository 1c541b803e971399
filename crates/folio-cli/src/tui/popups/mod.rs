//! Popup overlays

pub mod common;
pub mod help;
pub mod search;
