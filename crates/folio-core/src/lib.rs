//! Folio core library
//!
//! Portfolio content, the global search engine, and the navigation state
//! behind the search overlay. Nothing in here touches the terminal.
//!
//! Key components:
//! - `content` - Immutable content store and record types
//! - `search` - Case-insensitive substring search across collections
//! - `debounce` - Quiescence-window input settling
//! - `overlay` - Search overlay state machine and controller
//! - `route` - Section routes and result URLs
//! - `config` - On-disk configuration

pub mod config;
pub mod content;
pub mod debounce;
pub mod overlay;
pub mod route;
pub mod search;
pub mod text;

pub use config::FolioConfig;
pub use content::{ContentError, ContentStore};
pub use debounce::Debouncer;
pub use overlay::{NavKey, OverlayOutcome, OverlayState, SearchController};
pub use route::{Route, Section};
pub use search::{ContentType, SearchEngine, SearchableItem, MAX_RESULTS};
