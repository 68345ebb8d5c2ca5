//! Document model for pow.
//!
//! Provides the line-array text buffer together with cursor movement,
//! viewport scrolling, incremental search and file persistence.

mod buffer;
mod cursor;
mod file_io;
mod search;
mod viewport;

pub use buffer::TextBuffer;
pub use cursor::{clamp_cursor, move_cursor, row_delta, Cursor, Motion, NavKey};
pub use file_io::{load_document, FsPersistence, LoadedDocument, Persistence};
pub use search::{SearchMatch, SearchState};
pub use viewport::Viewport;
