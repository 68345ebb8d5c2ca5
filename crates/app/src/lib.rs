//! Editor application for pow.
//!
//! This crate ties the document model to the terminal:
//! - `Session` - document, cursor, viewport, search and mode
//! - `Mode` - the interaction mode that owns keyboard input
//! - `dispatch` - routes a command to the active mode's handler
//! - `App` - the blocking event loop with redraw cadence
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        pow (bin)                          │
//! │  main.rs - CLI, config, terminal setup, App composition   │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                    pow-app (this crate)                   │
//! │  App, Session, Mode, dispatch                             │
//! └──────────────────────────────────────────────────────────┘
//!        │             │              │              │
//!        ▼             ▼              ▼              ▼
//!  ┌──────────┐  ┌──────────┐  ┌───────────┐  ┌───────────┐
//!  │pow-buffer│  │pow-modal │  │pow-keyboard│ │pow-clipboard│
//!  └──────────┘  └──────────┘  └───────────┘  └───────────┘
//! ```

mod app;
pub mod editing;
pub mod event;
mod modal_handler;
mod mode;
pub mod navigation;
mod session;

pub use app::App;
pub use event::{Event, EventHandler, EventSource};
pub use modal_handler::{dispatch, Services};
pub use mode::Mode;
pub use session::{Session, DEFAULT_TAB_SIZE, UNTITLED};
