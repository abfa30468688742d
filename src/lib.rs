//! Ticklist - a terminal-resident checklist viewer
//!
//! Renders section headings and checkable items on the alternate screen,
//! lets the user move a cursor between items and toggle them, and restores
//! the terminal on exit.
//!
//! # Modules
//!
//! - [`checklist`] - Entry model, document, sample data and grouping
//! - [`tui`] - Cursor control, rendering, input decoding, terminal session
//! - [`config`] - Layered configuration
//! - [`error`] - Error types

pub mod checklist;
pub mod config;
pub mod error;
pub mod tui;

pub use checklist::{ChecklistItem, Document, Entry, Heading};
pub use config::Config;
pub use error::{Error, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
