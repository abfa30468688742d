//! Terminal UI module
//!
//! Synchronous, escape-sequence based TUI with:
//! - Cursor navigation that skips headings and spacers
//! - Frame rendering with a highlighted selection and a status line
//! - Raw byte input decoding
//! - A drop guard that restores the terminal on every exit path
//! - Termination signals turned into a clean quit

mod app;
mod controller;
mod event;
mod render;
mod session;
mod signal;
mod theme;

pub use app::*;
pub use controller::*;
pub use event::*;
pub use render::*;
pub use session::*;
pub use signal::*;
pub use theme::*;
