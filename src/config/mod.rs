//! Configuration module
//!
//! Handles user configuration (`<config dir>/ticklist/config.toml`), layered
//! under `TICKLIST_*` environment variables.

mod settings;

pub use settings::*;
