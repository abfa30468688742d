//! Checklist document model
//!
//! - [`Entry`] is either a [`Heading`] (group label or blank spacer) or a
//!   selectable [`ChecklistItem`]
//! - [`Document`] is the fixed, ordered list the UI navigates
//! - [`group_items`] lays items out under calendar headings

mod document;
mod entry;

pub use document::*;
pub use entry::*;
