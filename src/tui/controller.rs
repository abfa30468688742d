//! Viewport and selection cursor
//!
//! The cursor only ever rests on selectable entries. The viewport top is
//! fixed: moving the cursor never scrolls the window, so in documents taller
//! than the viewport the highlight can leave the visible rows.

use tracing::debug;

use crate::checklist::Document;

/// Selection and visible window over a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Selected entry index; `None` when the document has nothing selectable
    pub selected: Option<usize>,
    /// First document index drawn on screen
    pub top: usize,
    /// Number of document rows drawn
    pub height: usize,
}

impl Viewport {
    /// Place the cursor on the first selectable entry
    pub fn new(document: &Document, height: usize) -> Self {
        Self {
            selected: document.first_selectable(),
            top: 0,
            height,
        }
    }

    /// Document indices currently visible, clipped to the document length
    pub fn visible_range(&self, document: &Document) -> std::ops::Range<usize> {
        let start = self.top.min(document.len());
        let end = self.top.saturating_add(self.height).min(document.len());
        start..end
    }

    /// Move the cursor by `delta`, skipping non-selectable entries
    ///
    /// Scans from `selected + delta` one step at a time in the direction of
    /// `delta` and stops on the first selectable entry. Running off either
    /// end leaves the selection where it was.
    pub fn move_selection(&mut self, document: &Document, delta: isize) {
        let Some(selected) = self.selected else {
            return;
        };
        let step: isize = if delta > 0 { 1 } else { -1 };

        // A target beyond isize range is off the end of any document
        let Some(mut index) = (selected as isize).checked_add(delta) else {
            return;
        };
        while index >= 0 && (index as usize) < document.len() {
            if document.is_selectable(index as usize) {
                debug!("Selection moved {} -> {}", selected, index);
                self.selected = Some(index as usize);
                return;
            }
            index += step;
        }
    }

    /// Flip the selected item. No-op when nothing is selected or the
    /// selection does not point at an item.
    pub fn toggle_selected(&self, document: &mut Document) -> Option<bool> {
        let checked = document.toggle(self.selected?)?;
        debug!("Toggled entry {:?} -> {}", self.selected, checked);
        Some(checked)
    }
}
