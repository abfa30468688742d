//! Frame rendering with raw escape sequences
//!
//! Every frame is queued into an in-memory buffer and written to the
//! terminal with one `write_all` + `flush`, so the screen never shows the
//! cleared-but-not-yet-drawn state.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor},
    terminal::{Clear, ClearType},
};

use super::controller::Viewport;
use super::theme::Theme;
use crate::checklist::Document;

/// Zero-based row far below any real terminal; cursor moves clamp it to
/// the bottom row.
const BOTTOM_ROW: u16 = 998;

/// Draws a document slice and the status line
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    theme: Theme,
    show_timestamps: bool,
}

impl Renderer {
    pub fn new(theme: Theme, show_timestamps: bool) -> Self {
        Self {
            theme,
            show_timestamps,
        }
    }

    /// Draw one full frame and flush it to `out`
    pub fn draw<W: Write>(&self, document: &Document, view: &Viewport, out: &mut W) -> io::Result<()> {
        let mut frame = Vec::new();
        self.queue_document(document, view, &mut frame)?;
        self.queue_status_line(&mut frame)?;

        out.write_all(&frame)?;
        out.flush()
    }

    fn queue_document<W: Write>(&self, document: &Document, view: &Viewport, out: &mut W) -> io::Result<()> {
        queue!(out, Clear(ClearType::All))?;

        for (row, index) in view.visible_range(document).enumerate() {
            let Some(entry) = document.get(index) else {
                break;
            };
            // Rows past u16::MAX cannot be addressed
            let Ok(row) = u16::try_from(row) else {
                break;
            };
            let selected = view.selected == Some(index);
            let line = entry.render(self.show_timestamps);

            if selected {
                queue!(out, SetBackgroundColor(self.theme.selection_bg))?;
            }
            queue!(out, MoveTo(0, row))?;
            if line.underline {
                queue!(out, SetAttribute(Attribute::Underlined))?;
            }
            queue!(out, Print(&line.text), SetAttribute(Attribute::NoUnderline))?;
            if selected {
                // Erase with the selection background to highlight the full row
                queue!(out, Clear(ClearType::UntilNewLine))?;
            }
            queue!(out, SetBackgroundColor(Color::Reset))?;
        }
        Ok(())
    }

    fn queue_status_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(
            out,
            MoveTo(0, BOTTOM_ROW),
            SetAttribute(self.theme.status_attr),
            Print(&self.theme.help_text),
            SetAttribute(Attribute::Reset)
        )
    }
}
