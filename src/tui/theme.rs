//! TUI Theme configuration
//!
//! Colours and attributes used by the renderer, kept to the basic ANSI
//! palette so any VT-compatible terminal can display them.

use crossterm::style::{Attribute, Color};

/// Help text pinned to the bottom row
pub const HELP_TEXT: &str = "<Up>/<Down>:scroll <Space>:toggle q:quit";

/// Theme configuration for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Background of the selected row
    pub selection_bg: Color,
    /// Attribute applied to the status line
    pub status_attr: Attribute,
    /// Text of the status line
    pub help_text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selection_bg: Color::DarkGrey,
            status_attr: Attribute::Reverse,
            help_text: HELP_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.selection_bg, Color::DarkGrey);
        assert_eq!(theme.status_attr, Attribute::Reverse);
        assert!(theme.help_text.contains("<Space>:toggle"));
    }
}
