//! Renderable entries
//!
//! A document is a flat list of [`Entry`] values. Headings (including blank
//! spacer lines) are inert; checklist items are the only selectable entries.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};

/// Glyph for a completed item
pub const CHECKED_GLYPH: &str = "[x]";

/// Glyph for an open item
pub const UNCHECKED_GLYPH: &str = "[ ]";

/// Display text for one entry plus the styling the renderer applies to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine {
    pub text: String,
    pub underline: bool,
}

/// A non-selectable line of text, used for group labels and blank spacers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    text: String,
    underline: bool,
}

impl Heading {
    /// Create a plain heading
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            underline: false,
        }
    }

    /// Create an underlined heading (a group label)
    pub fn underlined(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            underline: true,
        }
    }

    /// Create an empty spacer line
    pub fn blank() -> Self {
        Self::new("")
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_underlined(&self) -> bool {
        self.underline
    }
}

/// One component of a timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl Precision {
    const ALL: [Precision; 5] = [
        Precision::Year,
        Precision::Month,
        Precision::Day,
        Precision::Hour,
        Precision::Minute,
    ];

    fn bit(self) -> u8 {
        match self {
            Self::Year => 1 << 0,
            Self::Month => 1 << 1,
            Self::Day => 1 << 2,
            Self::Hour => 1 << 3,
            Self::Minute => 1 << 4,
        }
    }

    fn letter(self) -> char {
        match self {
            Self::Year => 'Y',
            Self::Month => 'M',
            Self::Day => 'D',
            Self::Hour => 'h',
            Self::Minute => 'm',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.letter() == c)
    }
}

/// Set of timestamp components that are meaningful for an item
///
/// Parses from and displays as the compact letter notation `"YMDhm"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrecisionSet(u8);

impl PrecisionSet {
    /// No components
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Year, month and day
    pub fn date() -> Self {
        Self::from_iter([Precision::Year, Precision::Month, Precision::Day])
    }

    /// Every component down to the minute
    pub fn full() -> Self {
        Self::from_iter(Precision::ALL)
    }

    pub fn with(mut self, precision: Precision) -> Self {
        self.0 |= precision.bit();
        self
    }

    pub fn contains(&self, precision: Precision) -> bool {
        self.0 & precision.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Format `timestamp`, omitting every component not in the set
    pub fn format(&self, timestamp: &NaiveDateTime) -> String {
        let mut date = Vec::new();
        if self.contains(Precision::Year) {
            date.push(timestamp.format("%Y").to_string());
        }
        if self.contains(Precision::Month) {
            date.push(timestamp.format("%m").to_string());
        }
        if self.contains(Precision::Day) {
            date.push(timestamp.format("%d").to_string());
        }

        let time = match (
            self.contains(Precision::Hour),
            self.contains(Precision::Minute),
        ) {
            (true, true) => Some(timestamp.format("%H:%M").to_string()),
            (true, false) => Some(timestamp.format("%Hh").to_string()),
            (false, true) => Some(timestamp.format(":%M").to_string()),
            (false, false) => None,
        };

        let date = date.join("-");
        match time {
            Some(time) if date.is_empty() => time,
            Some(time) => format!("{date} {time}"),
            None => date,
        }
    }
}

impl FromIterator<Precision> for PrecisionSet {
    fn from_iter<I: IntoIterator<Item = Precision>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl FromStr for PrecisionSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| {
                Precision::from_letter(c)
                    .ok_or_else(|| format!("unknown precision letter '{c}' in \"{s}\""))
            })
            .collect()
    }
}

impl fmt::Display for PrecisionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for precision in Precision::ALL {
            if self.contains(precision) {
                write!(f, "{}", precision.letter())?;
            }
        }
        Ok(())
    }
}

/// A checkable item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub checked: bool,
    pub timestamp: NaiveDateTime,
    pub precision: PrecisionSet,
    pub content: String,
}

impl ChecklistItem {
    /// Create an unchecked item stamped with the current local time
    ///
    /// The clock is read on every call.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            checked: false,
            timestamp: Local::now().naive_local(),
            precision: PrecisionSet::date(),
            content: content.into(),
        }
    }

    pub fn at(mut self, timestamp: NaiveDateTime, precision: PrecisionSet) -> Self {
        self.timestamp = timestamp;
        self.precision = precision;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    pub fn glyph(&self) -> &'static str {
        if self.checked {
            CHECKED_GLYPH
        } else {
            UNCHECKED_GLYPH
        }
    }

    /// Timestamp text limited to this item's precision
    pub fn formatted_timestamp(&self) -> String {
        self.precision.format(&self.timestamp)
    }
}

/// One line-level unit of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Heading(Heading),
    Item(ChecklistItem),
}

impl Entry {
    /// Whether the cursor may land on this entry
    pub fn selectable(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    pub fn as_item(&self) -> Option<&ChecklistItem> {
        match self {
            Self::Item(item) => Some(item),
            Self::Heading(_) => None,
        }
    }

    pub fn as_item_mut(&mut self) -> Option<&mut ChecklistItem> {
        match self {
            Self::Item(item) => Some(item),
            Self::Heading(_) => None,
        }
    }

    /// Produce the display text for this entry
    pub fn render(&self, show_timestamps: bool) -> EntryLine {
        match self {
            Self::Heading(heading) => EntryLine {
                text: heading.text.clone(),
                underline: heading.underline,
            },
            Self::Item(item) => {
                let mut text = format!("{} {}", item.glyph(), item.content);
                let stamp = item.formatted_timestamp();
                if show_timestamps && !stamp.is_empty() {
                    text.push_str("  ");
                    text.push_str(&stamp);
                }
                EntryLine {
                    text,
                    underline: false,
                }
            }
        }
    }
}

impl From<Heading> for Entry {
    fn from(heading: Heading) -> Self {
        Self::Heading(heading)
    }
}

impl From<ChecklistItem> for Entry {
    fn from(item: ChecklistItem) -> Self {
        Self::Item(item)
    }
}
