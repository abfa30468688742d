//! The ordered list of entries shown on screen

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::entry::{ChecklistItem, Entry, Heading, PrecisionSet};

/// Fixed-length, ordered sequence of entries
///
/// Insertion order is display order. The only mutation offered is toggling
/// the `checked` flag of an item in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    entries: Vec<Entry>,
}

impl Document {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_selectable(&self, index: usize) -> bool {
        self.get(index).is_some_and(Entry::selectable)
    }

    /// Index of the first selectable entry
    pub fn first_selectable(&self) -> Option<usize> {
        self.entries.iter().position(Entry::selectable)
    }

    /// Flip the item at `index`. Returns the new state, or `None` when the
    /// index is out of range or not an item.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let item = self.entries.get_mut(index)?.as_item_mut()?;
        item.toggle();
        Some(item.checked)
    }

    /// All items in display order
    pub fn items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.entries.iter().filter_map(Entry::as_item)
    }
}

/// Order in which grouped items are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Calendar bucket used to group items under headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    Years,
    Months,
    Weeks,
    Days,
}

impl Grouping {
    /// Heading label for the bucket containing `timestamp`
    pub fn label(&self, timestamp: &NaiveDateTime) -> String {
        match self {
            Self::Years => timestamp.format("%Y").to_string(),
            Self::Months => timestamp.format("%Y-%m").to_string(),
            Self::Weeks => {
                let week = timestamp.iso_week();
                format!("{}-W{:02}", week.year(), week.week())
            }
            Self::Days => timestamp.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Sort `items` by timestamp and lay them out under one heading per group
///
/// Each group is an underlined heading, a blank spacer, then its items.
/// Consecutive groups are separated by another blank spacer.
pub fn group_items(mut items: Vec<ChecklistItem>, sort: SortOrder, grouping: Grouping) -> Document {
    match sort {
        SortOrder::Ascending => items.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        SortOrder::Descending => items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
    }

    let mut entries = Vec::new();
    let mut current: Option<String> = None;
    for item in items {
        let label = grouping.label(&item.timestamp);
        if current.as_deref() != Some(label.as_str()) {
            if current.is_some() {
                entries.push(Heading::blank().into());
            }
            entries.push(Heading::underlined(label.clone()).into());
            entries.push(Heading::blank().into());
            current = Some(label);
        }
        entries.push(item.into());
    }

    Document::new(entries)
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap_or_default()
}

fn precision(notation: &str) -> PrecisionSet {
    notation.parse().unwrap_or_default()
}

/// Items of the built-in sample checklist
pub fn sample_items() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::new("Do this one thing").at(at(2017, 7, 10, 3, 30), precision("YMDhm")),
        ChecklistItem::new("Do this other thing").at(at(2017, 7, 11, 3, 40), precision("YMDhm")),
        ChecklistItem::new("Do this last thing sometime")
            .at(at(2018, 1, 1, 0, 0), precision("Y"))
            .checked(true),
    ]
}

/// The built-in sample checklist: two labelled groups of items
pub fn sample_document() -> Document {
    let mut items = sample_items().into_iter();
    let mut entries: Vec<Entry> = Vec::with_capacity(8);

    entries.push(Heading::underlined("Group 1").into());
    entries.push(Heading::blank().into());
    entries.extend(items.by_ref().take(2).map(Entry::from));
    entries.push(Heading::blank().into());
    entries.push(Heading::underlined("Group 2").into());
    entries.push(Heading::blank().into());
    entries.extend(items.map(Entry::from));

    Document::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn headings(doc: &Document) -> Vec<String> {
        doc.entries()
            .iter()
            .map(|e| match e {
                Entry::Heading(h) => h.text().to_string(),
                Entry::Item(i) => format!("* {}", i.content),
            })
            .collect()
    }

    #[test]
    fn test_sample_shape() {
        let doc = sample_document();
        assert_eq!(doc.len(), 8);
        assert_eq!(
            headings(&doc),
            vec![
                "Group 1",
                "",
                "* Do this one thing",
                "* Do this other thing",
                "",
                "Group 2",
                "",
                "* Do this last thing sometime",
            ]
        );
        assert_eq!(doc.first_selectable(), Some(2));
        assert_eq!(doc.items().filter(|i| i.checked).count(), 1);
    }

    #[test]
    fn test_toggle_only_items() {
        let mut doc = sample_document();
        assert_eq!(doc.toggle(0), None);
        assert_eq!(doc.toggle(2), Some(true));
        assert_eq!(doc.toggle(2), Some(false));
        assert_eq!(doc.toggle(99), None);
        assert_eq!(doc, sample_document());
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::default();
        assert!(doc.is_empty());
        assert_eq!(doc.first_selectable(), None);
        assert!(!doc.is_selectable(0));
    }

    #[test]
    fn test_group_by_years_ascending() {
        let doc = group_items(sample_items(), SortOrder::Ascending, Grouping::Years);
        assert_eq!(
            headings(&doc),
            vec![
                "2017",
                "",
                "* Do this one thing",
                "* Do this other thing",
                "",
                "2018",
                "",
                "* Do this last thing sometime",
            ]
        );
    }

    #[test]
    fn test_group_by_days_descending() {
        let doc = group_items(sample_items(), SortOrder::Descending, Grouping::Days);
        assert_eq!(
            headings(&doc),
            vec![
                "2018-01-01",
                "",
                "* Do this last thing sometime",
                "",
                "2017-07-11",
                "",
                "* Do this other thing",
                "",
                "2017-07-10",
                "",
                "* Do this one thing",
            ]
        );
    }

    #[test]
    fn test_group_labels() {
        let ts = at(2017, 7, 10, 3, 30);
        assert_eq!(Grouping::Months.label(&ts), "2017-07");
        assert_eq!(Grouping::Weeks.label(&ts), "2017-W28");
        // 2018-01-01 is a Monday, first ISO week of 2018
        assert_eq!(Grouping::Weeks.label(&at(2018, 1, 1, 0, 0)), "2018-W01");
    }

    #[test]
    fn test_group_empty() {
        let doc = group_items(Vec::new(), SortOrder::Ascending, Grouping::Months);
        assert!(doc.is_empty());
    }
}
