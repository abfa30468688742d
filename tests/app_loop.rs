//! Integration tests for the interactive loop
//!
//! Drive the full draw → read → dispatch loop with in-memory input and
//! output, without touching the process terminal.

use std::io::Cursor;

use pretty_assertions::assert_eq;

use ticklist::checklist::{sample_document, Document, Entry, Grouping, SortOrder};
use ticklist::config::Config;
use ticklist::tui::{build_document, App};

/// Run the loop over `keys` and return the app plus everything written
fn run_keys(config: &Config, document: Document, keys: &[u8]) -> (App, String) {
    let mut app = App::new(config, document);
    let mut input = Cursor::new(keys.to_vec());
    let mut output = Vec::new();
    app.run_with(&mut input, &mut output).unwrap();
    (app, String::from_utf8(output).unwrap())
}

fn checked_states(doc: &Document) -> Vec<bool> {
    doc.items().map(|item| item.checked).collect()
}

#[test]
fn test_quit_immediately() {
    let (app, output) = run_keys(&Config::default(), sample_document(), b"q");
    assert_eq!(app.viewport().selected, Some(2));
    assert_eq!(app.document(), &sample_document());
    // One frame drawn before the quit was read
    assert_eq!(output.matches("\x1b[2J").count(), 1);
}

#[test]
fn test_navigate_and_toggle() {
    let (app, _) = run_keys(
        &Config::default(),
        sample_document(),
        b"\x1b[B \x1b[B \x1b[Bq",
    );
    assert_eq!(app.viewport().selected, Some(7));
    assert_eq!(checked_states(app.document()), vec![false, true, false]);
}

#[test]
fn test_down_past_last_item_is_noop() {
    let (app, _) = run_keys(
        &Config::default(),
        sample_document(),
        b"\x1b[B\x1b[B\x1b[B\x1b[Bq",
    );
    assert_eq!(app.viewport().selected, Some(7));
}

#[test]
fn test_toggle_twice_restores() {
    let (app, _) = run_keys(&Config::default(), sample_document(), b"  q");
    assert_eq!(app.document(), &sample_document());
}

#[test]
fn test_unknown_input_ignored() {
    let (app, output) = run_keys(&Config::default(), sample_document(), b"x\x1b[Zjkq");
    assert_eq!(app.viewport().selected, Some(2));
    assert_eq!(app.document(), &sample_document());
    // A frame per loop iteration: x, ESC[Z, j, k, q
    assert_eq!(output.matches("\x1b[2J").count(), 5);
}

#[test]
fn test_end_of_input_quits() {
    let (app, _) = run_keys(&Config::default(), sample_document(), b"\x1b[B");
    assert_eq!(app.viewport().selected, Some(3));
}

#[test]
fn test_each_frame_shows_current_state() {
    let (_, output) = run_keys(&Config::default(), sample_document(), b" q");
    let frames: Vec<&str> = output.split("\x1b[2J").filter(|f| !f.is_empty()).collect();
    assert_eq!(frames.len(), 2);
    assert!(frames[0].contains("[ ] Do this one thing"));
    assert!(frames[1].contains("[x] Do this one thing"));
}

#[test]
fn test_grouped_document_navigation() {
    let config = Config {
        group: Some(Grouping::Days),
        sort: SortOrder::Descending,
        ..Config::default()
    };
    let document = build_document(&config);
    let (app, _) = run_keys(&config, document, b"\x1b[B\x1b[B q");

    let selected = app.viewport().selected.unwrap();
    match app.document().get(selected) {
        Some(Entry::Item(item)) => {
            assert_eq!(item.content, "Do this one thing");
            assert!(item.checked);
        }
        other => panic!("selection on non-item: {:?}", other),
    }
}

#[test]
fn test_small_viewport_clips_rows() {
    let config = Config {
        viewport_height: 2,
        ..Config::default()
    };
    let (_, output) = run_keys(&config, sample_document(), b"q");
    assert!(output.contains("Group 1"));
    assert!(!output.contains("Do this one thing"));
}
