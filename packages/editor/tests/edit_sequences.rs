//! Tests for edit sequences driven through the history
//!
//! This tests:
//! - The basic type / undo / split / merge walkthrough
//! - Insert and delete inverses at every position of a document
//! - Eviction and redo invalidation
//! - Load/save round trips through real files

use linepad_editor::{Cursor, CursorDir, Document, Edit, EditSession, History};

fn texts(doc: &Document) -> Vec<String> {
    doc.lines().iter().map(|l| l.to_string()).collect()
}

/// Every valid cursor position in `doc`, row-major
fn positions(doc: &Document) -> Vec<(usize, usize)> {
    doc.lines()
        .iter()
        .enumerate()
        .flat_map(|(row, line)| (0..=line.len()).map(move |col| (row, col)))
        .collect()
}

fn place_cursor(doc: &mut Document, row: usize, col: usize) {
    while doc.move_cursor(CursorDir::Up) {}
    while doc.move_cursor(CursorDir::Left) {}
    for _ in 0..row {
        assert!(doc.move_cursor(CursorDir::Down));
    }
    for _ in 0..col {
        assert!(doc.move_cursor(CursorDir::Right));
    }
}

#[test]
fn test_type_undo_split_merge_walkthrough() {
    let mut doc = Document::new();
    let mut history = History::new();

    for ch in ['a', 'b', 'c'] {
        let edit = Edit::insert(&doc, ch);
        history.apply(edit, &mut doc).unwrap();
    }
    assert_eq!(texts(&doc), vec!["abc"]);
    assert_eq!(doc.cursor(), Cursor::new(0, 3));

    assert!(history.undo(&mut doc).unwrap());
    assert_eq!(texts(&doc), vec!["ab"]);
    assert_eq!(doc.cursor(), Cursor::new(0, 2));

    let split = Edit::insert(&doc, '\n');
    history.apply(split, &mut doc).unwrap();
    assert_eq!(texts(&doc), vec!["ab", ""]);
    assert_eq!(doc.cursor(), Cursor::new(1, 0));

    let merge = Edit::delete(&doc).unwrap();
    history.apply(merge, &mut doc).unwrap();
    assert_eq!(texts(&doc), vec!["ab"]);
    assert_eq!(doc.cursor(), Cursor::new(0, 2));
    assert_eq!(doc.line_count(), 1);
}

#[test]
fn test_insert_is_inverted_everywhere() {
    let base = Document::from_text("first\n\nthird line\nx");

    for (row, col) in positions(&base) {
        for ch in ['q', '\n', 'é'] {
            let mut doc = base.clone();
            place_cursor(&mut doc, row, col);
            let before = doc.clone();

            let edit = Edit::insert(&doc, ch);
            edit.apply(&mut doc).unwrap();
            assert_ne!(doc, before);
            edit.undo(&mut doc).unwrap();

            assert_eq!(doc, before, "insert {:?} at {}:{}", ch, row, col);
        }
    }
}

#[test]
fn test_delete_is_inverted_everywhere() {
    let base = Document::from_text("first\n\nthird line\nx");

    for (row, col) in positions(&base) {
        let mut doc = base.clone();
        place_cursor(&mut doc, row, col);
        let before = doc.clone();

        let Some(edit) = Edit::delete(&doc) else {
            assert_eq!((row, col), (0, 0));
            continue;
        };
        edit.apply(&mut doc).unwrap();
        edit.undo(&mut doc).unwrap();

        assert_eq!(doc, before, "delete at {}:{}", row, col);
    }
}

#[test]
fn test_split_and_merge_are_exact() {
    let text = "0123456789";

    for k in 0..=text.len() {
        let mut doc = Document::from_text(text);
        place_cursor(&mut doc, 0, k);

        let split = Edit::insert(&doc, '\n');
        split.apply(&mut doc).unwrap();
        assert_eq!(doc.line(0).unwrap().len(), k);
        assert_eq!(doc.line(1).unwrap().len(), text.len() - k);
        assert_eq!(doc.line(0).unwrap().to_string(), text[..k]);
        assert_eq!(doc.line(1).unwrap().to_string(), text[k..]);

        let merge = Edit::delete(&doc).unwrap();
        merge.apply(&mut doc).unwrap();
        assert_eq!(texts(&doc), vec![text]);
        assert_eq!(doc.cursor(), Cursor::new(0, k));
    }
}

#[test]
fn test_eviction_keeps_most_recent_k() {
    const K: usize = 4;
    let mut doc = Document::new();
    let mut history = History::with_capacity(K);

    for ch in "abcde".chars() {
        let edit = Edit::insert(&doc, ch);
        history.apply(edit, &mut doc).unwrap();
    }
    assert_eq!(history.undo_levels(), K);

    for _ in 0..K {
        assert!(history.undo(&mut doc).unwrap());
    }
    assert!(!history.undo(&mut doc).unwrap());

    // The first edit was evicted, so undo bottoms out after it.
    assert_eq!(texts(&doc), vec!["a"]);
    assert_eq!(doc.cursor(), Cursor::new(0, 1));
}

#[test]
fn test_redo_after_new_edit_is_gone() {
    let mut doc = Document::new();
    let mut history = History::new();

    let edit = Edit::insert(&doc, 'a');
    history.apply(edit, &mut doc).unwrap();
    assert!(history.undo(&mut doc).unwrap());

    let edit = Edit::insert(&doc, 'b');
    history.apply(edit, &mut doc).unwrap();

    assert!(!history.redo(&mut doc).unwrap());
    assert_eq!(texts(&doc), vec!["b"]);
}

#[test]
fn test_undo_redo_full_cycle() {
    let mut session = EditSession::new(Document::from_text("hello\nworld"), 32);
    session.move_cursor(CursorDir::Down);
    for _ in 0..3 {
        session.move_cursor(CursorDir::Right);
    }

    let initial = session.document().clone();
    session.insert_char('\n').unwrap();
    session.delete_before_cursor().unwrap();
    session.delete_before_cursor().unwrap();
    session.insert_str("XY").unwrap();
    let edited = session.document().clone();
    assert_eq!(session.history().undo_levels(), 5);

    while session.undo().unwrap() {}
    assert_eq!(session.document(), &initial);

    while session.redo().unwrap() {}
    assert_eq!(session.document(), &edited);
    assert_eq!(texts(session.document()), vec!["hello", "woXYld"]);
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    for source in ["", "one line\n", "a\n\nb\n", "crlf\r\nkept\r\n", "tabs\tand ünïcode\n"] {
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        std::fs::write(&input, source).unwrap();

        let doc = Document::load(&input).unwrap();
        doc.save(&output).unwrap();

        let expected = if source.is_empty() { "\n" } else { source };
        assert_eq!(std::fs::read_to_string(&output).unwrap(), expected);
    }
}

#[test]
fn test_save_does_not_mutate() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = Document::from_text("abc\ndef");
    place_cursor(&mut doc, 1, 2);
    let before = doc.clone();

    doc.save(&dir.path().join("out.txt")).unwrap();
    assert_eq!(doc, before);
}

#[test]
fn test_save_to_unwritable_destination_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let doc = Document::from_text("abc");

    let result = doc.save(&dir.path().join("no-such-dir").join("out.txt"));
    assert!(result.is_err());
}
