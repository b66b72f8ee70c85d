//! Tests for the single-level undo store

use super::*;

fn snap(rows: &[&str], cx: usize, cy: usize) -> Snapshot {
    Snapshot {
        rows: rows.iter().map(|s| s.to_string()).collect(),
        cx,
        cy,
        rowoff: 0,
        coloff: 0,
        dirty: 0,
    }
}

#[test]
fn test_swap_without_history_is_none() {
    let mut undo = UndoStore::new();
    assert!(!undo.has_snapshot());
    assert_eq!(undo.swap(snap(&["now"], 0, 0)), None);
    // A failed swap must not store anything
    assert!(!undo.has_snapshot());
}

#[test]
fn test_record_then_swap_returns_recorded() {
    let mut undo = UndoStore::new();
    undo.record(snap(&["before"], 1, 0));
    let restored = undo.swap(snap(&["after"], 2, 0)).unwrap();
    assert_eq!(restored.rows, vec!["before".to_string()]);
    assert_eq!(restored.cx, 1);
}

#[test]
fn test_record_replaces_previous_snapshot() {
    let mut undo = UndoStore::new();
    undo.record(snap(&["first"], 0, 0));
    undo.record(snap(&["second"], 0, 0));
    let restored = undo.swap(snap(&["now"], 0, 0)).unwrap();
    assert_eq!(restored.rows, vec!["second".to_string()]);
}

#[test]
fn test_swap_twice_is_identity() {
    let mut undo = UndoStore::new();
    undo.record(snap(&["old"], 0, 0));
    let current = snap(&["new"], 3, 1);

    let first = undo.swap(current.clone()).unwrap();
    let second = undo.swap(first).unwrap();
    assert_eq!(second, current);
}
