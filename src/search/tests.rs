//! Tests for the incremental search engine

use super::*;

fn fixture() -> Buffer {
    let lines = [
        "all work and no play",
        "makes Jack a dull boy",
        "ALL WORK and no play",
        "small hall, tall wall",
    ];
    let mut buf = Buffer::new();
    for (i, line) in lines.iter().enumerate() {
        buf.insert_row(i, *line);
    }
    buf
}

fn typed(state: &mut SearchState, query: &str, buf: &Buffer) {
    for c in query.chars() {
        state.push_char(c, buf);
    }
}

#[test]
fn test_matches_are_line_major_column_minor() {
    let buf = fixture();
    let mut state = SearchState::new();
    state.begin();
    typed(&mut state, "all", &buf);

    let hits: Vec<(usize, usize)> = state.matches().iter().map(|h| (h.line, h.col)).collect();
    assert_eq!(
        hits,
        vec![(0, 0), (2, 0), (3, 2), (3, 7), (3, 13), (3, 18)]
    );
}

#[test]
fn test_search_is_case_insensitive() {
    let buf = fixture();
    let mut state = SearchState::new();
    state.begin();
    typed(&mut state, "WORK", &buf);
    assert_eq!(state.match_count(), 2);
}

#[test]
fn test_metacharacters_match_literally() {
    let mut buf = Buffer::new();
    buf.insert_row(0, "price is $5 (a+b)*c");
    let mut state = SearchState::new();
    state.begin();
    typed(&mut state, "(a+b)", &buf);
    assert_eq!(state.match_count(), 1);
    assert_eq!(state.current(), Some(SearchHit { line: 0, col: 12 }));
}

#[test]
fn test_columns_are_char_indices() {
    let mut buf = Buffer::new();
    buf.insert_row(0, "ギットハブ hub");
    let mut state = SearchState::new();
    state.begin();
    typed(&mut state, "hub", &buf);
    assert_eq!(state.current(), Some(SearchHit { line: 0, col: 6 }));
}

#[test]
fn test_first_match_returned_on_each_edit() {
    let buf = fixture();
    let mut state = SearchState::new();
    state.begin();
    let hit = state.push_char('a', &buf).unwrap();
    assert_eq!((hit.line, hit.col), (0, 0));
    let hit = state.push_char('l', &buf).unwrap();
    assert_eq!((hit.line, hit.col), (0, 0));
}

#[test]
fn test_cycle_wraps_to_first() {
    let buf = fixture();
    let mut state = SearchState::new();
    state.begin();
    typed(&mut state, "all", &buf);

    let n = state.match_count();
    let first = state.current().unwrap();
    let mut last = None;
    for _ in 0..n {
        last = state.next();
    }
    // A full cycle of advances lands back on the first match
    assert_eq!(last, Some(first));
}

#[test]
fn test_prev_wraps_to_last() {
    let buf = fixture();
    let mut state = SearchState::new();
    state.begin();
    typed(&mut state, "all", &buf);

    let hit = state.prev().unwrap();
    assert_eq!((hit.line, hit.col), (3, 18));
}

#[test]
fn test_no_match_yields_nothing() {
    let buf = fixture();
    let mut state = SearchState::new();
    state.begin();
    typed(&mut state, "zzz", &buf);
    assert_eq!(state.match_count(), 0);
    assert_eq!(state.current(), None);
    assert_eq!(state.next(), None);
    assert_eq!(state.prev(), None);
}

#[test]
fn test_clear_query_preserves_matches_and_index() {
    let buf = fixture();
    let mut state = SearchState::new();
    state.begin();
    typed(&mut state, "all", &buf);
    state.next();
    let idx_hit = state.current();
    let count = state.match_count();

    state.clear_query();
    assert_eq!(state.query(), "");
    assert_eq!(state.match_count(), count);
    assert_eq!(state.current(), idx_hit);
}

#[test]
fn test_end_clears_everything() {
    let buf = fixture();
    let mut state = SearchState::new();
    state.begin();
    typed(&mut state, "all", &buf);
    state.end();
    assert_eq!(state.query(), "");
    assert_eq!(state.match_count(), 0);
}
