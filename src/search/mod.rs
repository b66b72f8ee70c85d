//! Incremental search over the line buffer
//!
//! The live query is matched as a case-insensitive literal: the typed
//! text is escaped before compilation so user metacharacters never reach
//! the regex engine. Every occurrence is collected in line-major,
//! column-minor order and navigated through a cyclic index.

use crate::buffer::Buffer;
use regex::RegexBuilder;

/// One occurrence of the query, in raw char coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub line: usize,
    pub col: usize,
}

/// Live search state: query text, ordered hits, cyclic index
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    matches: Vec<SearchHit>,
    index: usize,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset everything on entering search mode
    pub fn begin(&mut self) {
        self.query.clear();
        self.matches.clear();
        self.index = 0;
    }

    /// Reset everything on leaving search mode
    pub fn end(&mut self) {
        self.begin();
    }

    /// Backspace while searching: the typed query resets but the match
    /// set and index from the previous query survive. Intentional state
    /// carried across the reset, preserved for compatibility.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Append a printable character and rescan the whole buffer.
    /// Returns the first hit, if any, for the cursor to jump to.
    pub fn push_char(&mut self, c: char, buffer: &Buffer) -> Option<SearchHit> {
        self.query.push(c);
        self.rescan(buffer);
        self.current()
    }

    /// Rescan `buffer` for the current query, resetting the index
    pub fn rescan(&mut self, buffer: &Buffer) {
        self.matches.clear();
        self.index = 0;

        let re = RegexBuilder::new(&regex::escape(&self.query))
            .case_insensitive(true)
            .build();
        let re = match re {
            Ok(re) => re,
            Err(_) => return,
        };

        for (line, row) in buffer.rows().iter().enumerate() {
            for m in re.find_iter(row) {
                let col = row[..m.start()].chars().count();
                self.matches.push(SearchHit { line, col });
            }
        }
    }

    /// Advance to the next hit, wrapping past the end
    pub fn next(&mut self) -> Option<SearchHit> {
        if self.matches.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.matches.len();
        self.current()
    }

    /// Retreat to the previous hit, wrapping below zero to the last
    pub fn prev(&mut self) -> Option<SearchHit> {
        if self.matches.is_empty() {
            return None;
        }
        self.index = match self.index {
            0 => self.matches.len() - 1,
            i => i - 1,
        };
        self.current()
    }

    /// Hit at the current index, if the index is in range
    #[must_use]
    pub fn current(&self) -> Option<SearchHit> {
        self.matches.get(self.index).copied()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn matches(&self) -> &[SearchHit] {
        &self.matches
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
