//! Line buffer
//! Raw text lines, their tab-expanded render cache, and file I/O
//!
//! ## buffer/ Invariants
//!
//! - `render` always has one entry per raw row after any mutating call
//!   returns, each the tab-expanded form of its raw row.
//! - Row indices passed in are trusted to be `<= line_count()`; column
//!   indices are clamped, never rejected.
//! - `dirty` only ever grows, except when `save`/`from_file`/`restore`
//!   reset it.
//! - Buffer code never touches the cursor except through returned row
//!   indices.

use crate::constants::layout::TAB_STOP;
use crate::constants::ui::NO_NAME;
use crate::error::EditorError;
use std::fs;
use std::path::{Path, PathBuf};

/// Platform line separator used for file load/save
#[cfg(windows)]
pub const LINE_SEP: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEP: &str = "\n";

/// The editor's line buffer: raw rows plus their render cache
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    /// Raw text lines, no terminators
    rows: Vec<String>,
    /// Tab-expanded form of each raw line
    render: Vec<String>,
    /// Mutation counter; non-zero means unsaved changes
    dirty: u64,
    /// Backing file, if any
    filename: Option<PathBuf>,
}

impl Buffer {
    /// Create an empty buffer with no backing file
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a buffer from `path`.
    ///
    /// The one operation allowed to fail loudly: it runs before the
    /// terminal enters raw mode, so a read error propagates to the caller.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| EditorError::io(format!("{}: {}", path.display(), e)))?;
        let rows: Vec<String> = contents.trim_end().split(LINE_SEP).map(String::from).collect();
        let render = rows.iter().map(|r| expand_row(r)).collect();
        Ok(Buffer {
            rows,
            render,
            dirty: 0,
            filename: Some(path.to_path_buf()),
        })
    }

    /// Join all rows with the platform separator and write to the backing
    /// file. Returns the byte count written; the error is a value for the
    /// caller to surface, never a panic. `dirty` is cleared only on success.
    pub fn save(&mut self) -> Result<usize, EditorError> {
        let path = self
            .filename
            .clone()
            .ok_or_else(|| EditorError::io("no file name"))?;
        let contents = self.rows.join(LINE_SEP);
        fs::write(&path, &contents)
            .map_err(|e| EditorError::io(format!("{}: {}", path.display(), e)))?;
        self.dirty = 0;
        Ok(contents.len())
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw row at `y`, if it exists
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&str> {
        self.rows.get(y).map(String::as_str)
    }

    /// Render-cache row at `y`, if it exists
    #[must_use]
    pub fn render_row(&self, y: usize) -> Option<&str> {
        self.render.get(y).map(String::as_str)
    }

    /// Length of row `y` in code points (0 for the virtual line)
    #[must_use]
    pub fn row_len(&self, y: usize) -> usize {
        self.rows.get(y).map_or(0, |r| r.chars().count())
    }

    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[must_use]
    pub fn dirty_count(&self) -> u64 {
        self.dirty
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Name shown in the status bar
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.filename
            .as_deref()
            .and_then(Path::to_str)
            .unwrap_or(NO_NAME)
    }

    #[must_use]
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Insert `c` into row `cy` at char position `at`.
    ///
    /// On the virtual line past end-of-buffer an empty row is appended
    /// first. An out-of-range `at` clamps to the row end: insertion at an
    /// invalid index degrades to append rather than erroring. Returns the
    /// row index, unchanged.
    pub fn insert_char(&mut self, cy: usize, at: usize, c: char) -> usize {
        if cy == self.rows.len() {
            self.insert_row(cy, String::new());
        }
        let row = &mut self.rows[cy];
        let n = row.chars().count();
        let pos = if at > n { n } else { at };
        let byte = byte_index(row, pos);
        row.insert(byte, c);
        self.update_render(cy);
        self.dirty += 1;
        cy
    }

    /// Delete the character at char position `at` in row `cy`.
    ///
    /// No-op on an empty buffer or on the virtual line. A row left empty
    /// is removed outright, pulling the row index up by one unless it was
    /// the first row. Returns the possibly adjusted row index.
    pub fn delete_char(&mut self, cy: usize, at: usize) -> usize {
        if self.rows.is_empty() || cy == self.rows.len() {
            return cy;
        }
        let row = &mut self.rows[cy];
        let n = row.chars().count();
        if at < n {
            let byte = byte_index(row, at);
            row.remove(byte);
        }
        if self.rows[cy].is_empty() {
            self.rows.remove(cy);
            self.render.remove(cy);
            self.dirty += 1;
            if !self.rows.is_empty() && cy > 0 {
                return cy - 1;
            }
            return cy;
        }
        self.update_render(cy);
        self.dirty += 1;
        cy
    }

    /// Splice a new row containing `text` at index `cy`
    pub fn insert_row(&mut self, cy: usize, text: impl Into<String>) {
        let text = text.into();
        let rendered = expand_row(&text);
        self.rows.insert(cy, text);
        self.render.insert(cy, rendered);
        self.dirty += 1;
    }

    /// Split row `cy` at char position `at`: the row keeps the head, the
    /// tail becomes a new row spliced in below.
    pub fn split_row(&mut self, cy: usize, at: usize) {
        let row = &mut self.rows[cy];
        let byte = byte_index(row, at);
        let tail = row.split_off(byte);
        self.update_render(cy);
        self.insert_row(cy + 1, tail);
        self.dirty += 1;
    }

    /// Replace the whole buffer content, rebuilding the render cache
    /// (undo restoration)
    pub fn restore(&mut self, rows: Vec<String>, dirty: u64) {
        self.render = rows.iter().map(|r| expand_row(r)).collect();
        self.rows = rows;
        self.dirty = dirty;
    }

    fn update_render(&mut self, cy: usize) {
        self.render[cy] = expand_row(&self.rows[cy]);
    }
}

/// Tab-expanded render form of one raw row: each tab becomes eight spaces
/// (the original's flat expansion, preserved)
fn expand_row(raw: &str) -> String {
    if !raw.contains('\t') {
        return raw.to_string();
    }
    raw.replace('\t', &" ".repeat(TAB_STOP))
}

/// Byte offset of char position `at` in `s` (s.len() when past the end)
fn byte_index(s: &str, at: usize) -> usize {
    s.char_indices().nth(at).map_or(s.len(), |(i, _)| i)
}
