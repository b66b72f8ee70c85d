//! Viewport management
//! Scroll offsets and screen geometry for the visible part of the buffer
//!
//! ## viewport/ Invariants
//!
//! - The viewport never mutates buffer contents.
//! - After `scroll`, the cursor's render cell lies inside the visible
//!   grid whenever the buffer is non-empty.
//! - `screenrows` always reserves the two chrome rows.
//! - Offsets only change in `scroll` and `set_offsets`.

use crate::constants::layout::CHROME_ROWS;

/// Visible window into the buffer, in render coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First visible buffer line
    rowoff: usize,
    /// First visible render column
    coloff: usize,
    /// Visible text rows (terminal rows minus chrome)
    screenrows: usize,
    /// Visible columns
    screencols: usize,
}

impl Viewport {
    /// Build from raw terminal dimensions
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Viewport {
            rowoff: 0,
            coloff: 0,
            screenrows: rows.saturating_sub(CHROME_ROWS),
            screencols: cols,
        }
    }

    /// Recompute offsets so the cursor cell `(cy, rx)` stays visible
    pub fn scroll(&mut self, cy: usize, rx: usize) {
        if cy < self.rowoff {
            self.rowoff = cy;
        }
        if cy >= self.rowoff + self.screenrows {
            self.rowoff = cy - self.screenrows + 1;
        }
        if rx < self.coloff {
            self.coloff = rx;
        }
        if rx >= self.coloff + self.screencols {
            self.coloff = rx - self.screencols + 1;
        }
    }

    /// Apply new terminal dimensions
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.screenrows = rows.saturating_sub(CHROME_ROWS);
        self.screencols = cols;
    }

    /// Set the scroll position directly (used when restoring a snapshot)
    pub fn set_offsets(&mut self, rowoff: usize, coloff: usize) {
        self.rowoff = rowoff;
        self.coloff = coloff;
    }

    #[must_use]
    pub fn rowoff(&self) -> usize {
        self.rowoff
    }

    #[must_use]
    pub fn coloff(&self) -> usize {
        self.coloff
    }

    #[must_use]
    pub fn screenrows(&self) -> usize {
        self.screenrows
    }

    #[must_use]
    pub fn screencols(&self) -> usize {
        self.screencols
    }
}
