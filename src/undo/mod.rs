//! Single-level undo
//! One full snapshot of the mutable editor sub-state, swapped on demand

/// Deep copy of the mutable sub-state: buffer rows, cursor, offsets and
/// the dirty counter. An explicit clone, not a serialized blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub rows: Vec<String>,
    pub cx: usize,
    pub cy: usize,
    pub rowoff: usize,
    pub coloff: usize,
    pub dirty: u64,
}

/// Holds at most one prior snapshot.
///
/// `swap` exchanges the stored snapshot with the current state, which
/// makes undo its own inverse: applying it twice returns to the
/// post-mutation state, never two steps back.
#[derive(Debug, Clone, Default)]
pub struct UndoStore {
    slot: Option<Snapshot>,
}

impl UndoStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pre-mutation snapshot, discarding any earlier one
    pub fn record(&mut self, snapshot: Snapshot) {
        self.slot = Some(snapshot);
    }

    /// Exchange the stored snapshot with `current`. Returns the stored
    /// snapshot to restore, or `None` when there is no history yet.
    pub fn swap(&mut self, current: Snapshot) -> Option<Snapshot> {
        match self.slot.take() {
            Some(prev) => {
                self.slot = Some(current);
                Some(prev)
            }
            None => None,
        }
    }

    #[must_use]
    pub fn has_snapshot(&self) -> bool {
        self.slot.is_some()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
