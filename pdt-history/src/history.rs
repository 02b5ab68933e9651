//! Snapshot history with a movable cursor.

/// A branch-discarding undo/redo stack.
///
/// Invariants:
/// - there is always at least one snapshot
/// - `cursor < len()`
/// - stored snapshots are never mutated; undo and redo only move the cursor
///
/// Snapshots are compared by value, so `T` must implement `PartialEq` for
/// [`History::commit`] to recognise no-op edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    snapshots: Vec<T>,
    cursor: usize,
}

impl<T> History<T> {
    /// Creates a history whose only snapshot is `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// Returns the snapshot at the cursor.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    /// Returns the cursor position.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of stored snapshots (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a history is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns every stored snapshot, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> &[T] {
        &self.snapshots
    }

    /// Returns true if there is an earlier snapshot to step back to.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns true if an undone snapshot can be stepped forward to.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Steps back one snapshot if possible and returns the current one.
    pub fn undo(&mut self) -> &T {
        if self.can_undo() {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Steps forward one snapshot if possible and returns the current one.
    pub fn redo(&mut self) -> &T {
        if self.can_redo() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Discards all history and starts over from `initial`.
    pub fn reset(&mut self, initial: T) {
        self.snapshots.clear();
        self.snapshots.push(initial);
        self.cursor = 0;
    }

    /// Starts a fresh history from a document that came from outside the
    /// editing session (an imported file, restored state).
    ///
    /// Nothing from the previous session remains undoable.
    pub fn load_external(&mut self, snapshot: T) {
        self.reset(snapshot);
    }

    /// Consumes the history and returns the current snapshot.
    #[must_use]
    pub fn into_current(mut self) -> T {
        self.snapshots.swap_remove(self.cursor)
    }
}

impl<T: PartialEq> History<T> {
    /// Records `snapshot` as the new current state.
    ///
    /// If it equals the current snapshot nothing changes. Otherwise every
    /// snapshot after the cursor is dropped, `snapshot` is appended, and the
    /// cursor moves to it. Returns true if the history grew.
    pub fn commit(&mut self, snapshot: T) -> bool {
        if *self.current() == snapshot {
            return false;
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
        true
    }
}

impl<T: Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
