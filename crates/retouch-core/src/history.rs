//! Linear undo/redo history of edit-state snapshots.
//!
//! The history is always a straight line: committing while the cursor is
//! not at the newest entry discards everything after the cursor before
//! appending. Index 0 is the neutral default state and is never removed.

use crate::EditState;

/// Owns the ordered history of committed [`EditState`] snapshots and a
/// cursor into it.
///
/// Invariants:
/// - `history` is never empty; `history[0]` is always the default state
/// - `cursor < history.len()` at all times
/// - undo/redo at the boundaries are no-ops, never errors
#[derive(Debug, Clone)]
pub struct ParameterStore {
    history: Vec<EditState>,
    cursor: usize,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self {
            history: vec![EditState::default()],
            cursor: 0,
        }
    }
}

impl ParameterStore {
    /// Create a store holding only the neutral default snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new snapshot, discarding any redo tail.
    ///
    /// Always succeeds: callers clamp field ranges before committing, so
    /// this is a pure append.
    pub fn commit(&mut self, state: EditState) {
        self.history.truncate(self.cursor + 1);
        self.history.push(state);
        self.cursor = self.history.len() - 1;
    }

    /// Step the cursor back one snapshot; no-op at the beginning.
    pub fn undo(&mut self) -> &EditState {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Step the cursor forward one snapshot; no-op at the end.
    pub fn redo(&mut self) -> &EditState {
        if self.cursor + 1 < self.history.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &EditState {
        &self.history[self.cursor]
    }

    /// Drop everything and return to the single default snapshot.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        // The default snapshot is always present
        self.history.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Read-only view of the snapshots from oldest to newest.
    pub fn snapshots(&self) -> &[EditState] {
        &self.history
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
