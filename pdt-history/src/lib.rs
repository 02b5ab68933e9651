//! Linear undo/redo history for PDT Studio editors.
//!
//! A [`History`] holds a sequence of immutable snapshots and a cursor.
//! Committing after an undo discards the redo branch; committing a snapshot
//! equal to the current one does nothing.

mod history;

pub use history::History;
