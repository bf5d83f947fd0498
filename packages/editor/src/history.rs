//! # Undo/Redo History
//!
//! Tracks applied edits and enables undo/redo.
//!
//! ## Design
//!
//! - Every content change goes through [`History::apply`]
//! - Undo reverses the newest edit and moves it to the redo stack
//! - Redo reapplies the newest undone edit and moves it back
//! - A new edit discards everything on the redo stack
//! - Each stack keeps at most `capacity` edits; pushing onto a full stack
//!   drops its oldest entry first
//!
//! An edit lives on exactly one stack at a time. Undo and redo move it,
//! they never copy it or build a new one.
//!
//! ## Example
//!
//! ```rust
//! use linepad_editor::{Document, Edit, History};
//!
//! let mut doc = Document::new();
//! let mut history = History::with_capacity(10);
//!
//! let edit = Edit::insert(&doc, 'a');
//! history.apply(edit, &mut doc).unwrap();
//! assert_eq!(doc.to_text(), "a\n");
//!
//! assert!(history.undo(&mut doc).unwrap());
//! assert_eq!(doc.to_text(), "\n");
//!
//! assert!(history.redo(&mut doc).unwrap());
//! assert_eq!(doc.to_text(), "a\n");
//! ```

use std::collections::VecDeque;

use tracing::trace;

use crate::{Document, Edit, EditError};

/// Stack depth used by [`History::new`]
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Most-recent-N stack: pushing onto a full stack evicts the bottom entry
#[derive(Debug, Clone)]
struct BoundedStack<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push on top, returning the evicted bottom entry if the stack was full
    fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }
}

/// Bounded undo/redo history for one document
#[derive(Debug, Clone)]
pub struct History {
    /// Applied edits (newest last)
    undo_stack: BoundedStack<Edit>,

    /// Undone edits (newest last)
    redo_stack: BoundedStack<Edit>,
}

impl History {
    /// Create a history with [`DEFAULT_HISTORY_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a history keeping at most `capacity` edits per stack.
    /// A capacity of 0 is raised to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo_stack: BoundedStack::with_capacity(capacity),
            redo_stack: BoundedStack::with_capacity(capacity),
        }
    }

    /// Apply an edit and record it for undo.
    ///
    /// On success the redo stack is emptied. If the edit is rejected the
    /// document and both stacks are left as they were.
    pub fn apply(&mut self, edit: Edit, doc: &mut Document) -> Result<(), EditError> {
        edit.apply(doc)?;

        if let Some(evicted) = self.undo_stack.push(edit) {
            trace!(edit = evicted.name(), "Evicted oldest undo entry");
        }

        if !self.redo_stack.is_empty() {
            trace!(discarded = self.redo_stack.len(), "New edit invalidated redo stack");
            self.redo_stack.clear();
        }

        Ok(())
    }

    /// Undo the most recent edit. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self, doc: &mut Document) -> Result<bool, EditError> {
        let Some(edit) = self.undo_stack.peek() else {
            return Ok(false);
        };
        edit.undo(doc)?;

        if let Some(edit) = self.undo_stack.pop() {
            if let Some(evicted) = self.redo_stack.push(edit) {
                trace!(edit = evicted.name(), "Evicted oldest redo entry");
            }
        }

        Ok(true)
    }

    /// Redo the most recently undone edit. Returns `false` if there was
    /// nothing to redo.
    pub fn redo(&mut self, doc: &mut Document) -> Result<bool, EditError> {
        let Some(edit) = self.redo_stack.peek() else {
            return Ok(false);
        };
        edit.apply(doc)?;

        if let Some(edit) = self.redo_stack.pop() {
            if let Some(evicted) = self.undo_stack.push(edit) {
                trace!(edit = evicted.name(), "Evicted oldest undo entry");
            }
        }

        Ok(true)
    }

    /// Drop every recorded edit
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of edits that can be undone
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of edits that can be redone
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Most edits either stack keeps
    pub fn capacity(&self) -> usize {
        self.undo_stack.capacity
    }

    /// Undoable edits, oldest first
    pub fn undo_edits(&self) -> impl DoubleEndedIterator<Item = &Edit> + ExactSizeIterator {
        self.undo_stack.iter()
    }

    /// Redoable edits, oldest first
    pub fn redo_edits(&self) -> impl DoubleEndedIterator<Item = &Edit> + ExactSizeIterator {
        self.redo_stack.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
