//! # Edits
//!
//! Reversible, single-character changes to a [`Document`].
//!
//! ## Edit Semantics
//!
//! ### Insert
//! - Captures the cursor at construction; applying always targets that
//!   position, not wherever the cursor is later
//! - A `'\n'` splits the line at the captured column and moves the tail into
//!   a new line directly below
//! - Undo removes the character, or joins the split line back together
//!
//! ### Delete
//! - Removes the character immediately before the cursor
//! - At column 0 that character is the line break above: the row is joined
//!   onto the end of the previous row, and the previous row's length at that
//!   moment (the merge column) is recorded so undo can re-split it exactly
//! - At (0, 0) there is nothing to delete and no edit is built
//!
//! Construction never touches the document. Lines moved between rows by a
//! split or merge are relocated by value, so no two rows ever share storage.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::edit_op::EditOp;
use crate::{Document, EditError};

/// A recorded, reversible edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Edit {
    Insert(Insert),
    Delete(Delete),
}

impl Edit {
    /// Build an insert of `ch` at the current cursor
    pub fn insert(doc: &Document, ch: char) -> Self {
        let cursor = doc.cursor();
        Edit::Insert(Insert {
            ch,
            row: cursor.row,
            col: cursor.col,
        })
    }

    /// Build a delete of the character before the cursor, or `None` when the
    /// cursor is at the very start of the document.
    pub fn delete(doc: &Document) -> Option<Self> {
        let cursor = doc.cursor();

        let removed = if cursor.col > 0 {
            Removed::Char {
                ch: doc.line(cursor.row)?.get(cursor.col - 1)?,
            }
        } else if cursor.row > 0 {
            Removed::LineBreak {
                merge_col: doc.line(cursor.row - 1)?.len(),
            }
        } else {
            return None;
        };

        Some(Edit::Delete(Delete {
            removed,
            row: cursor.row,
            col: cursor.col,
        }))
    }

    /// Perform the edit at its captured position and move the cursor past it.
    /// A document that no longer matches is rejected untouched.
    pub fn apply(&self, doc: &mut Document) -> Result<(), EditError> {
        match self {
            Edit::Insert(op) => op.apply(doc)?,
            Edit::Delete(op) => op.apply(doc)?,
        }
        trace!(edit = self.name(), row = self.row(), col = self.col(), "Applied edit");
        Ok(())
    }

    /// Reverse a previous [`Edit::apply`], restoring content and cursor.
    /// A document that no longer matches is rejected untouched.
    pub fn undo(&self, doc: &mut Document) -> Result<(), EditError> {
        match self {
            Edit::Insert(op) => op.undo(doc)?,
            Edit::Delete(op) => op.undo(doc)?,
        }
        trace!(edit = self.name(), row = self.row(), col = self.col(), "Undid edit");
        Ok(())
    }

    /// `"insert"` or `"delete"`, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Edit::Insert(op) => op.name(),
            Edit::Delete(op) => op.name(),
        }
    }

    /// Row captured at construction
    pub fn row(&self) -> usize {
        match self {
            Edit::Insert(insert) => insert.row,
            Edit::Delete(delete) => delete.row,
        }
    }

    /// Column captured at construction
    pub fn col(&self) -> usize {
        match self {
            Edit::Insert(insert) => insert.col,
            Edit::Delete(delete) => delete.col,
        }
    }
}

/// Insert one character at a fixed position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insert {
    ch: char,
    row: usize,
    col: usize,
}

impl Insert {
    /// The inserted character
    pub fn ch(&self) -> char {
        self.ch
    }

    /// True if this insert splits a line
    pub fn is_line_break(&self) -> bool {
        self.ch == '\n'
    }
}

impl EditOp for Insert {
    fn apply(&self, doc: &mut Document) -> Result<(), EditError> {
        let len = doc.checked_line(self.row)?.len();
        if self.col > len {
            return Err(EditError::ColumnOutOfRange {
                row: self.row,
                col: self.col,
                len,
            });
        }

        if self.is_line_break() {
            let tail = doc.line_mut(self.row).split_off(self.col);
            doc.insert_line(self.row + 1, tail);
            doc.set_cursor(self.row + 1, 0);
        } else {
            doc.line_mut(self.row).insert(self.col, self.ch);
            doc.set_cursor(self.row, self.col + 1);
        }

        Ok(())
    }

    fn undo(&self, doc: &mut Document) -> Result<(), EditError> {
        let line = doc.checked_line(self.row)?;

        if self.is_line_break() {
            // The split left exactly `col` characters behind.
            if line.len() != self.col {
                return Err(EditError::ColumnOutOfRange {
                    row: self.row,
                    col: self.col,
                    len: line.len(),
                });
            }
            if self.row + 1 >= doc.line_count() {
                return Err(EditError::NothingToJoin { row: self.row });
            }

            let below = doc.remove_line(self.row + 1);
            doc.line_mut(self.row).append(below);
        } else {
            let found = line.get(self.col);
            if found != Some(self.ch) {
                return Err(EditError::CharMismatch {
                    row: self.row,
                    col: self.col,
                    expected: self.ch,
                    found,
                });
            }

            doc.line_mut(self.row).remove(self.col);
        }

        doc.set_cursor(self.row, self.col);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "insert"
    }
}

/// What a [`Delete`] took out of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Removed {
    /// An ordinary character from within a line
    Char { ch: char },

    /// The break between `row - 1` and `row`; `merge_col` is the length the
    /// upper line had before the join.
    LineBreak { merge_col: usize },
}

/// Delete the character before a fixed cursor position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delete {
    removed: Removed,
    row: usize,
    col: usize,
}

impl Delete {
    /// The removed character; `'\n'` for a line break
    pub fn ch(&self) -> char {
        match self.removed {
            Removed::Char { ch } => ch,
            Removed::LineBreak { .. } => '\n',
        }
    }

    /// What the delete takes out
    pub fn removed(&self) -> Removed {
        self.removed
    }

    /// Join point, for line-break deletes only
    pub fn merge_col(&self) -> Option<usize> {
        match self.removed {
            Removed::Char { .. } => None,
            Removed::LineBreak { merge_col } => Some(merge_col),
        }
    }
}

impl EditOp for Delete {
    fn apply(&self, doc: &mut Document) -> Result<(), EditError> {
        match self.removed {
            Removed::Char { ch } => {
                let line = doc.checked_line(self.row)?;
                let target = self.col.checked_sub(1).ok_or(EditError::ColumnOutOfRange {
                    row: self.row,
                    col: self.col,
                    len: line.len(),
                })?;
                let found = line.get(target);
                if found != Some(ch) {
                    return Err(EditError::CharMismatch {
                        row: self.row,
                        col: target,
                        expected: ch,
                        found,
                    });
                }

                doc.line_mut(self.row).remove(target);
                doc.set_cursor(self.row, target);
            }
            Removed::LineBreak { merge_col } => {
                let above = self
                    .row
                    .checked_sub(1)
                    .ok_or(EditError::NothingToJoin { row: self.row })?;
                doc.checked_line(self.row)?;
                let len = doc.checked_line(above)?.len();
                if len != merge_col {
                    return Err(EditError::ColumnOutOfRange {
                        row: above,
                        col: merge_col,
                        len,
                    });
                }

                let joined = doc.remove_line(self.row);
                doc.line_mut(above).append(joined);
                doc.set_cursor(above, merge_col);
            }
        }

        Ok(())
    }

    fn undo(&self, doc: &mut Document) -> Result<(), EditError> {
        match self.removed {
            Removed::Char { ch } => {
                let len = doc.checked_line(self.row)?.len();
                let target = match self.col.checked_sub(1) {
                    Some(target) if target <= len => target,
                    _ => {
                        return Err(EditError::ColumnOutOfRange {
                            row: self.row,
                            col: self.col,
                            len,
                        })
                    }
                };

                doc.line_mut(self.row).insert(target, ch);
            }
            Removed::LineBreak { merge_col } => {
                let above = self
                    .row
                    .checked_sub(1)
                    .ok_or(EditError::NothingToJoin { row: self.row })?;
                let len = doc.checked_line(above)?.len();
                if merge_col > len {
                    return Err(EditError::ColumnOutOfRange {
                        row: above,
                        col: merge_col,
                        len,
                    });
                }

                let tail = doc.line_mut(above).split_off(merge_col);
                doc.insert_line(self.row, tail);
            }
        }

        doc.set_cursor(self.row, self.col);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "delete"
    }
}
