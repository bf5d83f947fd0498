//! # Linepad Editor
//!
//! In-memory, line-oriented text buffer with a cursor and a bounded
//! undo/redo history.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ session: front-end surface                  │
//! │  - type / backspace / move / undo / redo    │
//! │  - load and save the backing file           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ history: two bounded stacks of edits        │
//! │  - every content change goes through here   │
//! │  - new edits invalidate the redo stack      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ edits: Insert / Delete, each with an exact  │
//! │ inverse                                     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: lines + cursor                    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Everything here is synchronous and single-threaded. The caller serializes
//! edit requests; nothing in this crate blocks except file load and save.
//!
//! ## Usage
//!
//! ```rust
//! use linepad_editor::{CursorDir, Document, EditSession};
//!
//! let mut session = EditSession::new(Document::new(), 10);
//! session.insert_str("abc").unwrap();
//! session.undo().unwrap();
//! session.insert_char('\n').unwrap();
//! assert_eq!(session.document().to_text(), "ab\n\n");
//!
//! session.delete_before_cursor().unwrap();
//! assert_eq!(session.document().to_text(), "ab\n");
//! assert!(!session.move_cursor(CursorDir::Right));
//! ```

mod document;
mod edit_op;
mod edits;
mod errors;
mod history;
mod line;
mod session;

pub use document::{Cursor, CursorDir, Document};
pub use edit_op::EditOp;
pub use edits::{Delete, Edit, Insert, Removed};
pub use errors::{EditError, EditorError};
pub use history::{History, DEFAULT_HISTORY_CAPACITY};
pub use line::Line;
pub use session::EditSession;
