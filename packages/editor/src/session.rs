//! # Edit Session
//!
//! One document, its history, and where it lives on disk.
//!
//! This is the surface an interactive front end drives: it turns "type this
//! character", "backspace", "undo" into edits built from the current cursor
//! and routes them through the [`History`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Cursor, CursorDir, Document, Edit, EditorError, History};

pub struct EditSession {
    /// Backing file, if any
    path: Option<PathBuf>,

    document: Document,

    history: History,

    /// Set by every content change, cleared by a save
    dirty: bool,
}

impl EditSession {
    /// Session over an in-memory document
    pub fn new(document: Document, capacity: usize) -> Self {
        Self {
            path: None,
            document,
            history: History::with_capacity(capacity),
            dirty: false,
        }
    }

    /// Load `path` into a new session
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Result<Self, EditorError> {
        let path = path.into();
        let document = Document::load(&path)?;
        Ok(Self {
            path: Some(path),
            ..Self::new(document, capacity)
        })
    }

    /// Like [`EditSession::open`], but a missing file starts an empty document
    pub fn open_or_create(path: impl Into<PathBuf>, capacity: usize) -> Result<Self, EditorError> {
        let path = path.into();
        let document = match Document::load(&path) {
            Ok(document) => document,
            Err(EditorError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "File not found, starting empty document");
                Document::new()
            }
            Err(err) => return Err(err),
        };
        Ok(Self {
            path: Some(path),
            ..Self::new(document, capacity)
        })
    }

    /// Where [`EditSession::save`] writes, if anywhere
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn cursor(&self) -> Cursor {
        self.document.cursor()
    }

    /// True if the document changed since it was opened or last saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Insert `ch` at the cursor. A `'\n'` splits the line.
    pub fn insert_char(&mut self, ch: char) -> Result<bool, EditorError> {
        let edit = Edit::insert(&self.document, ch);
        self.history.apply(edit, &mut self.document)?;
        self.dirty = true;
        Ok(true)
    }

    /// Insert each char of `text` as its own undoable edit
    pub fn insert_str(&mut self, text: &str) -> Result<usize, EditorError> {
        let mut count = 0;
        for ch in text.chars() {
            self.insert_char(ch)?;
            count += 1;
        }
        Ok(count)
    }

    /// Backspace. Returns `false` when the cursor is at the start of the
    /// document and there is nothing to delete.
    pub fn delete_before_cursor(&mut self) -> Result<bool, EditorError> {
        let Some(edit) = Edit::delete(&self.document) else {
            return Ok(false);
        };
        self.history.apply(edit, &mut self.document)?;
        self.dirty = true;
        Ok(true)
    }

    /// Move the cursor one step; `false` when blocked at an edge
    pub fn move_cursor(&mut self, dir: CursorDir) -> bool {
        self.document.move_cursor(dir)
    }

    /// Undo the latest edit. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        let undone = self.history.undo(&mut self.document)?;
        self.dirty |= undone;
        Ok(undone)
    }

    /// Redo the latest undone edit. Returns `false` if there was nothing to
    /// redo.
    pub fn redo(&mut self) -> Result<bool, EditorError> {
        let redone = self.history.redo(&mut self.document)?;
        self.dirty |= redone;
        Ok(redone)
    }

    /// Save to the session's file
    pub fn save(&mut self) -> Result<(), EditorError> {
        let path = self.path.as_deref().ok_or(EditorError::NotFileBacked)?;
        self.document.save(path)?;
        self.dirty = false;
        Ok(())
    }

    /// Save to `path` and make it the session's file
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), EditorError> {
        let path = path.into();
        self.document.save(&path)?;
        self.path = Some(path);
        self.dirty = false;
        Ok(())
    }

    /// Point later saves at `path` without writing anything now
    pub fn retarget(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        debug!(path = %path.display(), "Retargeted session");
        self.path = Some(path);
    }

    /// End the session, dropping its history and returning the document
    pub fn close(mut self) -> Document {
        self.history.clear();
        self.document
    }
}
