//! # Document
//!
//! The whole buffer: an ordered sequence of [`Line`]s plus a cursor.
//!
//! A document always holds at least one line; an empty source loads as a
//! single empty line. The cursor is always a valid insertion point:
//! `row < line_count()` and `col <= line(row).len()`.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit (through History) → Save
//!   ↓           ↓                   ↓
//! File    Insert / Delete         File
//! ```
//!
//! Content is only ever changed by [`Edit`](crate::Edit)s. Cursor motion is
//! the one mutation the document performs on its own.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{EditError, EditorError, Line};

/// Cursor position: row index and column (in chars) within that row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction for [`Document::move_cursor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorDir {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
    cursor: Cursor,
}

impl Document {
    /// A document holding one empty line
    pub fn new() -> Self {
        Self::from_lines(Vec::new())
    }

    /// Build from lines; an empty vector yields one empty line
    pub(crate) fn from_lines(mut lines: Vec<Line>) -> Self {
        if lines.is_empty() {
            lines.push(Line::new());
        }

        Self {
            lines,
            cursor: Cursor::default(),
        }
    }

    /// Split `text` the same way [`Document::from_reader`] would.
    pub fn from_text(text: &str) -> Self {
        let body = text.strip_suffix('\n').unwrap_or(text);
        Self::from_lines(body.split('\n').map(Line::from_segment).collect())
    }

    /// Read lines until EOF. Only `\n` terminates a line; it is not stored.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, EditorError> {
        let mut lines = Vec::new();
        let mut buf = String::new();

        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                break;
            }
            if buf.ends_with('\n') {
                buf.pop();
            }
            lines.push(Line::from_segment(&buf));
        }

        Ok(Self::from_lines(lines))
    }

    /// Read the file at `path`, one line per `\n`-terminated row
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, EditorError> {
        let file = File::open(path)?;
        let doc = Self::from_reader(BufReader::new(file))?;
        debug!(lines = doc.line_count(), "Loaded document");
        Ok(doc)
    }

    /// Write every line followed by `\n`
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }

    /// Write the document to `path`, replacing any existing file.
    /// The document itself is not changed.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn save(&self, path: &Path) -> Result<(), EditorError> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        debug!(lines = self.line_count(), "Saved document");
        Ok(())
    }

    /// Exactly the bytes [`Document::save`] would write
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(&line.to_string());
            text.push('\n');
        }
        text
    }

    /// Number of lines; always at least 1
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The line at `row`, if it exists
    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    /// All lines, top to bottom
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Current cursor position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Move the cursor one step. Returns `false` (and leaves the cursor
    /// alone) when blocked at the edge of the buffer.
    pub fn move_cursor(&mut self, dir: CursorDir) -> bool {
        let Cursor { row, col } = self.cursor;

        match dir {
            CursorDir::Left => {
                if col == 0 {
                    return false;
                }
                self.cursor.col -= 1;
            }
            CursorDir::Right => {
                if col == self.lines[row].len() {
                    return false;
                }
                self.cursor.col += 1;
            }
            CursorDir::Up => {
                if row == 0 {
                    return false;
                }
                self.cursor.row -= 1;
                self.cursor.col = col.min(self.lines[row - 1].len());
            }
            CursorDir::Down => {
                if row + 1 == self.lines.len() {
                    return false;
                }
                self.cursor.row += 1;
                self.cursor.col = col.min(self.lines[row + 1].len());
            }
        }

        true
    }

    pub(crate) fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = Cursor { row, col };
    }

    /// The line at `row`, or the error an edit should report for it
    pub(crate) fn checked_line(&self, row: usize) -> Result<&Line, EditError> {
        self.lines.get(row).ok_or(EditError::RowOutOfRange {
            row,
            line_count: self.lines.len(),
        })
    }

    /// Callers validate `row` first.
    pub(crate) fn line_mut(&mut self, row: usize) -> &mut Line {
        &mut self.lines[row]
    }

    pub(crate) fn insert_line(&mut self, at: usize, line: Line) {
        self.lines.insert(at, line);
    }

    /// Remove and hand back the line at `at`. Never called for row 0, so the
    /// document keeps at least one line.
    pub(crate) fn remove_line(&mut self, at: usize) -> Line {
        debug_assert!(at > 0 && at < self.lines.len());
        self.lines.remove(at)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
