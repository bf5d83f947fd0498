use std::fmt;

/// One row of text. Never contains a line terminator.
///
/// Lines with content only come from splitting text on `'\n'`
/// ([`Document::from_text`](crate::Document::from_text),
/// [`Document::load`](crate::Document::load)) or from edits, so there is no
/// public way to build one that holds a `'\n'`:
///
/// ```compile_fail
/// use linepad_editor::{Document, Line};
///
/// let doc = Document::from_lines(vec![Line::from("a\nb")]);
/// ```
///
/// Columns are counted in `char`s, so every column in `0..=len()` is a valid
/// insertion point regardless of how many bytes the text would take as UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Line {
    chars: Vec<char>,
}

impl Line {
    /// An empty line
    pub fn new() -> Self {
        Self::default()
    }

    /// One row of already-split text. Callers split on `'\n'` first.
    pub(crate) fn from_segment(text: &str) -> Self {
        debug_assert!(!text.contains('\n'));
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Number of chars, which is also the largest valid cursor column
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True for a line with no characters
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `col`, if any
    pub fn get(&self, col: usize) -> Option<char> {
        self.chars.get(col).copied()
    }

    /// The line's characters, in order
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub(crate) fn insert(&mut self, col: usize, ch: char) {
        self.chars.insert(col, ch);
    }

    pub(crate) fn remove(&mut self, col: usize) -> char {
        self.chars.remove(col)
    }

    /// Move everything from `col` onward into a new line, truncating this one
    /// to `col` characters.
    pub(crate) fn split_off(&mut self, col: usize) -> Line {
        Line {
            chars: self.chars.split_off(col),
        }
    }

    /// Consume `other` and append its characters to the end of this line.
    pub(crate) fn append(&mut self, mut other: Line) {
        self.chars.append(&mut other.chars);
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|ch| fmt::Write::write_char(f, *ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_count_chars_not_bytes() {
        let line = Line::from_segment("héllo");
        assert_eq!(line.len(), 5);
        assert_eq!(line.get(1), Some('é'));
        assert_eq!(line.get(5), None);
    }

    #[test]
    fn test_split_off_moves_tail() {
        let mut line = Line::from_segment("abcdef");
        let tail = line.split_off(2);

        assert_eq!(line.to_string(), "ab");
        assert_eq!(tail.to_string(), "cdef");
    }

    #[test]
    fn test_split_at_ends() {
        let mut line = Line::from_segment("abc");
        assert!(line.split_off(3).is_empty());
        assert_eq!(line.len(), 3);

        let tail = line.split_off(0);
        assert!(line.is_empty());
        assert_eq!(tail.to_string(), "abc");
    }

    #[test]
    fn test_append_consumes_other() {
        let mut line = Line::from_segment("ab");
        line.append(Line::from_segment("cd"));
        assert_eq!(line.to_string(), "abcd");
    }
}
