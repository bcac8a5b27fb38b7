//! Text paired with a cursor, edited through cursor-aware primitives.
//!
//! A meta reimplementation rewrites a formatter as a sequence of `read`,
//! `insert`, and `delete` calls on a [`TextWithCursor`]. Each primitive moves
//! the cursor by a fixed rule, so the final cursor follows from the edits
//! instead of being inferred afterward.
//!
//! Prefer many small edits near the cursor over a few large ones. Deleting a
//! span that straddles the cursor collapses every position inside it onto
//! the span's start, which makes the resulting cursor accidental.

use super::Maintained;

/// A character buffer with a cursor gap index.
///
/// Invariant: `0 <= cursor <= length()` before and after every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextWithCursor {
    chars: Vec<char>,
    cursor: usize,
}

impl TextWithCursor {
    /// Create a buffer. A cursor past the end is clamped to the end.
    pub fn new(text: &str, cursor: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = cursor.min(chars.len());
        Self { chars, cursor }
    }

    /// Character count.
    pub fn length(&self) -> usize {
        self.chars.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Read `len` characters starting at `begin`, clipped to the end of the text.
    pub fn read(&self, begin: usize, len: usize) -> String {
        let start = begin.min(self.chars.len());
        let end = begin.saturating_add(len).min(self.chars.len());
        self.chars[start..end].iter().collect()
    }

    /// Read the single character at `begin`, if any.
    pub fn read_char(&self, begin: usize) -> Option<char> {
        self.chars.get(begin).copied()
    }

    /// Splice `subtext` in at `begin`.
    ///
    /// The cursor moves right by the inserted length only if it is strictly
    /// right of `begin`. Text inserted exactly at the cursor lands after it.
    pub fn insert(&mut self, begin: usize, subtext: &str) {
        let begin = begin.min(self.chars.len());
        let inserted: Vec<char> = subtext.chars().collect();
        let count = inserted.len();
        self.chars.splice(begin..begin, inserted);
        if self.cursor > begin {
            self.cursor += count;
        }
    }

    /// Remove `len` characters starting at `begin`.
    ///
    /// If the cursor is strictly right of `begin`, it moves left by
    /// `min(cursor - begin, len)`.
    pub fn delete(&mut self, begin: usize, len: usize) {
        let start = begin.min(self.chars.len());
        let end = begin.saturating_add(len).min(self.chars.len());
        if start == end {
            return;
        }
        self.chars.drain(start..end);
        if self.cursor > start {
            self.cursor -= (self.cursor - start).min(end - start);
        }
    }

    /// Remove the single character at `begin`.
    pub fn delete_char(&mut self, begin: usize) {
        self.delete(begin, 1);
    }

    /// Finish editing and hand back the text and cursor.
    pub fn into_maintained(self) -> Maintained {
        Maintained::new(self.chars.into_iter().collect(), self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read() {
        let t = TextWithCursor::new("hello", 4);
        assert_eq!(t.read(0, 4), "hell");
        assert_eq!(t.read(1, 4), "ello");
        assert_eq!(t.read(0, t.length()), "hello");
        assert_eq!(t.read(3, 10), "lo");
        assert_eq!(t.read(2, 0), "");
        assert_eq!(t.read_char(1), Some('e'));
        assert_eq!(t.read_char(5), None);
    }

    #[test]
    fn test_insert_at_cursor_does_not_move_it() {
        let mut t = TextWithCursor::new("hello", 5);
        t.insert(5, " world");
        assert_eq!(t.text(), "hello world");
        assert_eq!(t.cursor(), 5);
    }

    #[test]
    fn test_insert_left_of_cursor_shifts_it() {
        let mut t = TextWithCursor::new("hello", 4);
        t.insert(0, ">> ");
        assert_eq!(t.text(), ">> hello");
        assert_eq!(t.cursor(), 7);
    }

    #[test]
    fn test_insert_right_of_cursor_keeps_it() {
        let mut t = TextWithCursor::new("hello world", 4);
        t.insert(5, ",");
        t.insert(12, ".");
        assert_eq!(t.text(), "hello, world.");
        assert_eq!(t.cursor(), 4);
    }

    #[test]
    fn test_delete_left_of_cursor() {
        let mut t = TextWithCursor::new("hello", 4);
        t.delete_char(0);
        t.insert(0, "H");
        assert_eq!(t.text(), "Hello");
        assert_eq!(t.cursor(), 4);
    }

    #[test]
    fn test_delete_straddling_cursor_collapses_to_start() {
        let mut t = TextWithCursor::new("abcdef", 4);
        t.delete(1, 4);
        assert_eq!(t.text(), "af");
        assert_eq!(t.cursor(), 1);
    }

    #[test]
    fn test_delete_at_cursor_does_not_move_it() {
        let mut t = TextWithCursor::new("abcdef", 2);
        t.delete(2, 3);
        assert_eq!(t.text(), "abf");
        assert_eq!(t.cursor(), 2);
    }

    #[test]
    fn test_delete_zero_length_is_noop() {
        let mut t = TextWithCursor::new("abc", 2);
        t.delete(1, 0);
        assert_eq!(t.text(), "abc");
        assert_eq!(t.cursor(), 2);
    }

    #[test]
    fn test_new_clamps_cursor() {
        let t = TextWithCursor::new("ab", 9);
        assert_eq!(t.cursor(), 2);
    }

    #[test]
    fn test_insert_delete_round_trip() {
        let text = "a€cd";
        for cursor in 0..=4 {
            for begin in 0..=4 {
                for sub in ["", "x", "€€", "xyz"] {
                    let mut t = TextWithCursor::new(text, cursor);
                    t.insert(begin, sub);
                    t.delete(begin, sub.chars().count());
                    assert_eq!(t.text(), text, "begin={begin} sub={sub:?}");
                    assert_eq!(t.cursor(), cursor, "begin={begin} sub={sub:?}");
                }
            }
        }
    }

    #[test]
    fn test_cursor_stays_in_range() {
        let mut t = TextWithCursor::new("0123456789", 10);
        t.delete(3, 100);
        assert_eq!(t.text(), "012");
        assert_eq!(t.cursor(), 3);
        t.delete(0, 3);
        assert_eq!(t.length(), 0);
        assert_eq!(t.cursor(), 0);
    }
}
