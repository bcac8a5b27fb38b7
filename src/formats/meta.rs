//! Meta formatters: plain formats rewritten as [`TextWithCursor`] edits.
//!
//! Each function performs one scan with the smallest edits that reach the
//! plain formatter's output, so the cursor is carried along by the edit
//! rules. The output text must equal the plain formatter's output for every
//! input; the tests below check that.

use crate::error::{CursorError, CursorResult};
use crate::maintain::{Maintained, TextWithCursor};

/// A cursor-aware reimplementation of a plain format.
pub type MetaFormat = fn(&str, usize) -> Maintained;

/// Registered meta formatters, by configuration name.
pub const META_FORMATS: &[(&str, MetaFormat)] = &[
    ("commatize", commatize),
    ("trimify", trimify),
    ("creditCard", credit_card),
];

/// Look up the meta formatter for a plain format name.
pub fn lookup(name: &str) -> CursorResult<MetaFormat> {
    META_FORMATS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, format)| format)
        .ok_or_else(|| CursorError::NoImplementation {
            approach: "meta".to_owned(),
            format: name.to_owned(),
        })
}

/// Scan right to left, deleting commas and counting other characters.
/// A character arriving after three have been counted gets a comma
/// inserted to its right.
pub fn commatize(raw: &str, cursor: usize) -> Maintained {
    let mut t = TextWithCursor::new(raw, cursor);
    let mut count = 0;
    for pos in (0..t.length()).rev() {
        if t.read_char(pos) == Some(',') {
            t.delete_char(pos);
        } else if count == 3 {
            t.insert(pos + 1, ",");
            count = 1;
        } else {
            count += 1;
        }
    }
    t.into_maintained()
}

/// Scan right to left, deleting every whitespace character except the
/// leftmost one of each run, which becomes a space. Whitespace left at the
/// start is deleted last.
pub fn trimify(raw: &str, cursor: usize) -> Maintained {
    let mut t = TextWithCursor::new(raw, cursor);
    let mut in_run = false;
    for pos in (0..t.length()).rev() {
        let is_space = t.read_char(pos).is_some_and(char::is_whitespace);
        if !is_space {
            if in_run {
                normalize_space(&mut t, pos + 1);
            }
            in_run = false;
        } else if in_run {
            // Whitespace sits to the right; drop that one.
            t.delete_char(pos + 1);
        } else {
            in_run = true;
        }
    }
    if t.read_char(0).is_some_and(char::is_whitespace) {
        t.delete_char(0);
    }
    t.into_maintained()
}

/// Replace the whitespace at `pos` with `' '`. Inserting first keeps a
/// cursor just after it in place.
fn normalize_space(t: &mut TextWithCursor, pos: usize) {
    if t.read_char(pos) != Some(' ') {
        t.insert(pos, " ");
        t.delete_char(pos + 1);
    }
}

/// Delete non-digits, trim to 16 digits from the end, then insert a space
/// in front of each later group of four.
pub fn credit_card(raw: &str, cursor: usize) -> Maintained {
    let mut t = TextWithCursor::new(raw, cursor);
    for pos in (0..t.length()).rev() {
        if !t.read_char(pos).is_some_and(|c| c.is_ascii_digit()) {
            t.delete_char(pos);
        }
    }
    while t.length() > 16 {
        t.delete_char(t.length() - 1);
    }
    for pos in (4..t.length()).step_by(4).rev() {
        t.insert(pos, " ");
    }
    t.into_maintained()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats;

    /// Inputs built from a small alphabet, every length up to `max_len`.
    fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
        let mut out = vec![String::new()];
        let mut frontier = vec![String::new()];
        for _ in 0..max_len {
            let mut next = Vec::new();
            for s in &frontier {
                for &c in alphabet {
                    let mut t = s.clone();
                    t.push(c);
                    next.push(t);
                }
            }
            out.extend(next.iter().cloned());
            frontier = next;
        }
        out
    }

    #[test]
    fn test_commatize_cases() {
        assert_eq!(commatize("1,,8,,,", 3), Maintained::new("18".to_owned(), 1));
        assert_eq!(commatize("12500", 3), Maintained::new("12,500".to_owned(), 4));
        assert_eq!(commatize("2500", 1), Maintained::new("2,500".to_owned(), 1));
        assert_eq!(commatize(",900", 1), Maintained::new("900".to_owned(), 0));
        assert_eq!(commatize("", 0), Maintained::new(String::new(), 0));
    }

    #[test]
    fn test_trimify_cases() {
        assert_eq!(trimify("  hello  ", 8), Maintained::new("hello ".to_owned(), 6));
        assert_eq!(trimify("  hello  ", 1), Maintained::new("hello ".to_owned(), 0));
        assert_eq!(trimify("Hello,  friends.", 8), Maintained::new("Hello, friends.".to_owned(), 7));
        assert_eq!(trimify("     ", 3), Maintained::new(String::new(), 0));
        assert_eq!(trimify("the  ", 5), Maintained::new("the ".to_owned(), 4));
    }

    #[test]
    fn test_trimify_other_whitespace() {
        assert_eq!(trimify("\tx", 1), Maintained::new("x".to_owned(), 0));
        assert_eq!(trimify("a\t\tb", 2), Maintained::new("a b".to_owned(), 2));
        assert_eq!(trimify("a\t\tb", 3), Maintained::new("a b".to_owned(), 2));
        assert_eq!(trimify("a\nb", 2), Maintained::new("a b".to_owned(), 2));
        assert_eq!(trimify("a\nb", 1), Maintained::new("a b".to_owned(), 1));
        assert_eq!(trimify("x\t", 2), Maintained::new("x ".to_owned(), 2));
    }

    #[test]
    fn test_credit_card_cases() {
        let result = credit_card(" 345  2345234 ", 0);
        assert_eq!(result.text, "3452 3452 34");
        assert_eq!(result.cursor, 0);

        let result = credit_card("  19203 45  ", 7);
        assert_eq!(result, Maintained::new("1920 345".to_owned(), 6));
    }

    #[test]
    fn test_commatize_matches_plain() {
        for raw in all_strings(&['1', '2', ','], 8) {
            assert_eq!(commatize(&raw, 0).text, formats::commatize(&raw), "{raw:?}");
        }
    }

    #[test]
    fn test_trimify_matches_plain() {
        for raw in all_strings(&['a', ' ', '\t'], 8) {
            assert_eq!(trimify(&raw, 0).text, formats::trimify(&raw), "{raw:?}");
        }
    }

    #[test]
    fn test_credit_card_matches_plain() {
        for raw in all_strings(&['7', ' ', '-'], 7) {
            assert_eq!(credit_card(&raw, 0).text, formats::credit_card(&raw), "{raw:?}");
        }
        for exact in ["1234", "12345678", "1234567890123456"] {
            assert_eq!(credit_card(exact, 0).text, formats::credit_card(exact));
        }
        let long = "1234 5678 9012 3456 7890 1234";
        assert_eq!(credit_card(long, 5).text, formats::credit_card(long));
    }

    #[test]
    fn test_cursor_stays_in_range() {
        for raw in all_strings(&['1', ',', ' ', '\t'], 5) {
            let len = raw.chars().count();
            for cursor in 0..=len {
                for format in [commatize as MetaFormat, trimify, credit_card] {
                    let result = format(&raw, cursor);
                    assert!(result.cursor <= result.text.chars().count(), "{raw:?} @ {cursor}");
                }
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert!(lookup("trimify").is_ok());
        assert!(matches!(
            lookup("phone"),
            Err(CursorError::NoImplementation { .. })
        ));
    }
}
