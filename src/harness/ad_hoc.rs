//! Ad hoc cursor arithmetic, kept as comparison baselines.
//!
//! These hand-tuned functions know exactly one format each. They are not
//! offered as strategies; the comparison harness runs them beside the
//! general approaches.

use crate::error::{CursorError, CursorResult};
use crate::formats;
use crate::formats::meta::MetaFormat;
use crate::maintain::Maintained;

/// Registered ad hoc formatters, by format name.
pub const AD_HOC_FORMATS: &[(&str, MetaFormat)] = &[("commatize", commatize), ("trimify", trimify)];

pub fn lookup(name: &str) -> CursorResult<MetaFormat> {
    AD_HOC_FORMATS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, format)| format)
        .ok_or_else(|| CursorError::NoImplementation {
            approach: "adHoc".to_owned(),
            format: name.to_owned(),
        })
}

/// Count non-commas left of the cursor, then count off as many in the
/// formatted text.
pub fn commatize(raw: &str, cursor: usize) -> Maintained {
    let mut left_digits = raw.chars().take(cursor).filter(|&c| c != ',').count();
    let text = formats::commatize(raw);
    if left_digits == 0 {
        return Maintained::new(text, 0);
    }
    let mut new_cursor = 0;
    for (pos, ch) in text.chars().enumerate() {
        new_cursor = pos + 1;
        if ch != ',' {
            left_digits -= 1;
            if left_digits == 0 {
                break;
            }
        }
    }
    Maintained::new(text, new_cursor)
}

/// Format the left part with a sentinel appended; its length minus the
/// sentinel is the cursor, unless the whole text came out shorter.
pub fn trimify(raw: &str, cursor: usize) -> Maintained {
    let mut left: String = raw.chars().take(cursor).collect();
    left.push('|');
    let left_len = formats::trimify(&left).chars().count() - 1;
    let text = formats::trimify(raw);
    let new_cursor = left_len.min(text.chars().count());
    Maintained::new(text, new_cursor)
}
