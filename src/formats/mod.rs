//! Example formatters.
//!
//! Plain formatters map raw text to formatted text and know nothing about
//! cursors. The engines in [`crate::maintain`] treat them as opaque
//! functions. [`meta`] holds cursor-aware reimplementations of some of them.
//!
//! # Formats
//!
//! - `commatize`: group digits by three with commas
//! - `trimify`: drop leading whitespace, collapse whitespace runs to one space
//! - `trim`: strip both ends, collapse whitespace runs to one space
//! - `creditCard`: up to 16 digits in groups of four
//! - `phone`: up to ten digits as `ddd-ddd-dddd`
//! - `dollars`: `$` and comma-grouped whole part, free fraction

pub mod meta;

use crate::error::{CursorError, CursorResult};

/// A plain, cursor-agnostic formatter.
pub type PlainFormat = fn(&str) -> String;

/// Registered plain formatters, by configuration name.
pub const PLAIN_FORMATS: &[(&str, PlainFormat)] = &[
    ("commatize", commatize),
    ("trimify", trimify),
    ("trim", trim),
    ("creditCard", credit_card),
    ("phone", phone),
    ("dollars", dollars),
];

/// Look up a plain formatter by name.
pub fn lookup(name: &str) -> CursorResult<PlainFormat> {
    PLAIN_FORMATS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, format)| format)
        .ok_or_else(|| CursorError::UnknownFormat {
            name: name.to_owned(),
        })
}

/// Join `chars` with `sep` before every group of `size` counted from the right.
fn group_from_right(chars: &[char], size: usize, sep: char) -> String {
    let mut out = String::with_capacity(chars.len() + chars.len() / size);
    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % size == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Remove all commas, then separate groups of three with commas.
///
/// `"1,45,,00"` becomes `"14,500"`.
pub fn commatize(s: &str) -> String {
    let chars: Vec<char> = s.chars().filter(|&c| c != ',').collect();
    group_from_right(&chars, 3, ',')
}

/// Remove leading whitespace and reduce each whitespace run to one space.
///
/// A single trailing space survives: `"  Four \t score  "` becomes
/// `"Four score "`.
pub fn trimify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = true;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out
}

/// Strip whitespace from both ends and reduce internal runs to one space.
pub fn trim(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep at most 16 digits and put spaces between groups of four.
pub fn credit_card(s: &str) -> String {
    let digits: Vec<char> = s.chars().filter(char::is_ascii_digit).take(16).collect();
    digits
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ten-digit phone number with hyphens, filled in as digits arrive.
pub fn phone(s: &str) -> String {
    let digits: String = s.chars().filter(char::is_ascii_digit).take(10).collect();
    let mut out = String::with_capacity(12);
    for (i, ch) in digits.chars().enumerate() {
        if i == 3 || i == 6 {
            out.push('-');
        }
        out.push(ch);
    }
    out
}

/// Dollar amount with comma-grouped whole part and unlimited cent precision.
///
/// Only digits and the first decimal point are kept. Leading zeros
/// collapse away unless the whole part is zero.
pub fn dollars(s: &str) -> String {
    let kept: String = s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

    let zeros = kept.chars().take_while(|&c| c == '0').count();
    let mut rest = &kept[zeros.saturating_sub(1)..];
    if rest.len() >= 2 && rest.starts_with('0') && !rest[1..].starts_with('.') {
        rest = &rest[1..];
    }

    let decimal_pos = rest.find('.');
    let digits: Vec<char> = rest.chars().filter(|&c| c != '.').collect();
    let (whole, fraction) = digits.split_at(decimal_pos.unwrap_or(digits.len()));

    let mut out = String::from("$");
    out.push_str(&group_from_right(whole, 3, ','));
    if decimal_pos.is_some() {
        out.push('.');
        out.extend(fraction);
    }
    out
}
