//! Character-class testers that define layers.
//!
//! A tester answers one question about one character. Testers are parsed
//! from a small, non-evaluating pattern language: a named class, or a
//! regular-expression character class matched against a single character.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::{CursorError, CursorResult};

/// A single-character membership test.
#[derive(Clone)]
pub enum Tester {
    /// ASCII digits `0-9`.
    Digit,
    /// Anything but an ASCII digit.
    NonDigit,
    /// Unicode whitespace.
    Space,
    /// Anything but whitespace.
    NonSpace,
    /// Alphanumerics and underscore.
    Word,
    /// Every character.
    Any,
    /// A character class, anchored to match exactly one character.
    Class { spec: String, regex: Regex },
    /// A predicate supplied at build time.
    Custom(Arc<dyn Fn(char) -> bool + Send + Sync>),
}

impl Tester {
    /// Parse a tester spec.
    ///
    /// Named classes are `digit`, `nonDigit`, `space`, `nonSpace`, `word`,
    /// and `any`. Anything else must be a regex that matches single
    /// characters, e.g. `[0-9a-f]` or `\d`.
    pub fn parse(spec: &str) -> CursorResult<Self> {
        let named = match spec {
            "digit" => Some(Self::Digit),
            "nonDigit" => Some(Self::NonDigit),
            "space" => Some(Self::Space),
            "nonSpace" => Some(Self::NonSpace),
            "word" => Some(Self::Word),
            "any" => Some(Self::Any),
            _ => None,
        };
        if let Some(tester) = named {
            return Ok(tester);
        }

        if spec.is_empty() {
            return Err(CursorError::InvalidTester {
                spec: spec.to_owned(),
                reason: "empty pattern".to_owned(),
            });
        }

        let regex = Regex::new(&format!("^(?:{spec})$")).map_err(|source| {
            CursorError::TesterRegex {
                spec: spec.to_owned(),
                source,
            }
        })?;
        Ok(Self::Class {
            spec: spec.to_owned(),
            regex,
        })
    }

    /// Wrap an arbitrary predicate.
    pub fn custom(predicate: impl Fn(char) -> bool + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(predicate))
    }

    /// Does `ch` belong to this class?
    pub fn test(&self, ch: char) -> bool {
        match self {
            Self::Digit => ch.is_ascii_digit(),
            Self::NonDigit => !ch.is_ascii_digit(),
            Self::Space => ch.is_whitespace(),
            Self::NonSpace => !ch.is_whitespace(),
            Self::Word => ch.is_alphanumeric() || ch == '_',
            Self::Any => true,
            Self::Class { regex, .. } => {
                let mut buf = [0u8; 4];
                regex.is_match(ch.encode_utf8(&mut buf))
            }
            Self::Custom(predicate) => predicate(ch),
        }
    }
}

impl fmt::Debug for Tester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit => f.write_str("Digit"),
            Self::NonDigit => f.write_str("NonDigit"),
            Self::Space => f.write_str("Space"),
            Self::NonSpace => f.write_str("NonSpace"),
            Self::Word => f.write_str("Word"),
            Self::Any => f.write_str("Any"),
            Self::Class { spec, .. } => f.debug_tuple("Class").field(spec).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_classes() {
        let digit = Tester::parse("digit").expect("digit");
        assert!(digit.test('7'));
        assert!(!digit.test(','));

        let non_space = Tester::parse("nonSpace").expect("nonSpace");
        assert!(non_space.test('x'));
        assert!(!non_space.test(' '));
        assert!(!non_space.test('\t'));

        let word = Tester::parse("word").expect("word");
        assert!(word.test('_'));
        assert!(!word.test('-'));
    }

    #[test]
    fn test_regex_class() {
        let hex = Tester::parse("[0-9a-f]").expect("hex class");
        assert!(hex.test('c'));
        assert!(!hex.test('g'));

        let digit = Tester::parse(r"\d").expect("digit escape");
        assert!(digit.test('3'));
    }

    #[test]
    fn test_regex_class_is_anchored() {
        // "a|b" must not match characters merely containing a or b.
        let tester = Tester::parse("a|b").expect("alternation");
        assert!(tester.test('a'));
        assert!(!tester.test('c'));
    }

    #[test]
    fn test_invalid_specs() {
        assert!(matches!(
            Tester::parse(""),
            Err(CursorError::InvalidTester { .. })
        ));
        assert!(matches!(
            Tester::parse("[0-9"),
            Err(CursorError::TesterRegex { .. })
        ));
    }

    #[test]
    fn test_custom() {
        let vowel = Tester::custom(|c| "aeiou".contains(c));
        assert!(vowel.test('e'));
        assert!(!vowel.test('x'));
        assert_eq!(format!("{vowel:?}"), "Custom(..)");
    }
}
