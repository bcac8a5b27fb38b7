//! End-to-end cursor maintenance tests.
//!
//! Exercises the public API the way a host would: build a formatter, feed
//! it raw text and a cursor, and check the formatted text and new cursor.

use cursor_maintainer::formats::{self, meta};
use cursor_maintainer::maintain::{
    Augmented, CostFunction, CursorFormatter, CursorMaintainer, FrequencyRatio, LayerMaintainer, Maintained,
    RetrospectiveMaintainer, SplitEditDistance, Tester, TextWithCursor,
};

fn digit_layer() -> LayerMaintainer {
    LayerMaintainer::new(vec![Tester::Digit], false)
}

// ---------------------------------------------------------------------------
// Literal scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_layer_commatize_scenarios() {
    let formatter = Augmented::new(formats::commatize, digit_layer());
    assert_eq!(formatter.format_with_cursor("2500", 1), Maintained::new("2,500".to_owned(), 1));
    assert_eq!(formatter.format_with_cursor("12500", 3), Maintained::new("12,500".to_owned(), 4));
}

#[test]
fn test_meta_commatize_scenario() {
    assert_eq!(meta::commatize("1,,8,,,", 3), Maintained::new("18".to_owned(), 1));
}

#[test]
fn test_layer_whitespace_collapse_scenario() {
    let formatter = Augmented::new(formats::trim, LayerMaintainer::new(vec![Tester::NonSpace], true));
    assert_eq!(
        formatter.format_with_cursor("  whirled    peas  now  ", 10),
        Maintained::new("whirled peas now".to_owned(), 8)
    );
}

#[test]
fn test_layer_credit_card_scenario() {
    let formatter = Augmented::new(formats::credit_card, digit_layer());
    assert_eq!(formatter.format_with_cursor("  19203 45  ", 7), Maintained::new("1920 345".to_owned(), 6));
}

#[test]
fn test_layer_phone() {
    let formatter = Augmented::new(formats::phone, digit_layer());
    // Typing the fourth digit: cursor lands after it, past the new hyphen.
    assert_eq!(formatter.format_with_cursor("7165", 4), Maintained::new("716-5".to_owned(), 5));
}

#[test]
fn test_retrospective_dollars() {
    let formatter = Augmented::new(formats::dollars, RetrospectiveMaintainer::new(FrequencyRatio));
    let result = formatter.format_with_cursor("29031.925", 2);
    assert_eq!(result.text, "$29,031.925");
    assert_eq!(result.cursor, 3);
    assert_eq!(result.scores.len(), result.text.chars().count() + 1);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

const SAMPLES: &[&str] = &[
    "",
    " ",
    "1",
    "12500",
    "1,,8,,,",
    "  whirled    peas  now  ",
    "  19203 45  ",
    "(716) 555-0123",
    "$1,0.5.0",
    "naïve  café ",
];

type Plain = fn(&str) -> String;

const PLAIN: &[Plain] = &[
    formats::commatize,
    formats::trimify,
    formats::trim,
    formats::credit_card,
    formats::phone,
    formats::dollars,
];

fn maintainers() -> Vec<Box<dyn CursorMaintainer>> {
    vec![
        Box::new(digit_layer()),
        Box::new(LayerMaintainer::new(vec![Tester::NonSpace, Tester::Any], true)),
        Box::new(LayerMaintainer::new(Vec::new(), true)),
        Box::new(RetrospectiveMaintainer::new(SplitEditDistance)),
        Box::new(RetrospectiveMaintainer::new(FrequencyRatio)),
    ]
}

#[test]
fn test_every_maintainer_stays_in_range() {
    for maintainer in maintainers() {
        for &raw in SAMPLES {
            for format in PLAIN {
                let formatted = format(raw);
                let len = formatted.chars().count();
                for cursor in 0..=raw.chars().count() {
                    let result = maintainer.maintain(raw, cursor, &formatted);
                    assert!(result.cursor <= len, "{raw:?} @ {cursor} -> {formatted:?}");
                }
            }
        }
    }
}

#[test]
fn test_layer_identity_is_exact() {
    let maintainer = LayerMaintainer::new(vec![Tester::Any], false);
    for &raw in SAMPLES {
        for cursor in 0..=raw.chars().count() {
            assert_eq!(maintainer.maintain(raw, cursor, raw).cursor, cursor);
        }
    }
}

fn assert_first_minimum<C: CostFunction>(maintainer: &RetrospectiveMaintainer<C>) {
    for &raw in SAMPLES {
        let formatted = formats::commatize(raw);
        for cursor in 0..=raw.chars().count() {
            let result = maintainer.maintain(raw, cursor, &formatted);
            let min = result.scores.iter().copied().fold(f64::INFINITY, f64::min);
            assert!(result.scores[..result.cursor].iter().all(|&s| s > min));
            assert!((result.scores[result.cursor] - min).abs() < f64::EPSILON);
        }
    }
}

#[test]
fn test_retrospective_picks_first_minimum() {
    assert_first_minimum(&RetrospectiveMaintainer::new(SplitEditDistance));
    assert_first_minimum(&RetrospectiveMaintainer::new(FrequencyRatio));
}

#[test]
fn test_noop_formats_return_input() {
    let formatter = Augmented::new(formats::commatize, RetrospectiveMaintainer::new(SplitEditDistance));
    for cursor in 0..=9 {
        let result = formatter.format_with_cursor("1,234,567", cursor);
        assert_eq!(result, Maintained::new("1,234,567".to_owned(), cursor));
    }
}

#[test]
fn test_text_with_cursor_round_trip() {
    for cursor in 0..=5 {
        for begin in 0..=5 {
            let mut t = TextWithCursor::new("hello", cursor);
            t.insert(begin, ", world");
            t.delete(begin, 7);
            assert_eq!((t.text(), t.cursor()), ("hello".to_owned(), cursor));
        }
    }
}

#[test]
fn test_meta_matches_plain_on_samples() {
    for &raw in SAMPLES {
        assert_eq!(meta::commatize(raw, 0).text, formats::commatize(raw));
        assert_eq!(meta::trimify(raw, 0).text, formats::trimify(raw));
        assert_eq!(meta::credit_card(raw, 0).text, formats::credit_card(raw));
    }
}
