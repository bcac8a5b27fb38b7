//! Regression-comparison harness.
//!
//! Runs each configured approach against fixed case tables and reports
//! which cases produce the expected text and cursor. The tables record the
//! cursor a user would expect; the statistical approaches are not required
//! to hit every one, so a failing case is a data point, not a bug.

pub mod ad_hoc;

use std::fmt::Write as _;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{ApproachConfig, CostKind};
use crate::error::CursorResult;
use crate::maintain::{CursorFormatter, Maintained};

/// One expectation: raw text and cursor in, formatted text and cursor out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub raw: &'static str,
    pub raw_cursor: usize,
    pub text: &'static str,
    pub cursor: usize,
}

const fn case(raw: &'static str, raw_cursor: usize, text: &'static str, cursor: usize) -> Case {
    Case {
        raw,
        raw_cursor,
        text,
        cursor,
    }
}

pub const COMMATIZE_CASES: &[Case] = &[
    case("2500", 1, "2,500", 1),
    case("12500", 3, "12,500", 4),
    case("5,4990000", 9, "54,990,000", 10),
    case("1,,8,,,", 3, "18", 1),
    case("1,0,0,000", 3, "100,000", 2),
    case("1,0,000", 2, "10,000", 1),
    case("1,,000", 2, "1,000", 1),
    case("1,00", 2, "100", 1),
    case("1234", 1, "1,234", 1),
    case("1,0234", 3, "10,234", 2),
    case("10,00", 4, "1,000", 4),
    case("900", 0, "900", 0),
    case(",900", 1, "900", 0),
    case("123,900", 0, "123,900", 0),
    case(",123,900", 0, "123,900", 0),
];

pub const TRIMIFY_CASES: &[Case] = &[
    case("  hello  ", 8, "hello ", 6),
    case("  hello  ", 1, "hello ", 0),
    case("Hello,  friends.", 7, "Hello, friends.", 7),
    case("Hello,  friends.", 8, "Hello, friends.", 7),
    case("  whirled    peas  now  ", 9, "whirled peas now ", 7),
    case("  whirled    peas  now  ", 10, "whirled peas now ", 8),
    case("  whirled    peas  now  ", 11, "whirled peas now ", 8),
    case("  whirled    peas  now  ", 12, "whirled peas now ", 8),
    case("  whirled    peas  now  ", 13, "whirled peas now ", 8),
    case("     ", 3, "", 0),
    case(" th", 3, "th", 2),
    case("the", 3, "the", 3),
    case("the ", 4, "the ", 4),
    case("the  ", 5, "the ", 4),
    case("the   ", 6, "the ", 4),
    case("the q", 5, "the q", 5),
    case("the q ", 6, "the q ", 6),
    case("the q  ", 7, "the q ", 6),
    case("the q   ", 7, "the q ", 6),
    case("the q   ", 8, "the q ", 6),
    case("the q    ", 7, "the q ", 6),
    case(" the q", 6, "the q", 5),
    case(" the q ", 7, "the q ", 6),
    case(" the q  ", 8, "the q ", 6),
    case(" the q   ", 8, "the q ", 6),
    case(" the q   ", 9, "the q ", 6),
    case(" the q    ", 8, "the q ", 6),
];

/// Case table for a format, if one exists.
pub fn cases_for(format: &str) -> Option<&'static [Case]> {
    match format {
        "commatize" => Some(COMMATIZE_CASES),
        "trimify" => Some(TRIMIFY_CASES),
        _ => None,
    }
}

/// A case whose result did not match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub case: Case,
    pub received: Maintained,
}

/// Result of running one approach on one format's table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub approach: String,
    pub format: String,
    pub passed: usize,
    pub failures: Vec<Failure>,
}

impl Outcome {
    pub fn is_passing(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run `formatter` on every case. With `ignore_cursor`, only text is compared.
pub fn run_cases(formatter: &dyn CursorFormatter, cases: &[Case], ignore_cursor: bool) -> (usize, Vec<Failure>) {
    let mut passed = 0;
    let mut failures = Vec::new();
    for &case in cases {
        let received = formatter.format_with_cursor(case.raw, case.raw_cursor);
        if received.text == case.text && (ignore_cursor || received.cursor == case.cursor) {
            passed += 1;
        } else {
            debug!(raw = case.raw, cursor = case.raw_cursor, got = received.cursor, "case failed");
            failures.push(Failure { case, received });
        }
    }
    (passed, failures)
}

/// The approaches compared by default, each with a display name.
pub fn default_approaches() -> Vec<(String, ApproachConfig)> {
    vec![
        ("adHoc".to_owned(), ApproachConfig::AdHoc),
        ("meta".to_owned(), ApproachConfig::Meta),
        (
            "splitLevenshtein".to_owned(),
            ApproachConfig::Retrospective {
                cost_function: CostKind::SplitLevenshtein,
            },
        ),
        (
            "frequencyRatios".to_owned(),
            ApproachConfig::Retrospective {
                cost_function: CostKind::FrequencyRatios,
            },
        ),
        (
            "layer".to_owned(),
            ApproachConfig::Layer {
                testers: Vec::new(),
                prefer_right: None,
            },
        ),
    ]
}

/// Run every approach on every format that has a case table.
pub fn compare(approaches: &[(String, ApproachConfig)], formats: &[&str], ignore_cursor: bool) -> CursorResult<Vec<Outcome>> {
    let mut outcomes = Vec::new();
    for (name, config) in approaches {
        for &format in formats {
            let Some(cases) = cases_for(format) else {
                continue;
            };
            let formatter = config.build(format)?;
            let (passed, failures) = run_cases(formatter.as_ref(), cases, ignore_cursor);
            info!(approach = name.as_str(), format, passed, failed = failures.len(), "compared");
            outcomes.push(Outcome {
                approach: name.clone(),
                format: format.to_owned(),
                passed,
                failures,
            });
        }
    }
    Ok(outcomes)
}

/// Quote `text`, with an arrow under the cursor position when given.
fn show_text(out: &mut String, label: &str, text: &str, cursor: Option<usize>) {
    let prefix = format!("  {label}: \"");
    let _ = writeln!(out, "{prefix}{text}\"");
    if let Some(cursor) = cursor {
        let pad = prefix.chars().count() + cursor;
        let _ = writeln!(out, "{:pad$}↖ {cursor}", "");
    }
}

/// Human-readable report of comparison outcomes.
pub fn render(outcomes: &[Outcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        let total = outcome.passed + outcome.failures.len();
        let _ = writeln!(
            out,
            "----- {} / {}: {}/{} passed",
            outcome.approach, outcome.format, outcome.passed, total
        );
        for failure in &outcome.failures {
            let case = failure.case;
            show_text(&mut out, "     raw", case.raw, Some(case.raw_cursor));
            show_text(&mut out, "expected", case.text, Some(case.cursor));
            show_text(&mut out, "received", &failure.received.text, Some(failure.received.cursor));
            out.push('\n');
        }
    }
    out
}
