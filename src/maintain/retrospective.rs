//! Retrospective approach: score every candidate, keep the cheapest.
//!
//! The engine knows nothing about the format. It hands the before/after
//! strings to a [`CostFunction`] and picks the leftmost position with the
//! lowest cost. All scores are returned for inspection.

use tracing::debug;

use super::{CostFunction, CursorMaintainer, FrequencyRatio, Maintained};

/// Cursor maintainer driven by a cost function.
#[derive(Debug, Clone)]
pub struct RetrospectiveMaintainer<C> {
    cost: C,
}

impl<C: CostFunction> RetrospectiveMaintainer<C> {
    pub const fn new(cost: C) -> Self {
        Self { cost }
    }
}

impl Default for RetrospectiveMaintainer<FrequencyRatio> {
    fn default() -> Self {
        Self::new(FrequencyRatio)
    }
}

/// Index of the first minimum. NaN scores never win; if every score is NaN
/// the result is 0.
fn first_minimum(scores: &[f64]) -> usize {
    let mut best: Option<(usize, f64)> = None;
    for (pos, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        if best.is_none_or(|(_, min)| score < min) {
            best = Some((pos, score));
        }
    }
    best.map_or(0, |(pos, _)| pos)
}

impl<C: CostFunction> CursorMaintainer for RetrospectiveMaintainer<C> {
    fn maintain(&self, raw: &str, raw_cursor: usize, formatted: &str) -> Maintained {
        let raw: Vec<char> = raw.chars().collect();
        let fmt: Vec<char> = formatted.chars().collect();
        debug_assert!(raw_cursor <= raw.len(), "raw cursor out of range");
        let raw_cursor = raw_cursor.min(raw.len());

        let scores = self.cost.costs(&raw, raw_cursor, &fmt);
        debug_assert_eq!(scores.len(), fmt.len() + 1);
        let cursor = if scores.is_empty() {
            0
        } else {
            first_minimum(&scores).min(fmt.len())
        };
        debug!(raw_cursor, cursor, candidates = scores.len(), "retrospective cursor");

        Maintained {
            text: formatted.to_owned(),
            cursor,
            scores,
        }
    }
}
