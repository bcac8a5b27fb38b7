//! Cost functions for the retrospective engine.
//!
//! A cost function scores a candidate cursor in the formatted text against
//! the raw text and raw cursor. Lower is better.

use std::collections::{BTreeSet, HashMap};

use super::levenshtein;

/// Scores candidate cursor positions in formatted text.
pub trait CostFunction {
    /// Cost of placing the cursor at `candidate` in `formatted`.
    fn cost(&self, raw: &[char], raw_cursor: usize, formatted: &[char], candidate: usize) -> f64;

    /// Costs for every candidate in `[0, formatted.len()]`.
    ///
    /// Override when precomputation can be shared across candidates.
    fn costs(&self, raw: &[char], raw_cursor: usize, formatted: &[char]) -> Vec<f64> {
        (0..=formatted.len())
            .map(|candidate| self.cost(raw, raw_cursor, formatted, candidate))
            .collect()
    }
}

impl<F> CostFunction for F
where
    F: Fn(&[char], usize, &[char], usize) -> f64,
{
    fn cost(&self, raw: &[char], raw_cursor: usize, formatted: &[char], candidate: usize) -> f64 {
        self(raw, raw_cursor, formatted, candidate)
    }
}

/// Sum of edit distances between the left halves and the right halves.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitEditDistance;

impl CostFunction for SplitEditDistance {
    fn cost(&self, raw: &[char], raw_cursor: usize, formatted: &[char], candidate: usize) -> f64 {
        let (raw_left, raw_right) = raw.split_at(raw_cursor.min(raw.len()));
        let (fmt_left, fmt_right) = formatted.split_at(candidate.min(formatted.len()));
        let total = levenshtein::distance_chars(raw_left, fmt_left)
            + levenshtein::distance_chars(raw_right, fmt_right);
        total as f64
    }
}

/// Squared differences of per-character "fraction left of the cursor".
///
/// Only characters present in both strings take part, so every
/// denominator is positive.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyRatio;

/// Prefix counts of a fixed character set over one string.
struct LeftCounts {
    /// `counts[pos][i]`: occurrences of `chars[i]` in `s[..pos]`.
    counts: Vec<Vec<usize>>,
}

impl LeftCounts {
    fn build(s: &[char], index: &HashMap<char, usize>) -> Self {
        let mut counts = Vec::with_capacity(s.len() + 1);
        let mut row = vec![0usize; index.len()];
        counts.push(row.clone());
        for ch in s {
            if let Some(&i) = index.get(ch) {
                row[i] += 1;
            }
            counts.push(row.clone());
        }
        Self { counts }
    }

    fn at(&self, pos: usize) -> &[usize] {
        &self.counts[pos.min(self.counts.len() - 1)]
    }

    fn totals(&self) -> &[usize] {
        self.at(self.counts.len() - 1)
    }
}

/// Characters occurring in both strings, in a stable order.
fn common_chars(s: &[char], t: &[char]) -> Vec<char> {
    let in_s: BTreeSet<char> = s.iter().copied().collect();
    let in_t: BTreeSet<char> = t.iter().copied().collect();
    in_s.intersection(&in_t).copied().collect()
}

/// Fraction of each common character's occurrences left of `pos`.
fn left_fractions(counts: &LeftCounts, pos: usize) -> Vec<f64> {
    counts
        .at(pos)
        .iter()
        .zip(counts.totals())
        .map(|(&left, &total)| {
            debug_assert!(total > 0, "common character missing from one string");
            left as f64 / total as f64
        })
        .collect()
}

impl CostFunction for FrequencyRatio {
    fn cost(&self, raw: &[char], raw_cursor: usize, formatted: &[char], candidate: usize) -> f64 {
        self.costs(raw, raw_cursor, formatted)
            .get(candidate)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    fn costs(&self, raw: &[char], raw_cursor: usize, formatted: &[char]) -> Vec<f64> {
        let chars = common_chars(raw, formatted);
        let index: HashMap<char, usize> = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();

        // The raw cursor is fixed, so one set of raw fractions suffices.
        let raw_counts = LeftCounts::build(raw, &index);
        let raw_fractions = left_fractions(&raw_counts, raw_cursor);

        let fmt_counts = LeftCounts::build(formatted, &index);
        (0..=formatted.len())
            .map(|candidate| {
                left_fractions(&fmt_counts, candidate)
                    .iter()
                    .zip(&raw_fractions)
                    .map(|(fmt, raw)| (raw - fmt).powi(2))
                    .sum::<f64>()
            })
            .collect()
    }
}
