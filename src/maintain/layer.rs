//! Layer approach: match character-class ratios across the formatting.
//!
//! Each [`Tester`] induces a layer of the text: the characters it accepts.
//! Within a layer, the raw cursor has some fraction of the layer's
//! characters to its left. We look for the formatted positions whose
//! fraction is closest. If several positions tie, the next (finer) layer
//! narrows the range. A final tie is broken left or right as configured.

use tracing::{debug, trace};

use super::{CursorMaintainer, Maintained, Tester};

/// Cursor maintainer configured with an ordered list of layers.
#[derive(Debug, Clone)]
pub struct LayerMaintainer {
    testers: Vec<Tester>,
    prefer_right: bool,
}

/// Best run of positions found in one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    left: usize,
    right: usize,
}

impl LayerMaintainer {
    /// Testers are consulted in priority order. `prefer_right` picks the
    /// right end of a range still tied after the last layer.
    pub const fn new(testers: Vec<Tester>, prefer_right: bool) -> Self {
        Self {
            testers,
            prefer_right,
        }
    }

    pub fn testers(&self) -> &[Tester] {
        &self.testers
    }

    pub const fn prefer_right(&self) -> bool {
        self.prefer_right
    }

    /// Narrow `range` within one layer, or `None` if the layer is empty in
    /// either text.
    fn narrow(tester: &Tester, raw: &[char], raw_cursor: usize, formatted: &[char], range: Run) -> Option<Run> {
        let mut raw_left = 0usize;
        let mut raw_total = 0usize;
        for (pos, &ch) in raw.iter().enumerate() {
            if tester.test(ch) {
                raw_total += 1;
                if pos < raw_cursor {
                    raw_left += 1;
                }
            }
        }
        if raw_total == 0 {
            return None;
        }

        // prefix[p]: layer characters in formatted[..p].
        let mut prefix = Vec::with_capacity(formatted.len() + 1);
        prefix.push(0usize);
        let mut fmt_total = 0usize;
        for &ch in formatted {
            if tester.test(ch) {
                fmt_total += 1;
            }
            prefix.push(fmt_total);
        }
        if fmt_total == 0 {
            return None;
        }

        // |raw_left/raw_total - prefix[p]/fmt_total| scaled by raw_total * fmt_total,
        // so ties are exact.
        let delta = |p: usize| (raw_left * fmt_total).abs_diff(prefix[p] * raw_total);

        let mut best = Run {
            left: range.left,
            right: range.left,
        };
        let mut best_delta = delta(range.left);
        for p in range.left + 1..=range.right {
            let d = delta(p);
            if d == best_delta {
                best.right = p;
            } else if d < best_delta {
                best_delta = d;
                best = Run { left: p, right: p };
            }
        }
        Some(best)
    }
}

impl CursorMaintainer for LayerMaintainer {
    fn maintain(&self, raw: &str, raw_cursor: usize, formatted: &str) -> Maintained {
        let raw: Vec<char> = raw.chars().collect();
        let fmt: Vec<char> = formatted.chars().collect();
        debug_assert!(raw_cursor <= raw.len(), "raw cursor out of range");

        if fmt.is_empty() {
            return Maintained::new(String::new(), 0);
        }

        let mut best = Run {
            left: 0,
            right: fmt.len(),
        };
        for (rank, tester) in self.testers.iter().enumerate() {
            let Some(run) = Self::narrow(tester, &raw, raw_cursor, &fmt, best) else {
                trace!(rank, ?tester, "layer empty, skipping");
                continue;
            };
            trace!(rank, ?tester, left = run.left, right = run.right, "layer narrowed");
            best = run;
            if best.left == best.right {
                break;
            }
        }

        let cursor = if self.prefer_right { best.right } else { best.left };
        debug!(raw_cursor, cursor, "layer cursor");
        Maintained::new(formatted.to_owned(), cursor)
    }
}
