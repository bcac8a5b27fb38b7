//! Cursor maintenance engines.
//!
//! Given raw text, a raw cursor, and formatted text, recompute where the
//! cursor belongs in the formatted text. Two statistical engines implement
//! [`CursorMaintainer`]:
//!
//! - [`LayerMaintainer`]: format-specific, matches occurrence ratios of
//!   character classes layer by layer.
//! - [`RetrospectiveMaintainer`]: format-agnostic, minimizes a pluggable
//!   [`CostFunction`] over every candidate position.
//!
//! The third approach, meta, does not infer anything: a formatter is
//! rewritten as edits on a [`TextWithCursor`] (see `formats::meta`).
//!
//! # Positions
//!
//! Cursors are gap indices counted in `char`s, in `[0, length]`.

pub mod cost;
pub mod layer;
pub mod levenshtein;
pub mod retrospective;
pub mod tester;
pub mod text_with_cursor;

use serde::Serialize;
use tracing::debug;

pub use cost::{CostFunction, FrequencyRatio, SplitEditDistance};
pub use layer::LayerMaintainer;
pub use retrospective::RetrospectiveMaintainer;
pub use tester::Tester;
pub use text_with_cursor::TextWithCursor;

/// Formatted text with its maintained cursor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Maintained {
    pub text: String,
    pub cursor: usize,
    /// One cost per candidate position; only the retrospective engine fills it.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scores: Vec<f64>,
}

impl Maintained {
    pub fn new(text: String, cursor: usize) -> Self {
        Self {
            text,
            cursor,
            scores: Vec::new(),
        }
    }
}

/// Recomputes a cursor after formatting.
///
/// Implementations do not check whether formatting changed anything; that
/// is [`Augmented`]'s job.
pub trait CursorMaintainer {
    /// `raw_cursor` must be in `[0, chars(raw)]`.
    fn maintain(&self, raw: &str, raw_cursor: usize, formatted: &str) -> Maintained;
}

/// A formatter that also maps the cursor.
pub trait CursorFormatter {
    fn format_with_cursor(&self, raw: &str, raw_cursor: usize) -> Maintained;
}

impl<F> CursorFormatter for F
where
    F: Fn(&str, usize) -> Maintained,
{
    fn format_with_cursor(&self, raw: &str, raw_cursor: usize) -> Maintained {
        self(raw, raw_cursor)
    }
}

/// Boxed cursor formatter, as produced by configuration.
pub type BoxedFormatter = Box<dyn CursorFormatter + Send + Sync>;

/// A plain formatter combined with a maintainer.
pub struct Augmented<F, M> {
    format: F,
    maintainer: M,
}

impl<F, M> Augmented<F, M>
where
    F: Fn(&str) -> String,
    M: CursorMaintainer,
{
    pub const fn new(format: F, maintainer: M) -> Self {
        Self { format, maintainer }
    }
}

impl<F, M> CursorFormatter for Augmented<F, M>
where
    F: Fn(&str) -> String,
    M: CursorMaintainer,
{
    fn format_with_cursor(&self, raw: &str, raw_cursor: usize) -> Maintained {
        let formatted = (self.format)(raw);
        // Nothing was reformatted, so the cursor is already right.
        if formatted == raw {
            debug!(cursor = raw_cursor, "format is a no-op, keeping cursor");
            return Maintained::new(formatted, raw_cursor);
        }
        let mut result = self.maintainer.maintain(raw, raw_cursor, &formatted);
        result.text = formatted;
        result
    }
}
