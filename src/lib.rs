//! `cursor-maintainer`: keep the text cursor where the user expects it
//! when an input field is reformatted.
//!
//! When raw text such as `12500` is rewritten to `12,500`, the raw cursor
//! offset no longer means the same thing. This crate recomputes it.
//!
//! # Approaches
//!
//! - **Layer** ([`maintain::LayerMaintainer`]): match character-class
//!   occurrence ratios, one layer at a time, with a configurable tie-break.
//! - **Retrospective** ([`maintain::RetrospectiveMaintainer`]): minimize a
//!   cost function (split edit distance or frequency ratios) over every
//!   candidate position.
//! - **Meta** ([`formats::meta`]): formatters rewritten as edits on a
//!   [`maintain::TextWithCursor`], so the cursor is carried along.
//!
//! # Architecture
//!
//! ```text
//! ApproachConfig ──build──▶ CursorFormatter ◀── session (JSON lines)
//!        │                        ▲        ◀── harness (case tables)
//!        ▼                        │
//!   formats (plain, meta)   Augmented(format, maintainer)
//! ```

pub mod config;
pub mod error;
pub mod formats;
pub mod harness;
pub mod maintain;
pub mod session;

pub use config::ApproachConfig;
pub use error::{CursorError, CursorResult};
pub use maintain::{CursorFormatter, CursorMaintainer, Maintained};
pub use session::run_session;
