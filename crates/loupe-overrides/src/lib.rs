#![forbid(unsafe_code)]

//! Live style editing for a selected element.
//!
//! The engine never mutates the captured original style. Every edit is a
//! delta (override, disable, rename, addition) and the full effective
//! style is recomputed deterministically from the deltas on each change,
//! then written back to the host in one whole-object call so the live
//! element's style stays internally consistent at every observable
//! instant.

pub mod engine;
pub mod format;
pub mod input;

pub use engine::{OverrideEngine, ResolvedEntry};
pub use format::{format_value, is_color_key};
pub use input::{MAX_VALUE_LEN, editable_text, is_valid_style_key, parse_input};
