#![forbid(unsafe_code)]

//! Loupe public facade crate.
//!
//! Loupe is the core of an in-app element inspector for component-tree
//! UI frameworks: it snapshots the live render tree's on-screen
//! geometry, maps taps to ordered candidate lists, and applies live
//! style edits — all through one narrow adapter seam to the host.
//!
//! This crate re-exports the types a consumer needs and provides
//! [`InspectorSession`], the orchestration layer a presentation surface
//! (overlay, floating panel) drives.

// --- Core re-exports -------------------------------------------------------

pub use loupe_core::{
    BoxModel, EdgeSizes, InspectorConfig, Point, Rect, Size, SourceLocation, StyleMap,
    StyleValue, resolve_box_model,
};

// --- Tree re-exports -------------------------------------------------------

pub use loupe_tree::{MeasureError, TreeAdapter, VisualNode};

// --- Snapshot re-exports ---------------------------------------------------

pub use loupe_snapshot::{MeasuredElement, Selection, Snapshot, build_snapshot, hit_test};

// --- Override re-exports ---------------------------------------------------

pub use loupe_overrides::{
    MAX_VALUE_LEN, OverrideEngine, ResolvedEntry, editable_text, format_value, is_color_key,
    is_valid_style_key, parse_input,
};

// --- Session ---------------------------------------------------------------

mod session;
pub use session::InspectorSession;

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BoxModel, InspectorConfig, InspectorSession, MeasuredElement, Rect, Selection, Snapshot,
        StyleMap, StyleValue, TreeAdapter, build_snapshot, hit_test,
    };
}
