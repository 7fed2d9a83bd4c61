#![forbid(unsafe_code)]

//! Layout snapshots, hit-testing, and tap selection.
//!
//! A [`Snapshot`] is one consistent, fully measured capture of every
//! visual node's on-screen geometry. All interaction — hit-testing a tap,
//! cycling through overlapping candidates — runs against a snapshot
//! value, never against the live tree, so the host can mutate freely
//! underneath without racing the inspector.

pub mod builder;
pub mod element;
pub mod hit;
pub mod selection;
pub mod snapshot;

pub use builder::build_snapshot;
pub use element::MeasuredElement;
pub use hit::hit_test;
pub use selection::Selection;
pub use snapshot::Snapshot;
