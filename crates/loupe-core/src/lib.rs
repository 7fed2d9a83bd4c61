#![forbid(unsafe_code)]

//! Core: geometry, style values, box-model resolution, and configuration.

pub mod box_model;
pub mod config;
pub mod geometry;
pub mod source;
pub mod style;

pub use box_model::{BoxModel, resolve_box_model};
pub use config::InspectorConfig;
pub use geometry::{EdgeSizes, Point, Rect, Size};
pub use source::SourceLocation;
pub use style::{StyleMap, StyleValue};
