#![forbid(unsafe_code)]

//! The adapter seam between the inspector core and a host framework's
//! live render tree.
//!
//! Everything above this crate sees one uniform node handle type; the
//! messy parts of a real host — renderer registries, legacy vs. modern
//! measurement channels, duck-typed node shapes — stay inside a
//! [`TreeAdapter`] implementation.
//!
//! # Failure semantics
//!
//! Every operation may fail independently per node. Failures are
//! node-local: an unavailable root means "inspection has nothing to
//! show", a failed measurement drops one node, and a missing write
//! channel makes [`TreeAdapter::write_style`] report `false`. None of
//! these abort a traversal or surface as panics.

use std::fmt::Debug;

use async_trait::async_trait;
use loupe_core::{Rect, SourceLocation, StyleMap, StyleValue};

mod error;
pub use error::MeasureError;

#[cfg(feature = "test-helpers")]
pub mod fake;

/// A visual node paired with its root-relative depth.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualNode<N> {
    /// Opaque handle into the host's render tree.
    pub node: N,
    /// Distance from the traversal root, in tree levels.
    pub depth: u32,
}

impl<N> VisualNode<N> {
    /// Pair a node with its depth.
    pub fn new(node: N, depth: u32) -> Self {
        Self { node, depth }
    }
}

/// Read/write access to the host framework's live render tree.
///
/// The tree is owned and mutated by the host outside the inspector's
/// control; the core never holds tree pointers across suspension points
/// and re-resolves handles fresh on every snapshot build. Implementations
/// that sit on a process-wide renderer registry should select the first
/// registered renderer exposing a usable root.
#[async_trait]
pub trait TreeAdapter: Send + Sync {
    /// Opaque handle to a node in the host's tree. Cheap to clone;
    /// equality means "same live node".
    type Node: Clone + PartialEq + Debug + Send + Sync;

    /// The currently mounted root, or `None` when the tree is not
    /// accessible (production build, nothing mounted). Callers treat
    /// `None` as "inspection unavailable", never as an error.
    fn root(&self) -> Option<Self::Node>;

    /// Every host/visual node under `root`, depth-first with children
    /// visited before siblings, each with its root-relative depth.
    /// Composite/logical nodes are skipped but still count one tree
    /// level toward their descendants' depth.
    fn visual_nodes(&self, root: &Self::Node) -> Vec<VisualNode<Self::Node>>;

    /// The node's current on-screen border-box rectangle, in the global
    /// coordinate space. The only suspending operation on this trait:
    /// it crosses into the platform's rendering layer. The snapshot
    /// builder additionally bounds every call with the configured
    /// measurement timeout.
    async fn measure(&self, node: &Self::Node) -> Result<Rect, MeasureError>;

    /// The node's fully flattened style, or `None` if it has none.
    fn style(&self, node: &Self::Node) -> Option<StyleMap>;

    /// Best-effort display name; implementations fall back to the
    /// literal `"Unknown"` when nothing better is available.
    fn component_name(&self, node: &Self::Node) -> String;

    /// Best-effort dev-time provenance. Implementations may walk an
    /// owner chain and skip known framework-internal wrapper names.
    fn source_location(&self, node: &Self::Node) -> Option<SourceLocation>;

    /// Replace the node's style through the host's debug override
    /// channel. Whole-object, fire-and-forget: returns `false` when no
    /// such channel exists, and there is no rollback beyond writing the
    /// previous style again.
    fn write_style(&self, node: &Self::Node, style: &StyleMap) -> bool;

    /// Write a single property, preserving the rest of the node's
    /// current style. Provided in terms of [`TreeAdapter::style`] and
    /// [`TreeAdapter::write_style`]; hosts with a native per-property
    /// channel can override it.
    fn write_style_property(&self, node: &Self::Node, key: &str, value: StyleValue) -> bool {
        let mut style = self.style(node).unwrap_or_default();
        style.insert(key, value);
        self.write_style(node, &style)
    }
}
