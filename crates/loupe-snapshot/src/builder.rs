#![forbid(unsafe_code)]

//! Concurrent snapshot construction.
//!
//! # Algorithm
//!
//! 1. Resolve the root; no root means an empty snapshot, not an error.
//! 2. Enumerate visual nodes with their depths.
//! 3. Fan out one future per node (measure + style + name), all in
//!    flight at once: total latency is bounded by the slowest single
//!    node, never the sum.
//! 4. Join with settle-all discipline: every future resolves to
//!    `Some(element)` or `None`, so one bad node cannot abort the batch.
//! 5. Drop zero-sized elements — they are untappable and would corrupt
//!    area tie-breaks. This is the single authoritative exclusion site.
//! 6. Stable-sort by (z-index desc, depth desc).
//!
//! Each measurement is independently bounded by
//! [`InspectorConfig::measure_timeout`], so a stalled platform call costs
//! one node, not the snapshot.

use futures::future::join_all;
use loupe_core::{InspectorConfig, StyleMap};
use loupe_tree::{TreeAdapter, VisualNode};
use tracing::{debug, trace};

use crate::element::MeasuredElement;
use crate::snapshot::Snapshot;

/// Build one consistent snapshot of the current render tree.
///
/// Recomputed from scratch on every call: the tree may have mutated
/// arbitrarily since the last one, so nothing is diffed or reused. A
/// concurrent second build is harmless — whichever result the caller
/// stores last wins, and each is internally consistent.
pub async fn build_snapshot<A: TreeAdapter>(
    adapter: &A,
    config: &InspectorConfig,
) -> Snapshot<A::Node> {
    let Some(root) = adapter.root() else {
        debug!("render tree root unavailable, snapshot is empty");
        return Snapshot::empty();
    };

    let nodes = adapter.visual_nodes(&root);
    let total = nodes.len();

    let elements: Vec<MeasuredElement<A::Node>> = join_all(
        nodes
            .into_iter()
            .map(|visual| capture_element(adapter, config, visual)),
    )
    .await
    .into_iter()
    .flatten()
    .collect();

    debug!(total, captured = elements.len(), "layout snapshot built");
    Snapshot::from_elements(elements)
}

/// Measure and annotate a single node. Failures of any kind resolve to
/// `None`: they are expected (unmounted nodes, slow platform calls) and
/// must never disturb the rest of the batch.
async fn capture_element<A: TreeAdapter>(
    adapter: &A,
    config: &InspectorConfig,
    visual: VisualNode<A::Node>,
) -> Option<MeasuredElement<A::Node>> {
    let VisualNode { node, depth } = visual;

    let rect = match tokio::time::timeout(config.measure_timeout, adapter.measure(&node)).await {
        Ok(Ok(rect)) => rect,
        Ok(Err(err)) => {
            trace!(node = ?node, error = %err, "dropping unmeasurable node");
            return None;
        }
        Err(_) => {
            trace!(
                node = ?node,
                timeout_ms = config.measure_timeout.as_millis() as u64,
                "dropping node: measurement timed out"
            );
            return None;
        }
    };

    if rect.is_zero_sized() {
        trace!(node = ?node, "dropping zero-sized node");
        return None;
    }

    let style = adapter.style(&node);
    Some(MeasuredElement {
        component_name: adapter.component_name(&node),
        z_index: effective_z_index(style.as_ref()),
        node,
        rect,
        depth,
    })
}

/// The style's numeric `zIndex`, truncated toward zero; unset or
/// non-finite counts as 0.
fn effective_z_index(style: Option<&StyleMap>) -> i32 {
    style
        .and_then(|s| s.number("zIndex"))
        .filter(|z| z.is_finite())
        .map(|z| z as i32)
        .unwrap_or(0)
}
