#![forbid(unsafe_code)]

//! A scripted in-memory render tree for tests.
//!
//! [`FakeTree`] plays the host framework: a node hierarchy with authored
//! styles, names, and source locations, plus a per-node [`MeasureScript`]
//! controlling how measurement behaves (resolve, fail, hang, or resolve
//! after a delay). Style writes are recorded for assertion.
//!
//! The tree is internally locked, so tests can share it behind an `Arc`
//! with a running session and mutate layout between snapshots — the
//! same shape of external mutation the real host performs.
//!
//! Hanging and delayed scripts use `tokio::time`, so tests can drive
//! them deterministically under `#[tokio::test(start_paused = true)]`.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use loupe_core::{Rect, SourceLocation, StyleMap};

use crate::{MeasureError, TreeAdapter, VisualNode};

/// Handle into a [`FakeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeNode(usize);

/// How a node answers measurement requests.
#[derive(Debug, Clone)]
pub enum MeasureScript {
    /// Resolve immediately with this rectangle.
    Resolve(Rect),
    /// Reject with this error.
    Fail(MeasureError),
    /// Never answer. The snapshot builder's timeout must reap it.
    Hang,
    /// Resolve with this rectangle after the given delay.
    Delayed(Duration, Rect),
}

/// Specification for one node, consumed by [`FakeTree::add_root`] and
/// [`FakeTree::add_child`].
#[derive(Debug, Clone)]
pub struct NodeSpec {
    name: String,
    visual: bool,
    style: Option<StyleMap>,
    source: Option<SourceLocation>,
    measure: MeasureScript,
}

impl NodeSpec {
    /// A host/visual node. Give it a rectangle via [`NodeSpec::rect`] or
    /// a full script via [`NodeSpec::measure`].
    pub fn visual(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visual: true,
            style: None,
            source: None,
            measure: MeasureScript::Resolve(Rect::default()),
        }
    }

    /// A composite/logical node: skipped during enumeration but still
    /// one tree level deep for its descendants.
    pub fn composite(name: impl Into<String>) -> Self {
        Self {
            visual: false,
            ..Self::visual(name)
        }
    }

    /// Measure resolves immediately with `rect`.
    #[must_use]
    pub fn rect(mut self, rect: Rect) -> Self {
        self.measure = MeasureScript::Resolve(rect);
        self
    }

    /// Attach a flattened style.
    #[must_use]
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    /// Attach a source location.
    #[must_use]
    pub fn source(mut self, file: impl Into<String>, line: u32) -> Self {
        self.source = Some(SourceLocation::new(file, line));
        self
    }

    /// Replace the measurement script.
    #[must_use]
    pub fn measure(mut self, script: MeasureScript) -> Self {
        self.measure = script;
        self
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    spec: NodeSpec,
    children: Vec<usize>,
}

#[derive(Debug, Default)]
struct Inner {
    nodes: Vec<NodeData>,
    root: Option<usize>,
    writes: Vec<(usize, StyleMap)>,
}

/// Scripted in-memory render tree.
#[derive(Debug, Default)]
pub struct FakeTree {
    inner: Mutex<Inner>,
    write_channel_closed: bool,
}

impl FakeTree {
    /// An empty tree with no root: [`TreeAdapter::root`] returns `None`,
    /// modeling a production build without introspection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable the style write channel: [`TreeAdapter::write_style`]
    /// reports `false` and records nothing.
    #[must_use]
    pub fn without_write_channel(mut self) -> Self {
        self.write_channel_closed = true;
        self
    }

    /// Install the root node. Replaces any existing tree.
    pub fn add_root(&self, spec: NodeSpec) -> FakeNode {
        let mut inner = self.lock();
        inner.nodes.clear();
        inner.writes.clear();
        inner.nodes.push(NodeData {
            spec,
            children: Vec::new(),
        });
        inner.root = Some(0);
        FakeNode(0)
    }

    /// Append a child under `parent`, after any existing siblings.
    pub fn add_child(&self, parent: FakeNode, spec: NodeSpec) -> FakeNode {
        let mut inner = self.lock();
        let id = inner.nodes.len();
        inner.nodes.push(NodeData {
            spec,
            children: Vec::new(),
        });
        inner.nodes[parent.0].children.push(id);
        FakeNode(id)
    }

    /// Rescript a node's measurement (simulates layout mutation between
    /// snapshots).
    pub fn set_measure(&self, node: FakeNode, script: MeasureScript) {
        self.lock().nodes[node.0].spec.measure = script;
    }

    /// Replace a node's authored style. Clears any recorded writes for
    /// the node so [`TreeAdapter::style`] reflects the new authored
    /// value.
    pub fn set_style(&self, node: FakeNode, style: StyleMap) {
        let mut inner = self.lock();
        inner.nodes[node.0].spec.style = Some(style);
        inner.writes.retain(|(id, _)| *id != node.0);
    }

    /// Every style write recorded so far, in call order.
    pub fn writes(&self) -> Vec<(FakeNode, StyleMap)> {
        self.lock()
            .writes
            .iter()
            .map(|(id, style)| (FakeNode(*id), style.clone()))
            .collect()
    }

    /// The most recent style written to `node`, if any.
    pub fn last_write(&self, node: FakeNode) -> Option<StyleMap> {
        self.lock()
            .writes
            .iter()
            .rev()
            .find(|(id, _)| *id == node.0)
            .map(|(_, style)| style.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn walk(nodes: &[NodeData], id: usize, depth: u32, out: &mut Vec<VisualNode<FakeNode>>) {
    let data = &nodes[id];
    if data.spec.visual {
        out.push(VisualNode::new(FakeNode(id), depth));
    }
    for &child in &data.children {
        walk(nodes, child, depth + 1, out);
    }
}

#[async_trait]
impl TreeAdapter for FakeTree {
    type Node = FakeNode;

    fn root(&self) -> Option<FakeNode> {
        self.lock().root.map(FakeNode)
    }

    fn visual_nodes(&self, root: &FakeNode) -> Vec<VisualNode<FakeNode>> {
        let inner = self.lock();
        let mut out = Vec::new();
        walk(&inner.nodes, root.0, 0, &mut out);
        out
    }

    async fn measure(&self, node: &FakeNode) -> Result<Rect, MeasureError> {
        // Clone the script out so the lock is not held across await.
        let script = self.lock().nodes[node.0].spec.measure.clone();
        match script {
            MeasureScript::Resolve(rect) => Ok(rect),
            MeasureScript::Fail(err) => Err(err),
            MeasureScript::Hang => std::future::pending().await,
            MeasureScript::Delayed(delay, rect) => {
                tokio::time::sleep(delay).await;
                Ok(rect)
            }
        }
    }

    fn style(&self, node: &FakeNode) -> Option<StyleMap> {
        // A recorded write is the node's live style from then on.
        self.last_write(*node)
            .or_else(|| self.lock().nodes[node.0].spec.style.clone())
    }

    fn component_name(&self, node: &FakeNode) -> String {
        let name = self.lock().nodes[node.0].spec.name.clone();
        if name.is_empty() {
            "Unknown".to_string()
        } else {
            name
        }
    }

    fn source_location(&self, node: &FakeNode) -> Option<SourceLocation> {
        self.lock().nodes[node.0].spec.source.clone()
    }

    fn write_style(&self, node: &FakeNode, style: &StyleMap) -> bool {
        if self.write_channel_closed {
            return false;
        }
        self.lock().writes.push((node.0, style.clone()));
        true
    }
}
