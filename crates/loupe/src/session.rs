#![forbid(unsafe_code)]

//! Inspection session orchestration.
//!
//! Wires the snapshot builder, selection machine, and override engine
//! into the loop a presentation layer drives: activate, tap, cycle,
//! edit, deactivate. State is rebuilt per session — nothing persists
//! across deactivation.

use std::sync::Arc;

use loupe_core::{BoxModel, InspectorConfig, SourceLocation, resolve_box_model};
use loupe_overrides::OverrideEngine;
use loupe_snapshot::{MeasuredElement, Selection, Snapshot, build_snapshot};
use loupe_tree::TreeAdapter;
use tokio::time::Instant;
use tracing::debug;

/// One inspection session over a host adapter.
///
/// The session owns the current snapshot, the tap selection, and the
/// override engine for the selected element. Snapshot staleness is
/// managed with an explicit invalidate/ensure-fresh protocol so the
/// presentation layer can subscribe to the host's layout events and
/// still coalesce rebuild bursts.
pub struct InspectorSession<A: TreeAdapter> {
    adapter: Arc<A>,
    config: InspectorConfig,
    snapshot: Snapshot<A::Node>,
    selection: Selection<A::Node>,
    overrides: Option<OverrideEngine<A>>,
    active: bool,
    dirty: bool,
    last_rebuild: Option<Instant>,
}

impl<A: TreeAdapter> InspectorSession<A> {
    /// Create an inactive session with default configuration.
    pub fn new(adapter: Arc<A>) -> Self {
        Self::with_config(adapter, InspectorConfig::default())
    }

    /// Create an inactive session with explicit configuration.
    pub fn with_config(adapter: Arc<A>, config: InspectorConfig) -> Self {
        Self {
            adapter,
            config,
            snapshot: Snapshot::empty(),
            selection: Selection::new(),
            overrides: None,
            active: false,
            dirty: false,
            last_rebuild: None,
        }
    }

    /// Whether inspection is currently active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The session configuration.
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Enter inspection mode. Selection starts empty and the snapshot
    /// is marked stale; await [`InspectorSession::ensure_fresh`] before
    /// the first tap.
    pub fn activate(&mut self) {
        debug!("inspection session activated");
        self.active = true;
        self.selection.clear();
        self.overrides = None;
        self.dirty = true;
    }

    /// Leave inspection mode. Restores the selected element's original
    /// style if it was edited, then drops all session state.
    pub fn deactivate(&mut self) {
        debug!("inspection session deactivated");
        if let Some(mut engine) = self.overrides.take() {
            if !engine.is_pristine() {
                engine.reset();
            }
        }
        self.selection.clear();
        self.snapshot = Snapshot::empty();
        self.active = false;
        self.dirty = false;
    }

    /// Build a fresh snapshot and atomically replace the current one.
    /// Returns whether anything was captured. The selection is left
    /// untouched: cycling stays scoped to the tap that produced it.
    pub async fn rebuild(&mut self) -> bool {
        self.snapshot = build_snapshot(self.adapter.as_ref(), &self.config).await;
        self.dirty = false;
        self.last_rebuild = Some(Instant::now());
        !self.snapshot.is_empty()
    }

    /// Note that the host's layout changed; the snapshot is stale until
    /// the next rebuild.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Rebuild if the snapshot is stale or was never built. Call before
    /// handling a tap. Returns whether a rebuild ran.
    pub async fn ensure_fresh(&mut self) -> bool {
        if self.dirty || self.snapshot.is_empty() {
            self.rebuild().await;
            return true;
        }
        false
    }

    /// Eagerly rebuild after an invalidation, but coalesce bursts: the
    /// rebuild is skipped while the snapshot is clean or the configured
    /// debounce window since the last rebuild has not elapsed. Returns
    /// whether a rebuild ran.
    pub async fn debounced_rebuild(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        if let Some(last) = self.last_rebuild {
            if last.elapsed() < self.config.invalidate_debounce {
                return false;
            }
        }
        self.rebuild().await;
        true
    }

    /// Handle a tap: hit-test the current snapshot and select the most
    /// specific candidate. Ignored while inactive. A selection-identity
    /// change synchronously re-targets the override engine in the same
    /// update.
    pub fn tap(&mut self, x: f64, y: f64) -> Option<&MeasuredElement<A::Node>> {
        if !self.active {
            return None;
        }
        self.selection.select_at(&self.snapshot, x, y);
        self.retarget_overrides();
        self.selection.selected()
    }

    /// Advance to the next overlapping candidate under the last tap.
    pub fn cycle_next(&mut self) -> Option<&MeasuredElement<A::Node>> {
        self.selection.cycle_next();
        self.retarget_overrides();
        self.selection.selected()
    }

    /// Step back to the previous overlapping candidate.
    pub fn cycle_previous(&mut self) -> Option<&MeasuredElement<A::Node>> {
        self.selection.cycle_previous();
        self.retarget_overrides();
        self.selection.selected()
    }

    /// Deselect without leaving inspection mode.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.overrides = None;
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &Snapshot<A::Node> {
        &self.snapshot
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection<A::Node> {
        &self.selection
    }

    /// The selected element, if any.
    pub fn selected(&self) -> Option<&MeasuredElement<A::Node>> {
        self.selection.selected()
    }

    /// The override engine for the selected element.
    pub fn overrides(&self) -> Option<&OverrideEngine<A>> {
        self.overrides.as_ref()
    }

    /// Mutable override engine access for the property panel.
    pub fn overrides_mut(&mut self) -> Option<&mut OverrideEngine<A>> {
        self.overrides.as_mut()
    }

    /// Resolve the selected element's box model from its live style and
    /// measured size. Recomputed on demand — edits show up immediately.
    pub fn selected_box_model(&self) -> Option<BoxModel> {
        let element = self.selection.selected()?;
        let style = self.adapter.style(&element.node);
        Some(resolve_box_model(style.as_ref(), element.rect.size()))
    }

    /// The selected element's source provenance, if the host carries
    /// it.
    pub fn selected_source(&self) -> Option<SourceLocation> {
        let element = self.selection.selected()?;
        self.adapter.source_location(&element.node)
    }

    /// Rebuild the override engine when the selected node identity
    /// changed. Deltas on the previous element are abandoned, not
    /// rolled back: the style the user applied stays live until an
    /// explicit reset or deactivation.
    fn retarget_overrides(&mut self) {
        let current = self.selection.selected().map(|e| e.node.clone());
        match current {
            None => self.overrides = None,
            Some(node) => {
                let same = self
                    .overrides
                    .as_ref()
                    .is_some_and(|engine| *engine.target() == node);
                if !same {
                    self.overrides =
                        Some(OverrideEngine::capture(Arc::clone(&self.adapter), node));
                }
            }
        }
    }
}
