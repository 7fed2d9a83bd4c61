#![forbid(unsafe_code)]

//! Tap-to-select state with candidate cycling.

use crate::element::MeasuredElement;
use crate::hit::hit_test;
use crate::snapshot::Snapshot;

/// The currently selected candidate out of the overlapping matches under
/// one tap.
///
/// Two states: idle (no matches, nothing selected) and holding matches
/// with one index selected. A new tap always recomputes the match set
/// and discards any prior cycling position; cycling is scoped to one
/// tap's result set and wraps in both directions. The machine holds no
/// reference to the snapshot builder — staleness is the caller's
/// responsibility.
#[derive(Debug, Clone)]
pub struct Selection<N> {
    matches: Vec<MeasuredElement<N>>,
    selected_index: usize,
}

impl<N: Clone> Selection<N> {
    /// An idle selection.
    pub fn new() -> Self {
        Self {
            matches: Vec::new(),
            selected_index: 0,
        }
    }

    /// Hit-test the snapshot at a tap point and select the most
    /// specific match. Always resets the cycling position, whatever the
    /// prior state.
    pub fn select_at(
        &mut self,
        snapshot: &Snapshot<N>,
        x: f64,
        y: f64,
    ) -> Option<&MeasuredElement<N>> {
        self.matches = hit_test(snapshot, x, y);
        self.selected_index = 0;
        self.selected()
    }

    /// Advance to the next overlapping candidate, wrapping past the
    /// end. Harmless no-op when idle.
    pub fn cycle_next(&mut self) -> Option<&MeasuredElement<N>> {
        if !self.matches.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.matches.len();
        }
        self.selected()
    }

    /// Step back to the previous candidate, wrapping past the start.
    /// Harmless no-op when idle.
    pub fn cycle_previous(&mut self) -> Option<&MeasuredElement<N>> {
        if !self.matches.is_empty() {
            let len = self.matches.len();
            self.selected_index = (self.selected_index + len - 1) % len;
        }
        self.selected()
    }

    /// Force idle unconditionally.
    pub fn clear(&mut self) {
        self.matches.clear();
        self.selected_index = 0;
    }

    /// The selected element, or `None` when idle.
    pub fn selected(&self) -> Option<&MeasuredElement<N>> {
        self.matches.get(self.selected_index)
    }

    /// All overlapping candidates for the current tap, most specific
    /// first.
    pub fn matches(&self) -> &[MeasuredElement<N>] {
        &self.matches
    }

    /// Index of the selected candidate within [`Selection::matches`].
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Whether the selection is idle.
    pub fn is_idle(&self) -> bool {
        self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;
    use crate::element::MeasuredElement;
    use crate::snapshot::Snapshot;
    use loupe_core::Rect;

    fn stack(n: usize) -> Snapshot<u32> {
        // n concentric rectangles, all containing (1, 1).
        let elements = (0..n)
            .map(|i| MeasuredElement {
                node: i as u32,
                rect: Rect::new(0.0, 0.0, 10.0 * (i + 1) as f64, 10.0),
                depth: 0,
                z_index: 0,
                component_name: format!("E{i}"),
            })
            .collect();
        Snapshot::from_elements(elements)
    }

    #[test]
    fn tap_selects_most_specific_match() {
        let snap = stack(3);
        let mut selection = Selection::new();
        let selected = selection.select_at(&snap, 1.0, 1.0).cloned();
        assert_eq!(selected.map(|e| e.node), Some(0));
        assert_eq!(selection.matches().len(), 3);
        assert_eq!(selection.selected_index(), 0);
    }

    #[test]
    fn tap_on_nothing_goes_idle() {
        let snap = stack(3);
        let mut selection = Selection::new();
        selection.select_at(&snap, 1.0, 1.0);
        assert!(!selection.is_idle());

        assert!(selection.select_at(&snap, 500.0, 500.0).is_none());
        assert!(selection.is_idle());
        assert!(selection.selected().is_none());
    }

    #[test]
    fn new_tap_discards_cycling_position() {
        let snap = stack(3);
        let mut selection = Selection::new();
        selection.select_at(&snap, 1.0, 1.0);
        selection.cycle_next();
        assert_eq!(selection.selected_index(), 1);

        selection.select_at(&snap, 1.0, 1.0);
        assert_eq!(selection.selected_index(), 0);
    }

    #[test]
    fn cycle_next_wraps_to_start() {
        let snap = stack(3);
        let mut selection = Selection::new();
        selection.select_at(&snap, 1.0, 1.0);

        assert_eq!(selection.cycle_next().map(|e| e.node), Some(1));
        assert_eq!(selection.cycle_next().map(|e| e.node), Some(2));
        assert_eq!(selection.cycle_next().map(|e| e.node), Some(0));
    }

    #[test]
    fn cycle_previous_n_times_returns_to_start() {
        let n = 5;
        let snap = stack(n);
        let mut selection = Selection::new();
        selection.select_at(&snap, 1.0, 1.0);

        for _ in 0..n {
            selection.cycle_previous();
        }
        assert_eq!(selection.selected_index(), 0);
    }

    #[test]
    fn cycling_while_idle_is_a_no_op() {
        let mut selection: Selection<u32> = Selection::new();
        assert!(selection.cycle_next().is_none());
        assert!(selection.cycle_previous().is_none());
        assert!(selection.is_idle());
        assert_eq!(selection.selected_index(), 0);
    }

    #[test]
    fn clear_forces_idle() {
        let snap = stack(2);
        let mut selection = Selection::new();
        selection.select_at(&snap, 1.0, 1.0);
        selection.clear();
        assert!(selection.is_idle());
        assert!(selection.selected().is_none());
    }
}
