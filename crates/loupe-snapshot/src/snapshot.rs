#![forbid(unsafe_code)]

//! The ordered snapshot collection.

use crate::element::MeasuredElement;

/// One consistent capture of all visual nodes' geometry.
///
/// Ordered by (`z_index` descending, `depth` descending): what a user
/// perceives as on top comes first. Elements with equal keys keep their
/// tree-traversal order (the sort is stable). Immutable once built —
/// a rebuild replaces the whole value, so concurrent readers only ever
/// see a complete old or new snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<N> {
    elements: Vec<MeasuredElement<N>>,
}

impl<N> Snapshot<N> {
    /// A snapshot with no elements (tree unavailable or nothing
    /// measurable).
    pub fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Build a snapshot from measured elements in traversal order,
    /// establishing the paint ordering.
    pub fn from_elements(mut elements: Vec<MeasuredElement<N>>) -> Self {
        elements.sort_by(|a, b| {
            b.z_index
                .cmp(&a.z_index)
                .then_with(|| b.depth.cmp(&a.depth))
        });
        Self { elements }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the snapshot captured nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in paint order, topmost first.
    #[inline]
    pub fn elements(&self) -> &[MeasuredElement<N>] {
        &self.elements
    }

    /// Iterate elements in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &MeasuredElement<N>> {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Snapshot;
    use crate::element::MeasuredElement;
    use loupe_core::Rect;

    fn elem(id: u32, z_index: i32, depth: u32) -> MeasuredElement<u32> {
        MeasuredElement {
            node: id,
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            depth,
            z_index,
            component_name: format!("E{id}"),
        }
    }

    #[test]
    fn orders_by_z_index_descending_then_depth_descending() {
        let snapshot = Snapshot::from_elements(vec![
            elem(1, 0, 1),
            elem(2, 5, 0),
            elem(3, 0, 3),
            elem(4, -1, 9),
        ]);
        let order: Vec<_> = snapshot.iter().map(|e| e.node).collect();
        assert_eq!(order, vec![2, 3, 1, 4]);
    }

    #[test]
    fn equal_keys_keep_traversal_order() {
        let snapshot = Snapshot::from_elements(vec![
            elem(10, 0, 2),
            elem(11, 0, 2),
            elem(12, 0, 2),
        ]);
        let order: Vec<_> = snapshot.iter().map(|e| e.node).collect();
        assert_eq!(order, vec![10, 11, 12]);
    }

    #[test]
    fn empty_snapshot() {
        let snapshot: Snapshot<u32> = Snapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }
}
