#![forbid(unsafe_code)]

//! Point-to-elements hit-testing.

use crate::element::MeasuredElement;
use crate::snapshot::Snapshot;

/// All elements whose border box contains the point, most specific
/// first.
///
/// Containment is inclusive on every edge: a tap exactly on a border
/// counts as inside. Matches are ordered by ascending area — the
/// smallest rectangle under the finger is the innermost, most relevant
/// candidate, deliberately overriding raw paint order. Equal areas keep
/// their snapshot order (stable sort).
///
/// Zero-sized elements are excluded at snapshot-build time, but the
/// tester re-checks: it accepts any snapshot value, including ones not
/// produced by this crate's builder.
pub fn hit_test<N: Clone>(snapshot: &Snapshot<N>, x: f64, y: f64) -> Vec<MeasuredElement<N>> {
    let mut matches: Vec<MeasuredElement<N>> = snapshot
        .iter()
        .filter(|element| !element.rect.is_zero_sized() && element.rect.contains(x, y))
        .cloned()
        .collect();

    matches.sort_by(|a, b| a.area().total_cmp(&b.area()));
    matches
}

#[cfg(test)]
mod tests {
    use super::hit_test;
    use crate::element::MeasuredElement;
    use crate::snapshot::Snapshot;
    use loupe_core::Rect;
    use proptest::prelude::*;

    fn elem(id: u32, rect: Rect) -> MeasuredElement<u32> {
        MeasuredElement {
            node: id,
            rect,
            depth: 0,
            z_index: 0,
            component_name: format!("E{id}"),
        }
    }

    fn snapshot(elements: Vec<MeasuredElement<u32>>) -> Snapshot<u32> {
        Snapshot::from_elements(elements)
    }

    // --- Containment ---

    #[test]
    fn corners_are_inclusive() {
        let snap = snapshot(vec![elem(1, Rect::new(10.0, 20.0, 30.0, 40.0))]);
        for (x, y) in [(10.0, 20.0), (40.0, 60.0), (40.0, 20.0), (10.0, 60.0)] {
            let hits = hit_test(&snap, x, y);
            assert_eq!(hits.len(), 1, "corner ({x}, {y}) must hit");
        }
        assert!(hit_test(&snap, 40.1, 20.0).is_empty());
    }

    #[test]
    fn miss_returns_empty() {
        let snap = snapshot(vec![elem(1, Rect::new(0.0, 0.0, 10.0, 10.0))]);
        assert!(hit_test(&snap, 50.0, 50.0).is_empty());
        assert!(hit_test(&Snapshot::<u32>::empty(), 0.0, 0.0).is_empty());
    }

    // --- Ordering ---

    #[test]
    fn matches_sorted_by_ascending_area() {
        let snap = snapshot(vec![
            elem(1, Rect::new(0.0, 0.0, 100.0, 100.0)),
            elem(2, Rect::new(0.0, 0.0, 50.0, 50.0)),
            elem(3, Rect::new(0.0, 0.0, 10.0, 10.0)),
        ]);
        let hits = hit_test(&snap, 5.0, 5.0);
        let order: Vec<_> = hits.iter().map(|e| e.node).collect();
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn area_order_overrides_paint_order() {
        // Higher z-index puts element 1 first in the snapshot, but the
        // smaller element 2 must still lead the hit list.
        let mut big = elem(1, Rect::new(0.0, 0.0, 100.0, 100.0));
        big.z_index = 10;
        let small = elem(2, Rect::new(0.0, 0.0, 10.0, 10.0));
        let snap = snapshot(vec![big, small]);
        assert_eq!(snap.elements()[0].node, 1);

        let hits = hit_test(&snap, 5.0, 5.0);
        let order: Vec<_> = hits.iter().map(|e| e.node).collect();
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn equal_areas_keep_snapshot_order() {
        let mut top = elem(1, Rect::new(0.0, 0.0, 20.0, 20.0));
        top.z_index = 5;
        let mid = elem(2, Rect::new(0.0, 0.0, 20.0, 20.0));
        let bottom = elem(3, Rect::new(0.0, 0.0, 20.0, 20.0));
        let snap = snapshot(vec![bottom, top, mid]);
        // Snapshot order: 1 (z 5), then 3, 2 by traversal.
        let hits = hit_test(&snap, 1.0, 1.0);
        let order: Vec<_> = hits.iter().map(|e| e.node).collect();
        assert_eq!(order, vec![1, 3, 2]);
    }

    // --- Zero-size defense ---

    #[test]
    fn zero_sized_elements_never_match() {
        // Hand-built snapshot bypassing the builder's exclusion.
        let snap = snapshot(vec![
            elem(1, Rect::new(0.0, 0.0, 0.0, 10.0)),
            elem(2, Rect::new(0.0, 0.0, 10.0, 10.0)),
        ]);
        let hits = hit_test(&snap, 0.0, 0.0);
        let order: Vec<_> = hits.iter().map(|e| e.node).collect();
        assert_eq!(order, vec![2]);
    }

    // --- Properties ---

    proptest! {
        #[test]
        fn own_corners_always_hit(
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
            w in 0.1f64..500.0,
            h in 0.1f64..500.0,
        ) {
            let rect = Rect::new(x, y, w, h);
            let snap = snapshot(vec![elem(1, rect)]);
            prop_assert_eq!(hit_test(&snap, x, y).len(), 1);
            prop_assert_eq!(hit_test(&snap, x + w, y + h).len(), 1);
        }

        #[test]
        fn results_are_area_sorted(
            rects in proptest::collection::vec((0.0f64..50.0, 0.0f64..50.0, 1.0f64..100.0, 1.0f64..100.0), 0..12),
        ) {
            let elements = rects
                .iter()
                .enumerate()
                .map(|(i, &(x, y, w, h))| elem(i as u32, Rect::new(x, y, w, h)))
                .collect();
            let hits = hit_test(&snapshot(elements), 25.0, 25.0);
            for pair in hits.windows(2) {
                prop_assert!(pair[0].area() <= pair[1].area());
            }
            for hit in &hits {
                prop_assert!(hit.rect.contains(25.0, 25.0));
            }
        }
    }
}
