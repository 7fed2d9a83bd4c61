#![forbid(unsafe_code)]

//! The unit of a layout snapshot.

use loupe_core::Rect;

/// One visual node with its measured geometry and paint-order metadata.
///
/// Created fresh on every snapshot build and never mutated afterwards.
/// `N` is the host adapter's node handle type.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredElement<N> {
    /// Handle to the live node this element was measured from.
    pub node: N,
    /// Border-box rectangle in the global coordinate space. Never
    /// zero-sized inside a snapshot.
    pub rect: Rect,
    /// Distance from the tree root, in tree levels.
    pub depth: u32,
    /// Effective z-index: the style's numeric `zIndex`, else 0.
    pub z_index: i32,
    /// Display label, resolved once at snapshot time.
    pub component_name: String,
}

impl<N> MeasuredElement<N> {
    /// Border-box area, the hit-test specificity proxy.
    #[inline]
    pub fn area(&self) -> f64 {
        self.rect.area()
    }
}
