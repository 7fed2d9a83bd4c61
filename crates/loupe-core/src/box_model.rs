#![forbid(unsafe_code)]

//! Box-model extraction from flattened styles.
//!
//! Maps a flattened style object plus a measured border-box size to the
//! margin/border/padding edge quads and the derived content size.
//!
//! # Resolution rules
//!
//! For margin and padding, each edge resolves from the most specific
//! property that is present and numeric:
//! per-edge (`marginTop`) > axis shorthand (`marginVertical`) > universal
//! shorthand (`margin`) > 0. Border widths have no axis shorthand:
//! per-edge (`borderTopWidth`) > `borderWidth` > 0. Presence wins over
//! magnitude: an explicit `marginTop: 0` beats `margin: 8`.
//!
//! Non-numeric values (percent strings, `"auto"`) are treated as absent.
//!
//! Content size is `measured − (border + padding)` per axis and is not
//! clamped: a pathological style yields a negative content size, which the
//! inspector surfaces as-is.

use crate::geometry::{EdgeSizes, Size};
use crate::style::StyleMap;

/// Resolved box-model rings plus derived content size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxModel {
    pub margin: EdgeSizes,
    pub border: EdgeSizes,
    pub padding: EdgeSizes,
    pub content: Size,
}

/// Resolve the box model for a measured element.
///
/// `style` is the element's flattened style, or `None` when it has no
/// style at all (all rings zero, content equals the measured size).
pub fn resolve_box_model(style: Option<&StyleMap>, measured: Size) -> BoxModel {
    let margin = resolve_ring(
        style,
        ["marginTop", "marginRight", "marginBottom", "marginLeft"],
        Some(("marginVertical", "marginHorizontal")),
        "margin",
    );
    let border = resolve_ring(
        style,
        [
            "borderTopWidth",
            "borderRightWidth",
            "borderBottomWidth",
            "borderLeftWidth",
        ],
        None,
        "borderWidth",
    );
    let padding = resolve_ring(
        style,
        [
            "paddingTop",
            "paddingRight",
            "paddingBottom",
            "paddingLeft",
        ],
        Some(("paddingVertical", "paddingHorizontal")),
        "padding",
    );

    let content = Size::new(
        measured.width - padding.horizontal_sum() - border.horizontal_sum(),
        measured.height - padding.vertical_sum() - border.vertical_sum(),
    );

    BoxModel {
        margin,
        border,
        padding,
        content,
    }
}

/// Resolve one ring's four edges. `per_edge` is in top/right/bottom/left
/// order; `axis` pairs are (vertical, horizontal).
fn resolve_ring(
    style: Option<&StyleMap>,
    per_edge: [&str; 4],
    axis: Option<(&str, &str)>,
    universal: &str,
) -> EdgeSizes {
    let (vertical, horizontal) = match axis {
        Some((v, h)) => (Some(v), Some(h)),
        None => (None, None),
    };
    EdgeSizes {
        top: resolve_edge(style, per_edge[0], vertical, universal),
        right: resolve_edge(style, per_edge[1], horizontal, universal),
        bottom: resolve_edge(style, per_edge[2], vertical, universal),
        left: resolve_edge(style, per_edge[3], horizontal, universal),
    }
}

/// First present numeric value wins; anything else is 0.
fn resolve_edge(
    style: Option<&StyleMap>,
    per_edge: &str,
    axis: Option<&str>,
    universal: &str,
) -> f64 {
    let Some(style) = style else {
        return 0.0;
    };
    style
        .number(per_edge)
        .or_else(|| axis.and_then(|key| style.number(key)))
        .or_else(|| style.number(universal))
        .unwrap_or(0.0)
}
