//! Axis-aligned collision detection with edge-adjacency tolerance.

use solarkit_core::constants::{EDGE_EPSILON_IN, GRID_EXTENT_IN};

use crate::model::Rect;

/// Tests whether two orientation-adjusted rectangles overlap.
///
/// The epsilon tolerates floating-point edge-to-edge placement: two
/// rectangles sharing an edge do not collide. Used both for live
/// placement preview (advisory) and at commit time (authoritative).
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    !(a.right() <= b.left() + EDGE_EPSILON_IN
        || a.left() >= b.right() - EDGE_EPSILON_IN
        || a.bottom() <= b.top() + EDGE_EPSILON_IN
        || a.top() >= b.bottom() - EDGE_EPSILON_IN)
}

/// Tests whether a rectangle lies entirely within the grid.
pub fn within_grid(r: &Rect) -> bool {
    r.left() >= 0.0 && r.top() >= 0.0 && r.right() <= GRID_EXTENT_IN && r.bottom() <= GRID_EXTENT_IN
}
