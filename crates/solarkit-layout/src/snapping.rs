//! Pointer snapping for placement mode.
//!
//! Maps a continuous pointer position into a valid discrete placement
//! coordinate. Pure and idempotent: invoked on every pointer move with
//! no side effects, so identical inputs always produce identical
//! output.

use solarkit_core::constants::{
    COMBINER_SNAP_STEP_IN, EDGE_SNAP_THRESHOLD_IN, FINE_SNAP_STEP_IN, FIRST_PANEL_SNAP_STEP_IN,
    GRID_EXTENT_IN,
};

use crate::collision::within_grid;
use crate::model::{Panel, Point, Rect};
use crate::viewport::GridViewport;

/// What kind of entity is being placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementKind {
    Panel,
    CombinerBox,
}

/// Snaps a pointer position to a placement coordinate.
///
/// Returns `None` when the pointer is outside the grid or the given
/// footprint would not fit at the snapped coordinate.
///
/// Combiner boxes floor to 6-inch increments on both axes. The first
/// panel on an empty grid floors to 12-inch increments. Subsequent
/// panels snap magnetically: per axis, the nearest existing panel edge
/// within 3 inches wins; an axis with no qualifying edge rounds to the
/// nearest 2-inch increment. The two axes resolve independently.
pub fn snap_position(
    pointer_px: (f64, f64),
    kind: PlacementKind,
    viewport: &GridViewport,
    panels: &[Panel],
    footprint: (f64, f64),
) -> Option<Point> {
    let raw = viewport.pixel_to_inches(pointer_px.0, pointer_px.1);
    if raw.x < 0.0 || raw.y < 0.0 || raw.x >= GRID_EXTENT_IN || raw.y >= GRID_EXTENT_IN {
        return None;
    }

    let snapped = match kind {
        PlacementKind::CombinerBox => Point::new(
            floor_to(raw.x, COMBINER_SNAP_STEP_IN),
            floor_to(raw.y, COMBINER_SNAP_STEP_IN),
        ),
        PlacementKind::Panel if panels.is_empty() => Point::new(
            floor_to(raw.x, FIRST_PANEL_SNAP_STEP_IN),
            floor_to(raw.y, FIRST_PANEL_SNAP_STEP_IN),
        ),
        PlacementKind::Panel => Point::new(
            snap_axis(raw.x, panels.iter().flat_map(|p| {
                let fp = p.footprint();
                [fp.left(), fp.right()]
            })),
            snap_axis(raw.y, panels.iter().flat_map(|p| {
                let fp = p.footprint();
                [fp.top(), fp.bottom()]
            })),
        ),
    };

    let target = Rect::new(snapped.x, snapped.y, footprint.0, footprint.1);
    if !within_grid(&target) {
        return None;
    }

    Some(snapped)
}

fn floor_to(value: f64, step: f64) -> f64 {
    (value / step).floor() * step
}

/// Resolves one axis: the closest candidate edge wins if it is inside
/// the magnetic threshold, otherwise the coordinate rounds to the fine
/// grid.
fn snap_axis(raw: f64, edges: impl Iterator<Item = f64>) -> f64 {
    let mut best: Option<(f64, f64)> = None;
    for edge in edges {
        let dist = (raw - edge).abs();
        if best.map_or(true, |(d, _)| dist < d) {
            best = Some((dist, edge));
        }
    }
    match best {
        Some((dist, edge)) if dist < EDGE_SNAP_THRESHOLD_IN => edge,
        _ => (raw / FINE_SNAP_STEP_IN).round() * FINE_SNAP_STEP_IN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Orientation, Polarity, Rotation};
    use uuid::Uuid;

    fn panel_at(x: f64, y: f64, width: f64, length: f64) -> Panel {
        Panel {
            id: Uuid::new_v4(),
            number: 1,
            x,
            y,
            orientation: Orientation::Portrait,
            rotation: Rotation::R0,
            width,
            length,
            polarity: Polarity::default(),
        }
    }

    // 1 px = 1 inch keeps the pointer math readable.
    fn unit_viewport() -> GridViewport {
        GridViewport::new(1.0)
    }

    #[test]
    fn test_combiner_box_floors_to_six() {
        let vp = unit_viewport();
        let p = snap_position((17.0, 23.9), PlacementKind::CombinerBox, &vp, &[], (12.0, 12.0))
            .unwrap();
        assert_eq!(p, Point::new(12.0, 18.0));
        assert_eq!(p.x % 6.0, 0.0);
        assert_eq!(p.y % 6.0, 0.0);
    }

    #[test]
    fn test_first_panel_floors_to_twelve() {
        let vp = unit_viewport();
        let p = snap_position((41.0, 10.0), PlacementKind::Panel, &vp, &[], (40.0, 62.0)).unwrap();
        assert_eq!(p, Point::new(36.0, 0.0));
        assert_eq!(p.x % 12.0, 0.0);
        assert_eq!(p.y % 12.0, 0.0);
    }

    #[test]
    fn test_magnetic_edge_beats_fine_grid() {
        // Panel A 40x62 at the origin; pointer at raw (41, 10) must pull
        // x onto A's right edge at 40, not round to 42.
        let vp = unit_viewport();
        let a = panel_at(0.0, 0.0, 40.0, 62.0);
        let p = snap_position((41.0, 10.0), PlacementKind::Panel, &vp, &[a], (40.0, 62.0)).unwrap();
        assert_eq!(p.x, 40.0);
        // y = 10 is 10 inches from A's top edge: fine grid keeps it at 10
        assert_eq!(p.y, 10.0);
    }

    #[test]
    fn test_fine_grid_fallback() {
        let vp = unit_viewport();
        let a = panel_at(0.0, 0.0, 40.0, 62.0);
        // x = 50.7 is 10.7 from the right edge: falls back to 2-inch rounding
        let p = snap_position((50.7, 31.0), PlacementKind::Panel, &vp, &[a], (40.0, 62.0)).unwrap();
        assert_eq!(p.x, 50.0);
        // y = 31.0 is 31 inches from both edges: fine grid rounds up to 32
        assert_eq!(p.y, 32.0);
    }

    #[test]
    fn test_axes_resolve_independently() {
        let vp = unit_viewport();
        let a = panel_at(0.0, 0.0, 40.0, 62.0);
        // x close to an edge, y far from any edge
        let p = snap_position((39.0, 30.5), PlacementKind::Panel, &vp, &[a], (40.0, 62.0)).unwrap();
        assert_eq!(p.x, 40.0);
        assert_eq!(p.y, 30.0);
    }

    #[test]
    fn test_pointer_outside_grid() {
        let vp = unit_viewport();
        assert!(snap_position((-1.0, 10.0), PlacementKind::Panel, &vp, &[], (40.0, 62.0)).is_none());
        assert!(
            snap_position((10.0, 1300.0), PlacementKind::Panel, &vp, &[], (40.0, 62.0)).is_none()
        );
    }

    #[test]
    fn test_footprint_must_fit() {
        let vp = unit_viewport();
        // Snapped to (1188, 0); a 40-inch wide panel would hang past 1200.
        assert!(
            snap_position((1190.0, 5.0), PlacementKind::Panel, &vp, &[], (40.0, 62.0)).is_none()
        );
        // The 12x12 combiner box still fits there.
        assert!(snap_position((1190.0, 5.0), PlacementKind::CombinerBox, &vp, &[], (12.0, 12.0))
            .is_some());
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let vp = unit_viewport();
        let a = panel_at(0.0, 0.0, 40.0, 62.0);
        let first =
            snap_position((41.0, 10.0), PlacementKind::Panel, &vp, &[a.clone()], (40.0, 62.0));
        let second = snap_position((41.0, 10.0), PlacementKind::Panel, &vp, &[a], (40.0, 62.0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_viewport_scale_applies() {
        // 2 px per inch: pointer (82, 20) is raw (41, 10).
        let vp = GridViewport::new(2.0);
        let a = panel_at(0.0, 0.0, 40.0, 62.0);
        let p = snap_position((82.0, 20.0), PlacementKind::Panel, &vp, &[a], (40.0, 62.0)).unwrap();
        assert_eq!(p.x, 40.0);
    }
}
