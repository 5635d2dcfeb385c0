//! Wire routing and length calculation.
//!
//! Wire paths are derived values: recomputed from current panel and
//! box positions on demand, never stored. A string whose panels or
//! combiner box have been deleted is skipped silently; it contributes
//! nothing to totals or rendering.

use std::fmt;

use uuid::Uuid;

use solarkit_core::constants::INCHES_PER_FOOT;

use crate::model::{CombinerBox, Panel, Point, Side};
use crate::state::LayoutState;

/// Wire run lengths for one string, in feet. Full precision is kept
/// internally; the `Display` impl rounds to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireLengths {
    pub positive_feet: f64,
    pub negative_feet: f64,
    pub total_feet: f64,
}

impl fmt::Display for WireLengths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "+{:.2} ft / -{:.2} ft / {:.2} ft total",
            self.positive_feet, self.negative_feet, self.total_feet
        )
    }
}

/// Derived Manhattan polylines for one string's two wire runs.
#[derive(Debug, Clone, PartialEq)]
pub struct StringWirePaths {
    pub string_id: Uuid,
    /// Positive run: first panel's positive terminal to the box.
    pub positive: [Point; 3],
    /// Negative run: last panel's negative terminal to the box.
    pub negative: [Point; 3],
}

/// One row of the wire length report.
#[derive(Debug, Clone, PartialEq)]
pub struct StringWireReport {
    pub string_number: u32,
    pub lengths: WireLengths,
}

/// Terminal anchor point for a panel side, spacing-aware.
///
/// Left/right anchors sit at the vertical midpoint of the edge,
/// top/bottom at the horizontal midpoint. When spacing is active the
/// anchor extends outward by the inter-panel gap (x-axis sides) or
/// inter-row gap (y-axis sides), except at the string's own ends,
/// where no gap physically exists: a left/top anchor on the first
/// panel and a right/bottom anchor on the last panel stay on the edge.
pub fn terminal_anchor(
    panel: &Panel,
    side: Side,
    panel_spacing: f64,
    row_spacing: f64,
    is_first: bool,
    is_last: bool,
) -> Point {
    let fp = panel.footprint();
    let mut anchor = match side {
        Side::Left => Point::new(fp.left(), fp.top() + fp.height / 2.0),
        Side::Right => Point::new(fp.right(), fp.top() + fp.height / 2.0),
        Side::Top => Point::new(fp.left() + fp.width / 2.0, fp.top()),
        Side::Bottom => Point::new(fp.left() + fp.width / 2.0, fp.bottom()),
    };
    match side {
        Side::Left if !is_first => anchor.x -= panel_spacing,
        Side::Top if !is_first => anchor.y -= row_spacing,
        Side::Right if !is_last => anchor.x += panel_spacing,
        Side::Bottom if !is_last => anchor.y += row_spacing,
        _ => {}
    }
    anchor
}

/// Where wires attach to a combiner box: its bottom-center.
pub fn attachment_point(combiner_box: &CombinerBox) -> Point {
    let fp = combiner_box.footprint();
    Point::new(fp.left() + fp.width / 2.0, fp.bottom())
}

/// Single-bend orthogonal path: vertical segment first (toward the
/// box's row), then horizontal (toward its column).
pub fn manhattan_path(from: Point, to: Point) -> [Point; 3] {
    [from, Point::new(from.x, to.y), to]
}

/// Resolved endpoints of one string; `None` when any referenced entity
/// is gone.
struct StringRuns<'a> {
    first: &'a Panel,
    last: &'a Panel,
    combiner_box: &'a CombinerBox,
    single_panel: bool,
}

fn resolve_runs(state: &LayoutState, string_id: Uuid) -> Option<StringRuns<'_>> {
    let string = state.string(string_id)?;
    // Every referenced panel must still exist, not only the endpoints;
    // a broken chain is skipped as a whole.
    let panels: Option<Vec<&Panel>> =
        string.panels.iter().map(|id| state.panel(*id)).collect();
    let panels = panels?;
    let first = *panels.first()?;
    let last = *panels.last()?;
    let combiner_box = state.combiner_box(string.combiner_box_id)?;
    Some(StringRuns {
        first,
        last,
        combiner_box,
        single_panel: panels.len() == 1,
    })
}

/// Computes both run lengths for a string, in feet.
///
/// Returns `None` when the string, one of its panels, or its combiner
/// box no longer exists: the silent local recovery for entities
/// deleted after string creation.
pub fn wire_lengths(state: &LayoutState, string_id: Uuid) -> Option<WireLengths> {
    let runs = resolve_runs(state, string_id)?;
    let attach = attachment_point(runs.combiner_box);

    let positive = terminal_anchor(
        runs.first,
        runs.first.polarity.positive,
        state.panel_spacing(),
        state.row_spacing(),
        true,
        runs.single_panel,
    );
    let negative = terminal_anchor(
        runs.last,
        runs.last.polarity.negative,
        state.panel_spacing(),
        state.row_spacing(),
        runs.single_panel,
        true,
    );

    let positive_feet = positive.manhattan_distance(&attach) / INCHES_PER_FOOT;
    let negative_feet = negative.manhattan_distance(&attach) / INCHES_PER_FOOT;
    Some(WireLengths {
        positive_feet,
        negative_feet,
        total_feet: positive_feet + negative_feet,
    })
}

/// Derives the renderable Manhattan polylines for a string's two runs,
/// with the same omission rule as [`wire_lengths`].
pub fn wire_paths(state: &LayoutState, string_id: Uuid) -> Option<StringWirePaths> {
    let runs = resolve_runs(state, string_id)?;
    let attach = attachment_point(runs.combiner_box);

    let positive = terminal_anchor(
        runs.first,
        runs.first.polarity.positive,
        state.panel_spacing(),
        state.row_spacing(),
        true,
        runs.single_panel,
    );
    let negative = terminal_anchor(
        runs.last,
        runs.last.polarity.negative,
        state.panel_spacing(),
        state.row_spacing(),
        runs.single_panel,
        true,
    );

    Some(StringWirePaths {
        string_id,
        positive: manhattan_path(positive, attach),
        negative: manhattan_path(negative, attach),
    })
}

/// Per-string wire length rows for every intact string, in creation
/// order. Broken strings are skipped silently.
pub fn wire_report(state: &LayoutState) -> Vec<StringWireReport> {
    state
        .strings()
        .iter()
        .filter_map(|s| {
            wire_lengths(state, s.id).map(|lengths| StringWireReport {
                string_number: s.number,
                lengths,
            })
        })
        .collect()
}
