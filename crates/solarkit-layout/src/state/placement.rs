//! Validated placement and deletion of panels and combiner boxes.

use tracing::debug;
use uuid::Uuid;

use solarkit_core::{LayoutError, Result};

use super::LayoutState;
use crate::collision::{overlaps, within_grid};
use crate::model::{CombinerBox, Panel, Point, Polarity, Rect, Rotation, Side};
use crate::snapping::PlacementKind;

impl LayoutState {
    /// Places an entity of the given kind at a snapped coordinate.
    /// Dispatches to the typed placement operations.
    pub fn try_place(&mut self, kind: PlacementKind, position: Point) -> Result<Uuid> {
        match kind {
            PlacementKind::Panel => self.try_place_panel(position),
            PlacementKind::CombinerBox => self.try_place_combiner_box(position),
        }
    }

    /// Places a panel with the active dimensions and orientation at the
    /// given top-left position.
    ///
    /// Bounds- and collision-checked against every existing panel and
    /// combiner box; on rejection nothing changes. The new panel starts
    /// at rotation 0 with positive terminal on the left, or rotated 180
    /// with the pair swapped when a pre-commit flip is pending.
    pub fn try_place_panel(&mut self, position: Point) -> Result<Uuid> {
        if self.panel_width <= 0.0 || self.panel_length <= 0.0 {
            return Err(LayoutError::EmptyDimensions {
                width: self.panel_width,
                length: self.panel_length,
            });
        }

        let (w, h) = self.placement_footprint(PlacementKind::Panel);
        let footprint = Rect::new(position.x, position.y, w, h);
        self.validate_footprint(&footprint, None)?;

        let (rotation, polarity) = if self.pending_flip {
            (
                Rotation::R180,
                Polarity {
                    positive: Side::Right,
                    negative: Side::Left,
                },
            )
        } else {
            (Rotation::R0, Polarity::default())
        };

        let id = Uuid::new_v4();
        let number = self.next_panel_number;
        self.panels.push(Panel {
            id,
            number,
            x: position.x,
            y: position.y,
            orientation: self.orientation,
            rotation,
            width: self.panel_width,
            length: self.panel_length,
            polarity,
        });
        self.next_panel_number += 1;
        debug!(panel = number, x = position.x, y = position.y, "placed panel");
        Ok(id)
    }

    /// Places a combiner box at the given top-left position.
    pub fn try_place_combiner_box(&mut self, position: Point) -> Result<Uuid> {
        let (w, h) = self.placement_footprint(PlacementKind::CombinerBox);
        let footprint = Rect::new(position.x, position.y, w, h);
        self.validate_footprint(&footprint, None)?;

        let id = Uuid::new_v4();
        let number = self.next_combiner_box_number;
        self.combiner_boxes
            .push(CombinerBox::new(id, number, position.x, position.y));
        self.next_combiner_box_number += 1;
        debug!(combiner_box = number, x = position.x, y = position.y, "placed combiner box");
        Ok(id)
    }

    /// Advisory preview check: would the given kind collide or leave
    /// the grid if committed at this position? Never blocks pointer
    /// movement; the authoritative check runs again at commit.
    pub fn placement_blocked(&self, kind: PlacementKind, position: Point) -> bool {
        let (w, h) = self.placement_footprint(kind);
        let footprint = Rect::new(position.x, position.y, w, h);
        self.validate_footprint(&footprint, None).is_err()
    }

    /// Removes a panel. Strings that reference it are left in place;
    /// their wire computation recovers by omission.
    pub fn remove_panel(&mut self, id: Uuid) -> Result<()> {
        let len = self.panels.len();
        self.panels.retain(|p| p.id != id);
        if self.panels.len() == len {
            return Err(LayoutError::PanelNotFound { id });
        }
        debug!(%id, "removed panel");
        Ok(())
    }

    /// Removes a combiner box. Strings that reference it are left in
    /// place; their wire computation recovers by omission.
    pub fn remove_combiner_box(&mut self, id: Uuid) -> Result<()> {
        let len = self.combiner_boxes.len();
        self.combiner_boxes.retain(|b| b.id != id);
        if self.combiner_boxes.len() == len {
            return Err(LayoutError::CombinerBoxNotFound { id });
        }
        debug!(%id, "removed combiner box");
        Ok(())
    }

    /// Shared bounds + collision validation. `skip_panel` exempts the
    /// panel being transformed from colliding with itself.
    pub(crate) fn validate_footprint(
        &self,
        footprint: &Rect,
        skip_panel: Option<Uuid>,
    ) -> Result<()> {
        if !within_grid(footprint) {
            return Err(LayoutError::OutOfBounds {
                x: footprint.x,
                y: footprint.y,
            });
        }
        if self
            .panels
            .iter()
            .filter(|p| Some(p.id) != skip_panel)
            .any(|p| overlaps(footprint, &p.footprint()))
        {
            return Err(LayoutError::Collision { kind: "panel" });
        }
        if self
            .combiner_boxes
            .iter()
            .any(|b| overlaps(footprint, &b.footprint()))
        {
            return Err(LayoutError::Collision {
                kind: "combiner box",
            });
        }
        Ok(())
    }
}
