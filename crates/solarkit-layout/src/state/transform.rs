//! Atomic rotate and flip operations on placed panels.
//!
//! Footprint, orientation, and polarity change together or not at all.
//! Both paths remap terminals through the one cyclic side transform so
//! "which side is which after rotation" has a single source of truth.

use tracing::debug;
use uuid::Uuid;

use solarkit_core::{LayoutError, Result};

use super::LayoutState;
use crate::model::Rect;

/// Direction of a 90-degree rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    /// Counter-clockwise (-90 degrees).
    Left,
    /// Clockwise (+90 degrees).
    Right,
}

impl RotateDirection {
    /// Equivalent number of clockwise quarter turns.
    fn steps(self) -> u8 {
        match self {
            Self::Right => 1,
            Self::Left => 3,
        }
    }
}

impl LayoutState {
    /// Rotates a panel by 90 degrees in the given direction.
    ///
    /// Toggles portrait/landscape (swapping the rendered width and
    /// height) and remaps polarity. Rejected with no mutation if the
    /// rotated footprint would collide with another entity or leave
    /// the grid.
    pub fn try_rotate_panel(&mut self, id: Uuid, direction: RotateDirection) -> Result<()> {
        let idx = self
            .panels
            .iter()
            .position(|p| p.id == id)
            .ok_or(LayoutError::PanelNotFound { id })?;

        let steps = direction.steps();
        let new_orientation = self.panels[idx].orientation.toggled();
        // Candidate footprint after the swap, anchored at the same corner
        let (cur_w, cur_h) = self.panels[idx].rendered_size();
        let candidate = Rect::new(self.panels[idx].x, self.panels[idx].y, cur_h, cur_w);
        self.validate_footprint(&candidate, Some(id))?;

        let panel = &mut self.panels[idx];
        panel.rotation = panel.rotation.plus_steps(steps);
        panel.orientation = new_orientation;
        panel.polarity = panel.polarity.rotated(steps);
        debug!(panel = panel.number, rotation = panel.rotation.degrees(), "rotated panel");
        Ok(())
    }

    /// Flips a panel's polarity: rotation advances by 180 degrees
    /// (footprint unchanged) and the positive/negative designations
    /// swap sides. Always succeeds for an existing panel.
    pub fn try_flip_panel(&mut self, id: Uuid) -> Result<()> {
        let panel = self
            .panels
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(LayoutError::PanelNotFound { id })?;

        panel.rotation = panel.rotation.plus_steps(2);
        panel.polarity = panel.polarity.rotated(2);
        debug!(panel = panel.number, "flipped panel polarity");
        Ok(())
    }
}
