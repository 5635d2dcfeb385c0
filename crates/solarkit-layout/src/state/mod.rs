//! Layout state: the one owned aggregate of panels, combiner boxes,
//! and strings.
//!
//! The aggregate is passed by reference into otherwise-pure validation
//! and query functions; there is no ambient singleton. Every mutating
//! operation validates against the current state and either commits a
//! full new state or rejects with a reason and zero partial mutation.
//!
//! This module is split into submodules for better organization:
//! - `placement`: Validated panel and combiner box placement, deletion
//! - `transform`: Atomic rotate and flip operations
//! - `strings`: String creation and removal
//! - `file_io`: Save/load against the project file format

mod file_io;
mod placement;
mod strings;
mod transform;

use uuid::Uuid;

use solarkit_core::constants::COMBINER_BOX_SIZE_IN;
use solarkit_core::units::{self, MeasurementSystem};
use solarkit_core::{LayoutError, Result};

use crate::model::{CombinerBox, Orientation, Panel, PanelString, Point};
use crate::snapping::{snap_position, PlacementKind};
use crate::viewport::GridViewport;
use crate::wiring::{self, WireLengths};

pub use transform::RotateDirection;

/// Default inter-panel and inter-row gap, in inches.
const DEFAULT_SPACING_IN: f64 = 0.5;

/// The complete layout aggregate plus the active placement
/// configuration (panel dimensions, orientation, spacing, pending
/// polarity flip).
#[derive(Debug, Clone)]
pub struct LayoutState {
    pub name: String,
    pub measurement_system: MeasurementSystem,
    pub(crate) panels: Vec<Panel>,
    pub(crate) combiner_boxes: Vec<CombinerBox>,
    pub(crate) strings: Vec<PanelString>,
    pub(crate) next_panel_number: u32,
    pub(crate) next_combiner_box_number: u32,
    pub(crate) next_string_number: u32,
    /// Active panel dimensions for placement, in inches.
    pub(crate) panel_width: f64,
    pub(crate) panel_length: f64,
    /// Inter-panel gap used by wire length calculation, in inches.
    pub(crate) panel_spacing: f64,
    /// Inter-row gap used by wire length calculation, in inches.
    pub(crate) row_spacing: f64,
    /// Orientation applied to the next placed panel.
    pub(crate) orientation: Orientation,
    /// When set, the next placed panel starts flipped (rotation 180,
    /// positive terminal on the right).
    pub(crate) pending_flip: bool,
}

impl LayoutState {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self {
            name: "Untitled".to_string(),
            measurement_system: MeasurementSystem::default(),
            panels: Vec::new(),
            combiner_boxes: Vec::new(),
            strings: Vec::new(),
            next_panel_number: 1,
            next_combiner_box_number: 1,
            next_string_number: 1,
            panel_width: 0.0,
            panel_length: 0.0,
            panel_spacing: DEFAULT_SPACING_IN,
            row_spacing: DEFAULT_SPACING_IN,
            orientation: Orientation::Portrait,
            pending_flip: false,
        }
    }

    /// Rebuilds an aggregate from persisted parts. String numbering
    /// resumes past the highest number found.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        name: String,
        measurement_system: MeasurementSystem,
        panels: Vec<Panel>,
        combiner_boxes: Vec<CombinerBox>,
        strings: Vec<PanelString>,
        next_panel_number: u32,
        next_combiner_box_number: u32,
        panel_width: f64,
        panel_length: f64,
        panel_spacing: f64,
        row_spacing: f64,
    ) -> Self {
        let next_string_number = strings.iter().map(|s| s.number).max().unwrap_or(0) + 1;
        Self {
            name,
            measurement_system,
            panels,
            combiner_boxes,
            strings,
            next_panel_number,
            next_combiner_box_number,
            next_string_number,
            panel_width,
            panel_length,
            panel_spacing,
            row_spacing,
            orientation: Orientation::Portrait,
            pending_flip: false,
        }
    }

    /// Clears everything back to an empty layout.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // --- Queries -------------------------------------------------------

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn combiner_boxes(&self) -> &[CombinerBox] {
        &self.combiner_boxes
    }

    pub fn strings(&self) -> &[PanelString] {
        &self.strings
    }

    /// Looks up a panel by id.
    pub fn panel(&self, id: Uuid) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// Looks up a combiner box by id.
    pub fn combiner_box(&self, id: Uuid) -> Option<&CombinerBox> {
        self.combiner_boxes.iter().find(|b| b.id == id)
    }

    /// Looks up a string by id.
    pub fn string(&self, id: Uuid) -> Option<&PanelString> {
        self.strings.iter().find(|s| s.id == id)
    }

    /// Next panel display number to be assigned.
    pub fn next_panel_number(&self) -> u32 {
        self.next_panel_number
    }

    /// Next combiner box display number to be assigned.
    pub fn next_combiner_box_number(&self) -> u32 {
        self.next_combiner_box_number
    }

    pub fn panel_width(&self) -> f64 {
        self.panel_width
    }

    pub fn panel_length(&self) -> f64 {
        self.panel_length
    }

    pub fn panel_spacing(&self) -> f64 {
        self.panel_spacing
    }

    pub fn row_spacing(&self) -> f64 {
        self.row_spacing
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn pending_flip(&self) -> bool {
        self.pending_flip
    }

    // --- Placement configuration --------------------------------------

    /// Sets the dimensions of panels placed from now on. Values are in
    /// the given measurement system and stored internally in inches.
    pub fn set_panel_dimensions(
        &mut self,
        width: f64,
        length: f64,
        system: MeasurementSystem,
    ) -> Result<()> {
        let width_in = units::to_inches(width, system);
        let length_in = units::to_inches(length, system);
        if width_in <= 0.0 || length_in <= 0.0 {
            return Err(LayoutError::EmptyDimensions {
                width: width_in,
                length: length_in,
            });
        }
        self.panel_width = width_in;
        self.panel_length = length_in;
        Ok(())
    }

    /// Sets the inter-panel and inter-row gaps, in inches. Negative
    /// values clamp to zero.
    pub fn set_spacing(&mut self, panel_spacing: f64, row_spacing: f64) {
        self.panel_spacing = panel_spacing.max(0.0);
        self.row_spacing = row_spacing.max(0.0);
    }

    /// Sets the orientation applied to the next placed panel.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Toggles the polarity flip applied to the next placed panel.
    pub fn toggle_pending_flip(&mut self) {
        self.pending_flip = !self.pending_flip;
    }

    pub fn set_measurement_system(&mut self, system: MeasurementSystem) {
        self.measurement_system = system;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // --- Snapping ------------------------------------------------------

    /// Snaps a pointer position to a valid placement coordinate for the
    /// given kind, or `None` if no valid coordinate exists there.
    pub fn snap(
        &self,
        pointer_px: (f64, f64),
        kind: PlacementKind,
        viewport: &GridViewport,
    ) -> Option<Point> {
        snap_position(pointer_px, kind, viewport, &self.panels, self.placement_footprint(kind))
    }

    /// Nominal footprint of the entity the given kind would place.
    pub(crate) fn placement_footprint(&self, kind: PlacementKind) -> (f64, f64) {
        match kind {
            PlacementKind::CombinerBox => (COMBINER_BOX_SIZE_IN, COMBINER_BOX_SIZE_IN),
            PlacementKind::Panel => match self.orientation {
                Orientation::Portrait => (self.panel_width, self.panel_length),
                Orientation::Landscape => (self.panel_length, self.panel_width),
            },
        }
    }

    // --- Wire calculation ---------------------------------------------

    /// Wire lengths for one string, or `None` when the string (or an
    /// entity it references) no longer exists.
    pub fn compute_wire_lengths(&self, string_id: Uuid) -> Option<WireLengths> {
        wiring::wire_lengths(self, string_id)
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}
