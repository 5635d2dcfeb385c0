//! Serialization and deserialization for project files.
//!
//! Implements save/load for SolarKit project documents: a single JSON
//! file holding the complete aggregate plus the placement
//! configuration, with camelCase field names.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use solarkit_core::units::MeasurementSystem;

use crate::model::{CombinerBox, Panel, PanelString};
use crate::state::LayoutState;

fn default_spacing() -> f64 {
    0.5
}

/// Complete project file structure. Serialized verbatim from the
/// aggregate; no defensive validation beyond what deserialization
/// itself needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub name: String,
    pub measurement_system: MeasurementSystem,
    pub panels: Vec<Panel>,
    pub combiner_boxes: Vec<CombinerBox>,
    pub strings: Vec<PanelString>,
    pub next_panel_number: u32,
    pub next_combiner_box_number: u32,
    #[serde(default)]
    pub panel_width: f64,
    #[serde(default)]
    pub panel_length: f64,
    #[serde(default = "default_spacing")]
    pub panel_spacing: f64,
    #[serde(default = "default_spacing")]
    pub row_spacing: f64,
}

impl ProjectFile {
    /// Snapshots the current aggregate into the persisted shape.
    pub fn from_state(state: &LayoutState) -> Self {
        Self {
            name: state.name.clone(),
            measurement_system: state.measurement_system,
            panels: state.panels().to_vec(),
            combiner_boxes: state.combiner_boxes().to_vec(),
            strings: state.strings().to_vec(),
            next_panel_number: state.next_panel_number(),
            next_combiner_box_number: state.next_combiner_box_number(),
            panel_width: state.panel_width(),
            panel_length: state.panel_length(),
            panel_spacing: state.panel_spacing(),
            row_spacing: state.row_spacing(),
        }
    }

    /// Rebuilds the aggregate from a parsed document.
    pub fn into_state(self) -> LayoutState {
        LayoutState::from_parts(
            self.name,
            self.measurement_system,
            self.panels,
            self.combiner_boxes,
            self.strings,
            self.next_panel_number,
            self.next_combiner_box_number,
            self.panel_width,
            self.panel_length,
            self.panel_spacing,
            self.row_spacing,
        )
    }

    /// Save project to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize project")?;

        std::fs::write(path.as_ref(), json).context("Failed to write project file")?;

        Ok(())
    }

    /// Load project from file. Parses the complete document before
    /// returning, so a malformed file never yields a partial project.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read project file")?;

        let project: ProjectFile =
            serde_json::from_str(&content).context("Failed to parse project file")?;

        Ok(project)
    }

    /// Suggested download name: the project name lower-cased with every
    /// non-alphanumeric character replaced by a hyphen, plus the
    /// ISO date.
    pub fn suggested_file_name(name: &str) -> String {
        let sanitized: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        format!("{}-{}.json", sanitized, chrono::Utc::now().format("%Y-%m-%d"))
    }
}
