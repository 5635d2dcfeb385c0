//! Series strings: ordered chains of panels wired into one combiner box.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ordered series chain of panels. The first panel is the positive
/// end of the string, the last is the negative end. Immutable after
/// creation except for removal; the wire path is derived at render
/// time, never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelString {
    pub id: Uuid,
    /// Display sequence number, monotonic per layout, never reused.
    #[serde(default)]
    pub number: u32,
    /// Panel identifiers in series order; always at least two.
    pub panels: Vec<Uuid>,
    pub combiner_box_id: Uuid,
}

impl PanelString {
    /// Identifier of the panel at the string's positive end.
    pub fn positive_end(&self) -> Option<Uuid> {
        self.panels.first().copied()
    }

    /// Identifier of the panel at the string's negative end.
    pub fn negative_end(&self) -> Option<Uuid> {
        self.panels.last().copied()
    }
}
