//! Combiner boxes: fixed-footprint nodes terminating strings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use solarkit_core::constants::COMBINER_BOX_SIZE_IN;

use super::Rect;

/// A placed combiner box with a fixed 12x12 inch footprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinerBox {
    pub id: Uuid,
    /// Display sequence number, monotonic per layout, never reused.
    pub number: u32,
    pub x: f64,
    pub y: f64,
    #[serde(default = "CombinerBox::default_side")]
    pub width: f64,
    #[serde(default = "CombinerBox::default_side")]
    pub height: f64,
}

impl CombinerBox {
    /// Creates a box at the given top-left corner with the standard
    /// footprint.
    pub fn new(id: Uuid, number: u32, x: f64, y: f64) -> Self {
        Self {
            id,
            number,
            x,
            y,
            width: COMBINER_BOX_SIZE_IN,
            height: COMBINER_BOX_SIZE_IN,
        }
    }

    fn default_side() -> f64 {
        COMBINER_BOX_SIZE_IN
    }

    /// The rectangle this box occupies.
    pub fn footprint(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
