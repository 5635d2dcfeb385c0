//! Panels and their rotation-aware polarity model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Rect;

/// Which way a panel's raw width/length map onto the grid.
/// Landscape swaps the rendered width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Self::Portrait => Self::Landscape,
            Self::Landscape => Self::Portrait,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Portrait
    }
}

/// Panel rotation in 90-degree steps. Persisted as the plain degree
/// value (0, 90, 180, 270).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Rotation angle in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// Number of clockwise quarter turns from zero.
    pub fn steps(self) -> u8 {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }

    /// Advances by the given number of clockwise quarter turns.
    pub fn plus_steps(self, steps: u8) -> Self {
        match (self.steps() + steps) % 4 {
            0 => Self::R0,
            1 => Self::R90,
            2 => Self::R180,
            _ => Self::R270,
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::R0
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> u16 {
        r.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::R0),
            90 => Ok(Self::R90),
            180 => Ok(Self::R180),
            270 => Ok(Self::R270),
            other => Err(format!("Invalid rotation: {}", other)),
        }
    }
}

/// One of a panel's four sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

/// Fixed cyclic order of sides under clockwise quarter turns.
const SIDE_ORDER: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

impl Side {
    /// Maps this side through the given number of clockwise quarter
    /// turns. Single source of truth for every rotation-dependent
    /// computation (footprint swap, polarity remap, anchor lookup).
    pub fn rotated(self, steps: u8) -> Side {
        let idx = SIDE_ORDER.iter().position(|s| *s == self).unwrap_or(0);
        SIDE_ORDER[(idx + steps as usize) % 4]
    }

    /// True for left/right, the sides whose anchors vary along the
    /// x-axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

/// Which sides carry the positive and negative terminals. The two
/// sides are always distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polarity {
    pub positive: Side,
    pub negative: Side,
}

impl Polarity {
    /// Maps both terminals through the cyclic side transform.
    pub fn rotated(self, steps: u8) -> Self {
        Self {
            positive: self.positive.rotated(steps),
            negative: self.negative.rotated(steps),
        }
    }
}

impl Default for Polarity {
    fn default() -> Self {
        Self {
            positive: Side::Left,
            negative: Side::Right,
        }
    }
}

/// A placed solar panel.
///
/// `width` and `length` are the raw dimensions as entered; the
/// orientation decides how they map onto the grid. Position is the
/// top-left corner in inches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    pub id: Uuid,
    /// Display sequence number, monotonic per layout, never reused.
    pub number: u32,
    pub x: f64,
    pub y: f64,
    pub orientation: Orientation,
    #[serde(default)]
    pub rotation: Rotation,
    pub width: f64,
    pub length: f64,
    #[serde(default)]
    pub polarity: Polarity,
}

impl Panel {
    /// Rendered width and height: landscape swaps the raw dimensions.
    pub fn rendered_size(&self) -> (f64, f64) {
        match self.orientation {
            Orientation::Portrait => (self.width, self.length),
            Orientation::Landscape => (self.length, self.width),
        }
    }

    /// The orientation-adjusted rectangle this panel occupies.
    pub fn footprint(&self) -> Rect {
        let (w, h) = self.rendered_size();
        Rect::new(self.x, self.y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_cycle() {
        assert_eq!(Side::Left.rotated(1), Side::Top);
        assert_eq!(Side::Top.rotated(1), Side::Right);
        assert_eq!(Side::Right.rotated(1), Side::Bottom);
        assert_eq!(Side::Bottom.rotated(1), Side::Left);
        // Four quarter turns are the identity
        for side in [Side::Left, Side::Top, Side::Right, Side::Bottom] {
            assert_eq!(side.rotated(4), side);
        }
    }

    #[test]
    fn test_rotation_steps() {
        assert_eq!(Rotation::R0.plus_steps(1), Rotation::R90);
        assert_eq!(Rotation::R270.plus_steps(1), Rotation::R0);
        assert_eq!(Rotation::R90.plus_steps(3), Rotation::R0);
        assert_eq!(Rotation::R90.plus_steps(2), Rotation::R270);
    }

    #[test]
    fn test_rotation_serde_as_degrees() {
        let json = serde_json::to_string(&Rotation::R270).unwrap();
        assert_eq!(json, "270");
        let back: Rotation = serde_json::from_str("90").unwrap();
        assert_eq!(back, Rotation::R90);
        assert!(serde_json::from_str::<Rotation>("45").is_err());
    }

    #[test]
    fn test_polarity_rotated_keeps_pair_disjoint() {
        let p = Polarity::default();
        for steps in 0..4 {
            let r = p.rotated(steps);
            assert_ne!(r.positive, r.negative);
        }
    }

    #[test]
    fn test_landscape_swaps_footprint() {
        let panel = Panel {
            id: Uuid::new_v4(),
            number: 1,
            x: 0.0,
            y: 0.0,
            orientation: Orientation::Landscape,
            rotation: Rotation::R0,
            width: 40.0,
            length: 62.0,
            polarity: Polarity::default(),
        };
        let fp = panel.footprint();
        assert_eq!(fp.width, 62.0);
        assert_eq!(fp.height, 40.0);
    }
}
