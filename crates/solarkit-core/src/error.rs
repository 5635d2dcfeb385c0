//! Error handling for SolarKit
//!
//! Every entity-mutating operation validates against the current layout
//! and either commits in full or rejects with one of these variants.
//! Rejections are expected outcomes carried as `Err` values, never
//! panics or control-flow exceptions.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;
use uuid::Uuid;

/// Layout error type
///
/// Represents every reason a placement, transform, or string operation
/// can be rejected. Messages are human-readable and surfaced to the
/// presentation layer verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Footprint would overlap an existing entity
    #[error("Placement would overlap an existing {kind}")]
    Collision {
        /// What the footprint collided with ("panel" or "combiner box").
        kind: &'static str,
    },

    /// Placement or rotation would leave the grid
    #[error("Position ({x:.1}, {y:.1}) would place the footprint outside the grid")]
    OutOfBounds {
        /// X coordinate of the rejected top-left corner, in inches.
        x: f64,
        /// Y coordinate of the rejected top-left corner, in inches.
        y: f64,
    },

    /// Command targeted a panel that does not exist
    #[error("Panel {id} not found")]
    PanelNotFound {
        /// The missing panel's identifier.
        id: Uuid,
    },

    /// Command targeted a combiner box that does not exist
    #[error("Combiner box {id} not found")]
    CombinerBoxNotFound {
        /// The missing box's identifier.
        id: Uuid,
    },

    /// Command targeted a string that does not exist
    #[error("String {id} not found")]
    StringNotFound {
        /// The missing string's identifier.
        id: Uuid,
    },

    /// A string needs at least two panels
    #[error("A string requires at least 2 panels, got {count}")]
    InsufficientPanels {
        /// Number of panels that were supplied.
        count: usize,
    },

    /// A string may not list the same panel twice
    #[error("Panel {id} appears more than once in the string")]
    DuplicatePanel {
        /// The repeated panel's identifier.
        id: Uuid,
    },

    /// Panel dimensions must be positive before placement
    #[error("Panel dimensions must be positive, got {width:.1} x {length:.1}")]
    EmptyDimensions {
        /// Entered width, in inches.
        width: f64,
        /// Entered length, in inches.
        length: f64,
    },
}

/// Result type using LayoutError
pub type Result<T> = std::result::Result<T, LayoutError>;
