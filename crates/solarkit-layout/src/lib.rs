//! # SolarKit Layout
//!
//! This crate provides the layout engine for arranging solar panels on a
//! discrete grid, placing combiner boxes, grouping panels into ordered
//! series strings, and computing the physical wiring length between each
//! string's endpoints and its combiner box.
//!
//! ## Core Components
//!
//! ### Placement
//! - **Snapping**: Pointer-to-grid coordinate mapping with magnetic edge
//!   alignment against existing panels
//! - **Collision**: Axis-aligned overlap tests with edge-adjacency tolerance
//! - **Viewport**: Pixel-to-inch coordinate transformation
//!
//! ### Entities
//! - **Panels**: Rectangular units with rotation-aware polarity terminals
//! - **Combiner boxes**: Fixed-footprint nodes terminating strings
//! - **Strings**: Ordered series chains of panels wired into one box
//!
//! ### Routing
//! - **Wiring**: Terminal anchors, single-bend Manhattan paths, and wire
//!   length calculation in feet
//!
//! ## Architecture
//!
//! The engine operates on one owned aggregate:
//!
//! ```text
//! LayoutState (panels, boxes, strings, placement config)
//!   ├── Snapping (pure pointer -> coordinate mapping)
//!   ├── Collision (validation at preview and commit)
//!   ├── Wiring (derived paths and lengths, never stored)
//!   └── ProjectFile (persisted JSON document)
//! ```
//!
//! Every mutating operation validates against the current aggregate and
//! either commits a full new state or rejects with a reason; no partial
//! mutation is ever observable.

pub mod collision;
pub mod model;
pub mod serialization;
pub mod snapping;
pub mod state;
pub mod viewport;
pub mod wiring;

pub use collision::{overlaps, within_grid};
pub use model::{
    CombinerBox, Orientation, Panel, PanelString, Point, Polarity, Rect, Rotation, Side,
};
pub use serialization::ProjectFile;
pub use snapping::{snap_position, PlacementKind};
pub use state::{LayoutState, RotateDirection};
pub use viewport::GridViewport;
pub use wiring::{
    attachment_point, manhattan_path, terminal_anchor, wire_lengths, wire_paths, wire_report,
    StringWirePaths, StringWireReport, WireLengths,
};
