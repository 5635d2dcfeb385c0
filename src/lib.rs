//! # SolarKit
//!
//! A Rust-based layout planner for solar arrays:
//! - Panel placement on a discrete grid with magnetic edge snapping
//! - Combiner box siting with collision checking
//! - Series string definition with rotation-aware polarity
//! - Manhattan wire length calculation per string
//!
//! ## Architecture
//!
//! SolarKit is organized as a workspace with multiple crates:
//!
//! 1. **solarkit-core** - Units, constants, error handling
//! 2. **solarkit-layout** - The layout engine: snapping, collision,
//!    placement, stringing, wire routing, project persistence
//! 3. **solarkit** - Main binary that integrates the crates
//!
//! ## Features
//!
//! - **Imperial/Metric entry**: All dimensions converted to inches
//!   internally, with fractional-inch input support
//! - **Magnetic snapping**: Pointer positions pull onto existing panel
//!   edges within a 3-inch threshold, with 2-inch fallback rounding
//! - **Atomic operations**: Place, rotate, flip, and string creation
//!   validate first and commit in full or not at all
//! - **Derived routing**: Wire paths and lengths recomputed from
//!   entity positions, never stored

// Re-export modules for main.rs
pub use solarkit_core::{constants, units};
pub use solarkit_layout as layout;

pub use solarkit_core::{
    format_length, parse_length, unit_label, LayoutError, MeasurementSystem, Result,
};

pub use solarkit_layout::{
    attachment_point, manhattan_path, overlaps, snap_position, terminal_anchor, wire_lengths,
    wire_paths, wire_report, within_grid, CombinerBox, GridViewport, LayoutState, Orientation,
    Panel, PanelString, PlacementKind, Point, Polarity, ProjectFile, Rect, RotateDirection,
    Rotation, Side, StringWirePaths, StringWireReport, WireLengths,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
