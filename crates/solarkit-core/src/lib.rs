//! # SolarKit Core
//!
//! Core types, units, and error handling for SolarKit.
//! Provides the fundamental abstractions shared by the layout engine:
//! measurement systems, the grid's dimensional constants, and the
//! domain error type used by every validated operation.

pub mod constants;
pub mod error;
pub mod units;

pub use error::{LayoutError, Result};
pub use units::{format_length, parse_length, unit_label, MeasurementSystem};
