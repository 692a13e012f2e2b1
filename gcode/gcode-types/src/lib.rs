//! Core value types for G-code toolpath processing.
//!
//! This crate provides the foundational types shared by the parsing and
//! transformation crates:
//!
//! - [`Command`] - One parsed instruction with letter-keyed parameters
//! - [`Parameters`] - Fixed-slot mapping from parameter letters to values
//! - [`Axis`] - The three spatial axes
//! - [`ExtentBounds`] - Per-axis (min, max) bounding extent with an
//!   explicit "unset" state
//! - [`MachinePosition`] - Last-known per-axis position during a scan
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**:
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up/down, print direction)
//!
//! All coordinate values are `f64` and unit-agnostic; sliced toolpaths
//! conventionally use millimeters.
//!
//! # Example
//!
//! ```
//! use gcode_types::{Axis, Command, ExtentBounds};
//!
//! let cmd = Command::linear_move(10.0, 5.0, 0.2);
//!
//! let mut bounds = ExtentBounds::unset();
//! for axis in Axis::ALL {
//!     if let Some(v) = cmd.params.axis(axis) {
//!         bounds.expand(axis, v);
//!     }
//! }
//! assert_eq!(bounds.min(Axis::X), 10.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod axis;
mod bounds;
mod command;
mod params;
mod position;

pub use axis::Axis;
pub use bounds::ExtentBounds;
pub use command::{Command, LINEAR_MOVE};
pub use params::Parameters;
pub use position::MachinePosition;

// Re-export nalgebra point type used by `ExtentBounds` corners
pub use nalgebra::Point3;
