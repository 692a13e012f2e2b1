//! Geometric transformations over parsed G-code toolpaths.
//!
//! This crate provides the transformation chain between parsing and
//! downstream consumers (visualization, numeric export):
//!
//! - [`move_bounds`] - Axis-aligned bounding extent of all linear moves
//! - [`normalize_moves`] / [`ScalingPolicy`] - Rescale positional
//!   parameters into a canonical range
//! - [`relative_moves`] - Rewrite absolute moves as position deltas
//! - [`GcodeProgram`] - The pipeline handle tying it together
//!
//! # Immutability
//!
//! Every transformation is a pure function from a command sequence to a
//! brand-new command sequence; nothing mutates its input. On
//! [`GcodeProgram`] each step returns a new instance, so chains and
//! concurrent pipelines derived from the same origin share no mutable
//! state.
//!
//! # Example
//!
//! ```
//! use gcode_transform::{GcodeProgram, ScalingPolicy};
//!
//! let program = GcodeProgram::parse_str(
//!     "G1 X0 Y0 Z0\nG1 X10 Y20 Z5 E0.4\nG1 X5 Y5 Z1",
//! ).unwrap();
//!
//! let relative = program
//!     .normalized(ScalingPolicy::default()).unwrap()
//!     .to_relative();
//!
//! assert!(relative.commands().iter().all(|c| c.is_linear_move()));
//! ```
//!
//! # Errors
//!
//! Normalization requires a usable extent on every axis; unset or
//! zero-width extents surface as [`TransformError`] variants rather than
//! NaN or infinite coordinates.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod error;
mod normalize;
mod program;
mod relative;

pub use bounds::move_bounds;
pub use error::{TransformError, TransformResult};
pub use normalize::{normalize_moves, ScalingPolicy};
pub use program::GcodeProgram;
pub use relative::relative_moves;
