//! Dense numeric sequence export of toolpaths for model training.
//!
//! Sequence models consume toolpaths as fixed-width numeric records,
//! not as structured commands. This crate renders a command sequence
//! into that form and carves long sequences into training windows:
//!
//! - [`MoveRecord`] / [`sequence_records`] - One `[X, Y, Z,
//!   has_extrusion]` record per command, dense and fixed-order
//! - [`WindowParams`] / [`sample_windows`] - Reproducible random-length
//!   input/target windows over a record sequence
//!
//! # Example
//!
//! ```
//! use gcode_parse::parse_str;
//! use ml_sequence::{sample_windows, sequence_records, WindowParams};
//!
//! let commands = parse_str("G1 X0 Y0 Z0\nG1 X1 Y0 Z0 E0.4").unwrap();
//! let records = sequence_records(&commands);
//! assert_eq!(records[1].to_array(), [1.0, 0.0, 0.0, 0.0]);
//!
//! let params = WindowParams { min_len: 1, max_len: 4 };
//! let windows = sample_windows(&records, &params, Some(42)).unwrap();
//! for window in &windows {
//!     let _inputs = &records[window.inputs.clone()];
//!     let _target = records[window.target];
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod record;
mod window;

pub use error::{SequenceError, SequenceResult};
pub use record::{sequence_records, MoveRecord};
pub use window::{sample_windows, Window, WindowParams};
