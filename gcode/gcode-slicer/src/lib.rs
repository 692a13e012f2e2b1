//! External mesh-to-G-code converter boundary.
//!
//! The transformation core operates on parsed toolpaths; this crate
//! owns the one piece of outside-world glue it needs: turning a 3D mesh
//! file into toolpath text via an external slicing tool.
//!
//! - [`MeshConverter`] - The capability trait the core consumes;
//!   injectable and easily mocked in tests
//! - [`Slic3rConverter`] - The real implementation, shelling out to the
//!   `slic3r` binary in a temporary working directory
//!
//! # Contract
//!
//! Given a mesh path, a converter yields zero or more independently
//! parsed [`GcodeProgram`]s, one per connected piece of the mesh. A
//! non-zero exit from the external tool is fatal for that invocation:
//! no retry, no partial results.
//!
//! # Example
//!
//! ```no_run
//! use gcode_slicer::{MeshConverter, Slic3rConverter};
//! use gcode_transform::ScalingPolicy;
//!
//! let converter = Slic3rConverter::new();
//! for program in converter.convert("skull.stl".as_ref()).unwrap() {
//!     let relative = program.normalized(ScalingPolicy::KeepAspect)?.to_relative();
//!     println!("{} relative moves", relative.len());
//! }
//! # Ok::<(), gcode_transform::TransformError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod converter;
mod error;
mod slic3r;

pub use converter::MeshConverter;
pub use error::{SlicerError, SlicerResult};
pub use slic3r::Slic3rConverter;

// Re-export the program type converters produce
pub use gcode_transform::GcodeProgram;
