//! The mesh-to-toolpath capability interface.

use std::path::Path;

use gcode_transform::GcodeProgram;

use crate::error::SlicerResult;

/// Converts a 3D mesh file into zero or more toolpath programs.
///
/// This is the boundary the core consumes: implementations may shell out
/// to a real slicer ([`crate::Slic3rConverter`]) or return canned
/// programs in tests. Each returned program is independently parsed from
/// one produced toolpath file.
pub trait MeshConverter {
    /// Convert the mesh at `mesh_path` into toolpath programs.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::SlicerError`] if the conversion tool fails,
    /// its output is missing, or a produced file fails to parse.
    fn convert(&self, mesh_path: &Path) -> SlicerResult<Vec<GcodeProgram>>;
}
