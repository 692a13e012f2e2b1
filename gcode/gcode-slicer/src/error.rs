//! Error types for the external slicer boundary.

use std::path::PathBuf;
use std::process::ExitStatus;

use gcode_parse::ParseError;
use thiserror::Error;

/// Result type for slicer operations.
pub type SlicerResult<T> = Result<T, SlicerError>;

/// Errors that can occur while converting a mesh to toolpaths.
#[derive(Debug, Error)]
pub enum SlicerError {
    /// The external slicer process exited non-zero.
    ///
    /// Fatal for the invocation; there is no retry.
    #[error("slicer exited with {status}")]
    ToolFailed {
        /// The process exit status.
        status: ExitStatus,
    },

    /// The slicer reported success but the expected output file is missing.
    #[error("slicer produced no output at {path}")]
    MissingOutput {
        /// The path that should have been written.
        path: PathBuf,
    },

    /// A produced toolpath file failed to parse.
    #[error("slicer output failed to parse: {0}")]
    Parse(#[from] ParseError),

    /// I/O error while staging files or reading output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
