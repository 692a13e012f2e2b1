//! Error types for toolpath transformations.

use gcode_types::Axis;
use thiserror::Error;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors that can occur while transforming a command sequence.
#[derive(Debug, Error)]
pub enum TransformError {
    /// An axis has no positional data at all; its extent is unset.
    #[error("no linear-move data on axis {axis}; extent is unset")]
    UnsetExtent {
        /// The axis with no observed values.
        axis: Axis,
    },

    /// An axis's extent has zero width; normalization would divide by zero.
    #[error("degenerate extent on axis {axis}: every value equals {value}")]
    DegenerateExtent {
        /// The axis whose extent collapsed to a point.
        axis: Axis,
        /// The single value observed on that axis.
        value: f64,
    },
}
