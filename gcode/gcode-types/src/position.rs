//! Machine position tracking.

use crate::{Axis, Command};

/// The last known absolute value per axis during a scan.
///
/// Each axis starts undefined and becomes known the first time a command
/// states a value for it. Applying a command updates only the axes it
/// mentions; the rest retain their previous value.
///
/// # Example
///
/// ```
/// use gcode_types::{Axis, Command, MachinePosition};
///
/// let mut pos = MachinePosition::new();
/// assert!(!pos.is_fully_known());
///
/// pos.apply(&Command::new("G1").with_param('X', 3.0).with_param('Z', 0.2));
/// assert_eq!(pos.get(Axis::X), Some(3.0));
/// assert_eq!(pos.get(Axis::Y), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MachinePosition {
    axes: [Option<f64>; 3],
}

impl MachinePosition {
    /// Creates a position with all axes undefined.
    #[must_use]
    pub const fn new() -> Self {
        Self { axes: [None; 3] }
    }

    /// The last known value on an axis, if any.
    #[must_use]
    pub const fn get(&self, axis: Axis) -> Option<f64> {
        self.axes[axis.index()]
    }

    /// Sets the value for an axis.
    pub fn set(&mut self, axis: Axis, value: f64) {
        self.axes[axis.index()] = Some(value);
    }

    /// Returns `true` once every axis has been observed at least once.
    #[must_use]
    pub const fn is_fully_known(&self) -> bool {
        self.axes[0].is_some() && self.axes[1].is_some() && self.axes[2].is_some()
    }

    /// Updates the position from a command's positional parameters.
    ///
    /// Axes absent from the command keep their previous value.
    pub fn apply(&mut self, command: &Command) {
        for axis in Axis::ALL {
            if let Some(value) = command.params.axis(axis) {
                self.set(axis, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_undefined() {
        let pos = MachinePosition::new();
        for axis in Axis::ALL {
            assert_eq!(pos.get(axis), None);
        }
        assert!(!pos.is_fully_known());
    }

    #[test]
    fn test_apply_retains_absent_axes() {
        let mut pos = MachinePosition::new();
        pos.apply(&Command::linear_move(1.0, 2.0, 3.0));
        pos.apply(&Command::new("G1").with_param('Y', 5.0));
        assert_eq!(pos.get(Axis::X), Some(1.0));
        assert_eq!(pos.get(Axis::Y), Some(5.0));
        assert_eq!(pos.get(Axis::Z), Some(3.0));
    }

    #[test]
    fn test_fully_known_after_all_axes_seen() {
        let mut pos = MachinePosition::new();
        pos.apply(&Command::new("G1").with_param('X', 0.0));
        pos.apply(&Command::new("G1").with_param('Y', 0.0));
        assert!(!pos.is_fully_known());
        pos.apply(&Command::new("G1").with_param('Z', 0.0));
        assert!(pos.is_fully_known());
    }

    #[test]
    fn test_zero_counts_as_known() {
        // A stated value of 0.0 defines the axis just like any other value.
        let mut pos = MachinePosition::new();
        pos.apply(&Command::linear_move(0.0, 0.0, 0.0));
        assert!(pos.is_fully_known());
    }
}
