//! Bounding-extent calculation over command sequences.

use gcode_types::{Axis, Command, ExtentBounds};

/// Compute the axis-aligned bounding extent of all linear moves.
///
/// Only commands whose name is the canonical linear move contribute; for
/// each of `X`/`Y`/`Z` present in such a command, that axis's running
/// min/max widens. An axis a move does not mention is untouched by it.
///
/// Single O(n) pass; the input is not modified.
///
/// A sequence with no qualifying commands yields the unset sentinel on
/// all three axes; callers must check [`ExtentBounds::is_unset`] before
/// dividing by a range.
///
/// # Example
///
/// ```
/// use gcode_transform::move_bounds;
/// use gcode_types::{Axis, Command};
///
/// let commands = vec![
///     Command::new("G1").with_param('X', 1.0),
///     Command::new("G1").with_param('X', 5.0),
///     Command::new("G1").with_param('X', -3.0),
/// ];
///
/// let bounds = move_bounds(&commands);
/// assert_eq!(bounds.min(Axis::X), -3.0);
/// assert_eq!(bounds.max(Axis::X), 5.0);
/// assert!(bounds.is_unset(Axis::Y));
/// ```
#[must_use]
pub fn move_bounds(commands: &[Command]) -> ExtentBounds {
    let mut bounds = ExtentBounds::unset();
    for command in commands {
        if !command.is_linear_move() {
            continue;
        }
        for axis in Axis::ALL {
            if let Some(value) = command.params.axis(axis) {
                bounds.expand(axis, value);
            }
        }
    }
    bounds
}
