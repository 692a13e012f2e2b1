//! Dense per-command numeric records.

use gcode_types::{Axis, Command};
use serde::{Deserialize, Serialize};

/// One command rendered as four numeric fields in fixed order:
/// `[X, Y, Z, has_extrusion]`.
///
/// `X`/`Y`/`Z` default to `0` when absent from the command. The fourth
/// field is `1.0` when the command has **no** `E` parameter: the flag
/// marks the *absence* of extrusion (a travel move), not its presence.
///
/// # Example
///
/// ```
/// use gcode_types::Command;
/// use ml_sequence::MoveRecord;
///
/// let travel = Command::new("G1").with_param('X', 2.0);
/// let record = MoveRecord::from_command(&travel);
/// assert_eq!(record.to_array(), [2.0, 0.0, 0.0, 1.0]);
///
/// let extruding = travel.with_param('E', 0.4);
/// assert_eq!(MoveRecord::from_command(&extruding).no_extrusion, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// X position, `0` if absent.
    pub x: f32,
    /// Y position, `0` if absent.
    pub y: f32,
    /// Z position, `0` if absent.
    pub z: f32,
    /// `1.0` when the command has no `E` parameter, else `0.0`.
    pub no_extrusion: f32,
}

impl MoveRecord {
    /// Render one command as a record.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // toolpath coordinates fit f32
    pub fn from_command(command: &Command) -> Self {
        let axis = |a: Axis| command.params.axis(a).unwrap_or(0.0) as f32;
        Self {
            x: axis(Axis::X),
            y: axis(Axis::Y),
            z: axis(Axis::Z),
            no_extrusion: if command.params.contains('E') { 0.0 } else { 1.0 },
        }
    }

    /// The four fields in fixed `[X, Y, Z, has_extrusion]` order.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.no_extrusion]
    }
}

/// Render a whole command sequence as dense records, one per command.
///
/// # Example
///
/// ```
/// use gcode_parse::parse_str;
/// use ml_sequence::sequence_records;
///
/// let commands = parse_str("G1 X1 Y2 Z3 E0.4\nG1 X2").unwrap();
/// let records = sequence_records(&commands);
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].to_array(), [1.0, 2.0, 3.0, 0.0]);
/// ```
#[must_use]
pub fn sequence_records(commands: &[Command]) -> Vec<MoveRecord> {
    commands.iter().map(MoveRecord::from_command).collect()
}
