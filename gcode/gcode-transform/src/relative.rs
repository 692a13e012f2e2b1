//! Absolute-to-relative move conversion.

use gcode_types::{Axis, Command, MachinePosition, Parameters, LINEAR_MOVE};
use tracing::debug;

/// Rewrite a sequence of absolute linear moves as position deltas.
///
/// A single O(n) pass tracking [`MachinePosition`]. Only linear moves
/// appear in the output; every other command is dropped. Nothing is
/// emitted until all three axes have been observed at least once. The
/// first move at which the position is already fully known is consumed
/// as the synthetic relative origin `G1 X0 Y0 Z0`; each later move emits
/// `stated_or_last_known − last_known` per axis, with its non-positional
/// parameters (`E`, `F`, …) carried through unchanged.
///
/// A new sequence is produced; the input is not modified.
///
/// # Example
///
/// ```
/// use gcode_parse::parse_str;
/// use gcode_transform::relative_moves;
///
/// let commands = parse_str("G1 X0 Y0 Z0\nG1 X1 Y0 Z0\nG1 X1 Y1 Z0 E0.4").unwrap();
/// let relative = relative_moves(&commands);
///
/// // First emission is the synthetic origin.
/// assert_eq!(relative[0].params.get('X'), Some(0.0));
/// // Then per-axis deltas.
/// assert_eq!(relative[1].params.get('Y'), Some(1.0));
/// assert_eq!(relative[1].params.get('E'), Some(0.4));
/// ```
#[must_use]
pub fn relative_moves(commands: &[Command]) -> Vec<Command> {
    let mut position = MachinePosition::new();
    let mut started = false;
    let mut output = Vec::new();

    for command in commands {
        if !command.is_linear_move() {
            continue;
        }

        if !started && position.is_fully_known() {
            output.push(Command::linear_move(0.0, 0.0, 0.0));
            started = true;
        } else if started {
            output.push(delta_command(command, &position));
        }

        position.apply(command);
    }

    debug!(
        input = commands.len(),
        output = output.len(),
        "Converted absolute moves to deltas"
    );
    output
}

/// Build the delta emission for one move against the last known position.
///
/// Only called once the position is fully known, so every axis has a
/// last-known value to difference against.
fn delta_command(command: &Command, position: &MachinePosition) -> Command {
    let mut params = Parameters::new();
    for (letter, value) in command.params.iter() {
        if !matches!(letter, 'X' | 'Y' | 'Z') {
            params.insert(letter, value);
        }
    }
    for axis in Axis::ALL {
        if let Some(last) = position.get(axis) {
            let stated = command.params.axis(axis).unwrap_or(last);
            params.insert(axis.letter(), stated - last);
        }
    }
    Command {
        name: LINEAR_MOVE.to_string(),
        params,
    }
}
