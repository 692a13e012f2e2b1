//! Parsed command records.

use crate::Parameters;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The canonical controlled linear-motion command name.
///
/// Only commands with this name contribute to bounding extents and
/// relative-move conversion.
pub const LINEAR_MOVE: &str = "G1";

/// One parsed instruction: a name plus letter-keyed numeric parameters.
///
/// A command with no parameters is valid (a bare command such as `M84`).
///
/// # Example
///
/// ```
/// use gcode_types::{Command, LINEAR_MOVE};
///
/// let cmd = Command::new(LINEAR_MOVE)
///     .with_param('X', 10.0)
///     .with_param('E', 0.4);
///
/// assert!(cmd.is_linear_move());
/// assert_eq!(cmd.params.get('X'), Some(10.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Command {
    /// The command name token (e.g. `G1`, `M104`). Never empty.
    pub name: String,
    /// Letter-keyed numeric parameters.
    pub params: Parameters,
}

impl Command {
    /// Creates a bare command with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Parameters::new(),
        }
    }

    /// Adds a parameter, consuming and returning the command.
    #[must_use]
    pub fn with_param(mut self, letter: char, value: f64) -> Self {
        self.params.insert(letter, value);
        self
    }

    /// Creates a linear move with the given `X`/`Y`/`Z` position.
    #[must_use]
    pub fn linear_move(x: f64, y: f64, z: f64) -> Self {
        Self::new(LINEAR_MOVE)
            .with_param('X', x)
            .with_param('Y', y)
            .with_param('Z', z)
    }

    /// Returns `true` if this is the canonical linear-motion command.
    #[must_use]
    pub fn is_linear_move(&self) -> bool {
        self.name == LINEAR_MOVE
    }
}
