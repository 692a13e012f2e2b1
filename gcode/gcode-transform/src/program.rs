//! The immutable transformation pipeline handle.

use gcode_parse::{parse_lines, ParseResult};
use gcode_types::{Command, ExtentBounds};
use tracing::info;

use crate::bounds::move_bounds;
use crate::error::TransformResult;
use crate::normalize::{normalize_moves, ScalingPolicy};
use crate::relative::relative_moves;

/// A parsed toolpath plus the raw text it came from.
///
/// Every transformation returns a **new** `GcodeProgram` holding the new
/// command sequence; the receiver is never modified. Chains therefore
/// share no mutable state:
///
/// ```
/// use gcode_transform::{GcodeProgram, ScalingPolicy};
///
/// let program = GcodeProgram::parse_str("G1 X0 Y0 Z0\nG1 X10 Y20 Z5\nG1 X5 Y5 Z1").unwrap();
///
/// let chained = program
///     .normalized(ScalingPolicy::KeepAspect).unwrap()
///     .to_relative();
///
/// // The original is untouched and can be reset or re-transformed freely.
/// assert_eq!(program.len(), 3);
/// assert_ne!(chained.commands(), program.commands());
/// ```
///
/// The raw input is retained across transformations, so any program in a
/// chain can [`reset`](GcodeProgram::reset) back to the initial parsed
/// state, discarding all transformation history.
#[derive(Debug, Clone, PartialEq)]
pub struct GcodeProgram {
    raw_lines: Vec<String>,
    initial: Vec<Command>,
    commands: Vec<Command>,
}

impl GcodeProgram {
    /// Parse raw text lines into a program.
    ///
    /// # Errors
    ///
    /// Returns a [`gcode_parse::ParseError`] if any line fails to parse;
    /// no program is produced.
    pub fn parse<I, S>(lines: I) -> ParseResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw_lines: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().to_string())
            .collect();
        let initial = parse_lines(&raw_lines)?;
        info!(
            lines = raw_lines.len(),
            commands = initial.len(),
            "Parsed program"
        );
        Ok(Self {
            raw_lines,
            commands: initial.clone(),
            initial,
        })
    }

    /// Parse a whole text blob, splitting on newlines.
    ///
    /// # Errors
    ///
    /// Same as [`GcodeProgram::parse`].
    pub fn parse_str(text: &str) -> ParseResult<Self> {
        Self::parse(text.lines())
    }

    /// The current command sequence.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// The retained raw input lines.
    #[must_use]
    pub fn raw_lines(&self) -> &[String] {
        &self.raw_lines
    }

    /// Number of commands in the current sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the current sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The bounding extent of the current sequence's linear moves.
    ///
    /// Computed on demand; see [`move_bounds`].
    #[must_use]
    pub fn bounds(&self) -> ExtentBounds {
        move_bounds(&self.commands)
    }

    /// A new program whose positional parameters are rescaled.
    ///
    /// See [`normalize_moves`]. The receiver is unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TransformError`] if any axis's extent is unset
    /// or degenerate.
    pub fn normalized(&self, policy: ScalingPolicy) -> TransformResult<Self> {
        let commands = normalize_moves(&self.commands, policy)?;
        Ok(self.with_commands(commands))
    }

    /// A new program with absolute moves rewritten as deltas.
    ///
    /// See [`relative_moves`]. The receiver is unmodified.
    #[must_use]
    pub fn to_relative(&self) -> Self {
        self.with_commands(relative_moves(&self.commands))
    }

    /// A new program restored to the initial parsed state.
    ///
    /// Recomputes the current sequence from the retained raw input,
    /// discarding every transformation applied since parsing. Parsing is
    /// deterministic, so the retained initial parse is the same sequence
    /// a re-parse would produce.
    #[must_use]
    pub fn reset(&self) -> Self {
        self.with_commands(self.initial.clone())
    }

    /// A sibling program with the same origin and a new current sequence.
    fn with_commands(&self, commands: Vec<Command>) -> Self {
        Self {
            raw_lines: self.raw_lines.clone(),
            initial: self.initial.clone(),
            commands,
        }
    }
}
