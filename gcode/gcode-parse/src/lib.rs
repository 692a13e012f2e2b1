//! Text-to-command parser for G-code toolpaths.
//!
//! Turns raw motion-command text into structured [`Command`] records:
//! strips `;` comments, tokenizes on whitespace, and type-converts
//! letter-keyed parameters to `f64`.
//!
//! # Input Format
//!
//! One command per line:
//!
//! ```text
//! <NAME> <LETTER><NUMBER> <LETTER><NUMBER> ...    ; optional comment
//! ```
//!
//! There is no quoting, escaping, or line continuation. Comment-only and
//! blank lines produce no command.
//!
//! # Example
//!
//! ```
//! use gcode_parse::parse_str;
//!
//! let commands = parse_str("G1 X10 Y5 E0.4\nM104 S205 ; heat up").unwrap();
//! assert_eq!(commands.len(), 2);
//! assert!(commands[0].is_linear_move());
//! ```
//!
//! # Errors
//!
//! A malformed parameter token aborts the whole parse with
//! [`ParseError::BadParameter`]; there is no partial recovery.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod parser;

pub use error::{ParseError, ParseResult};
pub use parser::{parse_lines, parse_str};

// Re-export the command type parsers produce
pub use gcode_types::Command;
