//! Line-oriented command parsing.

use gcode_types::Command;

use crate::error::{ParseError, ParseResult};

/// The comment marker; everything from it to end of line is ignored.
const COMMENT_MARKER: char = ';';

/// Parse an ordered sequence of raw text lines into commands.
///
/// Per line:
/// 1. Text from the first `;` to end of line is stripped, then the
///    remainder is whitespace-trimmed. Lines that become empty produce
///    no command.
/// 2. The first whitespace-separated token is the command name.
/// 3. Each further token is one letter followed by a float literal; the
///    letter keys the value in the command's parameters.
///
/// # Errors
///
/// Returns [`ParseError::BadParameter`] if any parameter token's numeric
/// part fails to parse. The whole parse aborts; no partial sequence is
/// returned.
///
/// # Example
///
/// ```
/// use gcode_parse::parse_lines;
///
/// let commands = parse_lines(["G1 X1.5 Y-2 ; outline", "; comment only", "  "]).unwrap();
/// assert_eq!(commands.len(), 1);
/// assert_eq!(commands[0].name, "G1");
/// assert_eq!(commands[0].params.get('Y'), Some(-2.0));
/// ```
pub fn parse_lines<I, S>(lines: I) -> ParseResult<Vec<Command>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut commands = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        if let Some(command) = parse_line(line.as_ref(), index + 1)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parse a whole text blob, splitting on newlines.
///
/// Tolerates `\r\n` line endings.
///
/// # Errors
///
/// Same as [`parse_lines`].
pub fn parse_str(text: &str) -> ParseResult<Vec<Command>> {
    parse_lines(text.lines())
}

/// Parse a single line; `Ok(None)` for blank or comment-only lines.
fn parse_line(line: &str, line_number: usize) -> ParseResult<Option<Command>> {
    let code = match line.find(COMMENT_MARKER) {
        Some(at) => &line[..at],
        None => line,
    };
    let code = code.trim();
    if code.is_empty() {
        return Ok(None);
    }

    let mut tokens = code.split_whitespace();
    let Some(name) = tokens.next() else {
        return Ok(None);
    };

    let mut command = Command::new(name);
    for token in tokens {
        let mut chars = token.chars();
        let Some(letter) = chars.next() else {
            continue; // split_whitespace never yields empty tokens
        };
        let value = chars.as_str().parse::<f64>().map_err(|source| {
            ParseError::BadParameter {
                line_number,
                token: token.to_string(),
                source,
            }
        })?;
        command.params.insert(letter, value);
    }
    Ok(Some(command))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let commands = parse_lines(["G1 X1.5 Y-2 ; comment"]).expect("parse");
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].name, "G1");
        assert_eq!(commands[0].params.get('X'), Some(1.5));
        assert_eq!(commands[0].params.get('Y'), Some(-2.0));
    }

    #[test]
    fn test_comment_never_affects_result() {
        let with_comment = parse_lines(["G1 X1 Y2 ; anything X9 Y9"]).expect("parse");
        let without = parse_lines(["G1 X1 Y2"]).expect("parse");
        assert_eq!(with_comment, without);
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        let commands = parse_lines(["; just a comment", "   "]).expect("parse");
        assert!(commands.is_empty());
    }

    #[test]
    fn test_bare_command() {
        let commands = parse_lines(["M84"]).expect("parse");
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].name, "M84");
        assert!(commands[0].params.is_empty());
    }

    #[test]
    fn test_bad_parameter_aborts_whole_parse() {
        let err = parse_lines(["G1 X1", "G1 Xoops", "G1 X2"]).unwrap_err();
        let ParseError::BadParameter {
            line_number, token, ..
        } = err;
        assert_eq!(line_number, 2);
        assert_eq!(token, "Xoops");
    }

    #[test]
    fn test_letter_with_no_digits_is_fatal() {
        assert!(parse_lines(["G1 X"]).is_err());
    }

    #[test]
    fn test_scientific_and_signed_literals() {
        let commands = parse_lines(["G1 X-0.5 Y1e2 Z+3"]).expect("parse");
        assert_eq!(commands[0].params.get('X'), Some(-0.5));
        assert_eq!(commands[0].params.get('Y'), Some(100.0));
        assert_eq!(commands[0].params.get('Z'), Some(3.0));
    }

    #[test]
    fn test_parse_str_crlf() {
        let commands = parse_str("G1 X1\r\nG1 X2\r\n").expect("parse");
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[1].params.get('X'), Some(2.0));
    }

    #[test]
    fn test_non_move_commands_parse_too() {
        let commands = parse_str("M104 S205\nG28\nG1 Z0.2 F1200").expect("parse");
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].params.get('S'), Some(205.0));
        assert!(commands[1].params.is_empty());
    }
}
