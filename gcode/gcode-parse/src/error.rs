//! Error types for command parsing.

use thiserror::Error;

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while parsing command text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A parameter token's numeric part is not a valid float literal.
    ///
    /// Fatal for the whole parse; there is no line-level recovery.
    #[error("line {line_number}: invalid numeric value in parameter token `{token}`")]
    BadParameter {
        /// 1-based line number in the input.
        line_number: usize,
        /// The offending token, letter included.
        token: String,
        /// The underlying float parse failure.
        #[source]
        source: std::num::ParseFloatError,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let source = "nope".parse::<f64>().unwrap_err();
        let err = ParseError::BadParameter {
            line_number: 7,
            token: "Xnope".to_string(),
            source,
        };
        let text = format!("{err}");
        assert!(text.contains("line 7"));
        assert!(text.contains("Xnope"));
    }
}
