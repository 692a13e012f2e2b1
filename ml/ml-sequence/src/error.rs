//! Error types for sequence export.

use thiserror::Error;

/// Result type for sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Errors that can occur while preparing training sequences.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// Window parameters cannot produce a valid window.
    #[error("invalid window params: min_len {min_len}, max_len {max_len} (need 1 <= min_len < max_len)")]
    InvalidWindowParams {
        /// The minimum window length requested.
        min_len: usize,
        /// The maximum window length requested.
        max_len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SequenceError::InvalidWindowParams {
            min_len: 8,
            max_len: 8,
        };
        assert!(format!("{err}").contains("min_len 8"));
    }
}
