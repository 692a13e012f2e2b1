//! Training-window sampling over record sequences.

use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{SequenceError, SequenceResult};
use crate::record::MoveRecord;

/// Length limits for sampled training windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowParams {
    /// Shortest window to emit (inclusive).
    pub min_len: usize,
    /// Longest window to emit (inclusive).
    pub max_len: usize,
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            min_len: 64,
            max_len: 2048,
        }
    }
}

impl WindowParams {
    /// Creates validated window parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidWindowParams`] unless
    /// `1 <= min_len < max_len`.
    pub const fn new(min_len: usize, max_len: usize) -> SequenceResult<Self> {
        if min_len >= 1 && min_len < max_len {
            Ok(Self { min_len, max_len })
        } else {
            Err(SequenceError::InvalidWindowParams { min_len, max_len })
        }
    }
}

/// One sampled training window: a run of input records and the index of
/// the record the model should predict next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Indices of the input records.
    pub inputs: Range<usize>,
    /// Index of the prediction target, always `inputs.end`.
    pub target: usize,
}

/// Carve a record sequence into consecutive random-length windows.
///
/// Walks the sequence front to back: each window takes a random length
/// in `[min_len, min(max_len, remaining − 1)]`, its target is the record
/// immediately after it, and the walk advances past the target (stride
/// `len + 1`). Sampling stops when fewer than `min_len + 1` records
/// remain, so a short tail may go unused.
///
/// With `seed: Some(_)` the sampling is reproducible; `None` draws from
/// entropy.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidWindowParams`] unless
/// `1 <= min_len < max_len`.
///
/// # Example
///
/// ```
/// use ml_sequence::{sample_windows, MoveRecord, WindowParams};
///
/// let records = vec![MoveRecord { x: 0.0, y: 0.0, z: 0.0, no_extrusion: 1.0 }; 500];
/// let params = WindowParams { min_len: 16, max_len: 64 };
///
/// let windows = sample_windows(&records, &params, Some(42)).unwrap();
/// for window in &windows {
///     assert_eq!(window.target, window.inputs.end);
///     assert!(window.inputs.len() >= 16 && window.inputs.len() <= 64);
/// }
/// ```
pub fn sample_windows(
    records: &[MoveRecord],
    params: &WindowParams,
    seed: Option<u64>,
) -> SequenceResult<Vec<Window>> {
    if params.min_len < 1 || params.min_len >= params.max_len {
        return Err(SequenceError::InvalidWindowParams {
            min_len: params.min_len,
            max_len: params.max_len,
        });
    }

    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut windows = Vec::new();
    let mut start = 0;
    let mut remaining = records.len();
    while remaining > params.min_len {
        let upper = params.max_len.min(remaining) - 1;
        let len = rng.gen_range(params.min_len..=upper);
        windows.push(Window {
            inputs: start..start + len,
            target: start + len,
        });
        start += len + 1;
        remaining -= len + 1;
    }
    Ok(windows)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<MoveRecord> {
        vec![
            MoveRecord {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                no_extrusion: 1.0,
            };
            n
        ]
    }

    const PARAMS: WindowParams = WindowParams {
        min_len: 8,
        max_len: 32,
    };

    #[test]
    fn test_windows_are_consecutive_with_stride_len_plus_one() {
        let records = records(1000);
        let windows = sample_windows(&records, &PARAMS, Some(7)).unwrap();
        assert!(!windows.is_empty());

        let mut expected_start = 0;
        for window in &windows {
            assert_eq!(window.inputs.start, expected_start);
            assert_eq!(window.target, window.inputs.end);
            assert!(window.target < records.len());
            let len = window.inputs.len();
            assert!((PARAMS.min_len..=PARAMS.max_len).contains(&len));
            expected_start = window.target + 1;
        }
    }

    #[test]
    fn test_reproducible_under_a_seed() {
        let records = records(500);
        let a = sample_windows(&records, &PARAMS, Some(42)).unwrap();
        let b = sample_windows(&records, &PARAMS, Some(42)).unwrap();
        assert_eq!(a, b);

        let c = sample_windows(&records, &PARAMS, Some(43)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_short_sequence_yields_nothing() {
        let records = records(PARAMS.min_len);
        let windows = sample_windows(&records, &PARAMS, Some(1)).unwrap();
        assert!(windows.is_empty());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let records = records(100);
        assert!(sample_windows(
            &records,
            &WindowParams {
                min_len: 0,
                max_len: 8
            },
            Some(1),
        )
        .is_err());
        assert!(sample_windows(
            &records,
            &WindowParams {
                min_len: 8,
                max_len: 8
            },
            Some(1),
        )
        .is_err());
        assert!(WindowParams::new(8, 8).is_err());
        assert!(WindowParams::new(8, 9).is_ok());
    }
}
