//! Spatial axis identifiers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three spatial axes a positional move can address.
///
/// Axes map one-to-one onto the single-letter parameter keys `X`, `Y`
/// and `Z` in the command text format.
///
/// # Example
///
/// ```
/// use gcode_types::Axis;
///
/// assert_eq!(Axis::X.letter(), 'X');
/// assert_eq!(Axis::from_letter('z'), Some(Axis::Z));
/// assert_eq!(Axis::from_letter('E'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The X axis (width).
    X,
    /// The Y axis (depth).
    Y,
    /// The Z axis (height, print direction).
    Z,
}

impl Axis {
    /// All three axes, in canonical X, Y, Z order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// The upper-case parameter letter for this axis.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }

    /// The axis for a parameter letter, if it names one.
    ///
    /// Accepts both cases; returns `None` for non-positional letters
    /// such as `E` or `F`.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'X' | 'x' => Some(Self::X),
            'Y' | 'y' => Some(Self::Y),
            'Z' | 'z' => Some(Self::Z),
            _ => None,
        }
    }

    /// Index of this axis in [`Axis::ALL`] order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
