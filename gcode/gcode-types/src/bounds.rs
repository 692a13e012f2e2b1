//! Per-axis bounding extents.

use nalgebra::Point3;

use crate::Axis;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The axis-aligned bounding extent of a set of positional moves.
///
/// Stores an independent `(min, max)` pair per spatial axis as two
/// corner points. An axis that has never observed a value stays at the
/// `(+∞, −∞)` sentinel, an explicit "no data" state rather than a valid
/// zero range. Callers must check [`ExtentBounds::is_unset`] (or
/// [`ExtentBounds::is_fully_set`]) before treating
/// [`ExtentBounds::range`] as a width.
///
/// # Example
///
/// ```
/// use gcode_types::{Axis, ExtentBounds};
///
/// let mut bounds = ExtentBounds::unset();
/// assert!(bounds.is_unset(Axis::X));
///
/// bounds.expand(Axis::X, 5.0);
/// bounds.expand(Axis::X, -3.0);
/// assert_eq!(bounds.min(Axis::X), -3.0);
/// assert_eq!(bounds.max(Axis::X), 5.0);
/// assert!(bounds.is_unset(Axis::Y));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtentBounds {
    /// Per-axis minima; `+∞` where unset.
    pub min: Point3<f64>,
    /// Per-axis maxima; `−∞` where unset.
    pub max: Point3<f64>,
}

impl ExtentBounds {
    /// Creates an extent with all three axes unset.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn unset() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Widens one axis's extent to include a value.
    pub fn expand(&mut self, axis: Axis, value: f64) {
        let i = axis.index();
        self.min[i] = self.min[i].min(value);
        self.max[i] = self.max[i].max(value);
    }

    /// The minimum observed value on an axis (`+∞` if unset).
    #[must_use]
    pub fn min(&self, axis: Axis) -> f64 {
        self.min[axis.index()]
    }

    /// The maximum observed value on an axis (`−∞` if unset).
    #[must_use]
    pub fn max(&self, axis: Axis) -> f64 {
        self.max[axis.index()]
    }

    /// The width `max − min` of an axis.
    ///
    /// Only meaningful when the axis is set; an unset axis yields `−∞`.
    #[must_use]
    pub fn range(&self, axis: Axis) -> f64 {
        self.max(axis) - self.min(axis)
    }

    /// Returns `true` if an axis has never observed a value.
    #[must_use]
    pub fn is_unset(&self, axis: Axis) -> bool {
        self.min(axis) > self.max(axis)
    }

    /// Returns `true` if an axis is set but has zero width.
    #[must_use]
    pub fn is_degenerate(&self, axis: Axis) -> bool {
        !self.is_unset(axis) && self.range(axis) == 0.0
    }

    /// Returns `true` if all three axes have observed at least one value.
    #[must_use]
    pub fn is_fully_set(&self) -> bool {
        Axis::ALL.iter().all(|&axis| !self.is_unset(axis))
    }
}

impl Default for ExtentBounds {
    fn default() -> Self {
        Self::unset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_sentinel() {
        let bounds = ExtentBounds::unset();
        for axis in Axis::ALL {
            assert!(bounds.is_unset(axis));
            assert!(!bounds.is_degenerate(axis));
        }
        assert!(!bounds.is_fully_set());
    }

    #[test]
    fn test_expand_tracks_min_max() {
        let mut bounds = ExtentBounds::unset();
        for v in [1.0, 5.0, -3.0] {
            bounds.expand(Axis::X, v);
        }
        assert_eq!(bounds.min(Axis::X), -3.0);
        assert_eq!(bounds.max(Axis::X), 5.0);
        assert_eq!(bounds.range(Axis::X), 8.0);
    }

    #[test]
    fn test_single_value_is_degenerate() {
        let mut bounds = ExtentBounds::unset();
        bounds.expand(Axis::Z, 0.2);
        assert!(bounds.is_degenerate(Axis::Z));
        assert!(!bounds.is_unset(Axis::Z));
        assert_eq!(bounds.range(Axis::Z), 0.0);
    }

    #[test]
    fn test_axes_are_independent() {
        let mut bounds = ExtentBounds::unset();
        bounds.expand(Axis::X, 1.0);
        bounds.expand(Axis::X, 2.0);
        assert!(!bounds.is_unset(Axis::X));
        assert!(bounds.is_unset(Axis::Y));
        assert!(bounds.is_unset(Axis::Z));
        assert!(!bounds.is_fully_set());
    }
}
