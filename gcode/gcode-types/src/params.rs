//! Letter-keyed command parameters.

use crate::Axis;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameter letters with dedicated storage slots.
///
/// These cover the common motion fields: positions (`X`, `Y`, `Z`),
/// extrusion length (`E`), feed rate (`F`) and spindle/laser power (`S`).
const KNOWN_LETTERS: [char; 6] = ['X', 'Y', 'Z', 'E', 'F', 'S'];

/// A mapping from single-letter parameter keys to numeric values.
///
/// The common letters (`X`, `Y`, `Z`, `E`, `F`, `S`) occupy fixed slots;
/// any other letter lands in a small overflow bucket. Keys are unique;
/// inserting an existing key replaces its value. Lookup is by exact
/// letter, matching the command text format, where `X` and `x` are
/// distinct keys.
///
/// # Example
///
/// ```
/// use gcode_types::Parameters;
///
/// let mut params = Parameters::new();
/// params.insert('X', 1.5);
/// params.insert('Q', -2.0);
///
/// assert_eq!(params.get('X'), Some(1.5));
/// assert_eq!(params.get('Q'), Some(-2.0));
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parameters {
    slots: [Option<f64>; KNOWN_LETTERS.len()],
    overflow: Vec<(char, f64)>,
}

impl Parameters {
    /// Creates an empty parameter map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; KNOWN_LETTERS.len()],
            overflow: Vec::new(),
        }
    }

    fn slot_index(letter: char) -> Option<usize> {
        KNOWN_LETTERS.iter().position(|&k| k == letter)
    }

    /// Inserts or replaces the value for a letter key.
    pub fn insert(&mut self, letter: char, value: f64) {
        if let Some(index) = Self::slot_index(letter) {
            self.slots[index] = Some(value);
        } else if let Some(entry) = self.overflow.iter_mut().find(|(k, _)| *k == letter) {
            entry.1 = value;
        } else {
            self.overflow.push((letter, value));
        }
    }

    /// Returns the value for a letter key, if present.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<f64> {
        match Self::slot_index(letter) {
            Some(index) => self.slots[index],
            None => self
                .overflow
                .iter()
                .find(|(k, _)| *k == letter)
                .map(|(_, v)| *v),
        }
    }

    /// Returns the value for a spatial axis, if present.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> Option<f64> {
        self.get(axis.letter())
    }

    /// Returns `true` if the key is present.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.get(letter).is_some()
    }

    /// Returns `true` if any of the positional `X`/`Y`/`Z` keys is present.
    #[must_use]
    pub fn has_positional(&self) -> bool {
        Axis::ALL.iter().any(|&axis| self.axis(axis).is_some())
    }

    /// Number of keys present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count() + self.overflow.len()
    }

    /// Returns `true` if no keys are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none) && self.overflow.is_empty()
    }

    /// Iterates over `(letter, value)` pairs.
    ///
    /// Known letters come first in `X, Y, Z, E, F, S` order, then
    /// overflow entries in insertion order. Each present key appears
    /// exactly once.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        KNOWN_LETTERS
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(&letter, slot)| slot.map(|value| (letter, value)))
            .chain(self.overflow.iter().copied())
    }
}

impl FromIterator<(char, f64)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (letter, value) in iter {
            params.insert(letter, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut params = Parameters::new();
        params.insert('X', 1.0);
        params.insert('F', 1200.0);
        assert_eq!(params.get('X'), Some(1.0));
        assert_eq!(params.get('F'), Some(1200.0));
        assert_eq!(params.get('Y'), None);
    }

    #[test]
    fn test_replace_keeps_keys_unique() {
        let mut params = Parameters::new();
        params.insert('X', 1.0);
        params.insert('X', 2.0);
        params.insert('Q', 3.0);
        params.insert('Q', 4.0);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get('X'), Some(2.0));
        assert_eq!(params.get('Q'), Some(4.0));
    }

    #[test]
    fn test_overflow_letters_retained() {
        let params: Parameters = [('Q', 1.0), ('R', 2.0)].into_iter().collect();
        let seen: Vec<(char, f64)> = params.iter().collect();
        assert_eq!(seen, vec![('Q', 1.0), ('R', 2.0)]);
    }

    #[test]
    fn test_iter_order_known_first() {
        let params: Parameters = [('Q', 9.0), ('Z', 3.0), ('X', 1.0)].into_iter().collect();
        let letters: Vec<char> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(letters, vec!['X', 'Z', 'Q']);
    }

    #[test]
    fn test_case_sensitive_keys() {
        let mut params = Parameters::new();
        params.insert('x', 1.0);
        assert_eq!(params.get('X'), None);
        assert_eq!(params.get('x'), Some(1.0));
    }

    #[test]
    fn test_has_positional() {
        let mut params = Parameters::new();
        params.insert('F', 1200.0);
        assert!(!params.has_positional());
        params.insert('Z', 0.2);
        assert!(params.has_positional());
    }

    #[test]
    fn test_empty() {
        let params = Parameters::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert_eq!(params.iter().count(), 0);
    }
}
