// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Normalized cover position type.
//!
//! This module provides a type-safe representation of the abstract 0-100
//! cover-position scale, independent of any device's raw numeric range.

use std::fmt;

use crate::error::ValueError;

/// Cover position as a percentage (0-100).
///
/// 0 is fully closed and 100 is fully open, regardless of the raw scale or
/// travel direction of the underlying device. The same type is used for
/// tilt angles.
///
/// # Examples
///
/// ```
/// use dpcover::types::Position;
///
/// // Create a position at 75%
/// let pos = Position::new(75).unwrap();
/// assert_eq!(pos.value(), 75);
///
/// // Use predefined endpoints
/// assert_eq!(Position::CLOSED.value(), 0);
/// assert_eq!(Position::OPEN.value(), 100);
///
/// // Invalid values return error
/// assert!(Position::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    /// Fully closed (0%).
    pub const CLOSED: Self = Self(0);

    /// Fully open (100%).
    pub const OPEN: Self = Self(100);

    /// Creates a new position value.
    ///
    /// # Arguments
    ///
    /// * `value` - The position percentage (0-100)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a position value, clamping to the valid range.
    ///
    /// Values above 100 are clamped to 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use dpcover::types::Position;
    ///
    /// let pos = Position::clamped(150);
    /// assert_eq!(pos.value(), 100);
    /// ```
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the position percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns `true` if this position is the closed endpoint.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Position {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_valid_values() {
        for v in 0..=100 {
            let pos = Position::new(v).unwrap();
            assert_eq!(pos.value(), v);
        }
    }

    #[test]
    fn position_invalid_value() {
        assert!(Position::new(101).is_err());
        assert!(Position::new(255).is_err());
    }

    #[test]
    fn position_clamped() {
        assert_eq!(Position::clamped(50).value(), 50);
        assert_eq!(Position::clamped(150).value(), 100);
    }

    #[test]
    fn position_endpoints() {
        assert!(Position::CLOSED.is_closed());
        assert!(!Position::OPEN.is_closed());
        assert!(!Position::new(1).unwrap().is_closed());
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::new(75).unwrap().to_string(), "75%");
    }

    #[test]
    fn position_ordering() {
        assert!(Position::CLOSED < Position::OPEN);
        assert!(Position::new(50).unwrap() < Position::new(75).unwrap());
    }
}
