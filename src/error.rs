// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `dpcover` library.
//!
//! This module provides the error hierarchy for the two failure classes the
//! core can produce: value/range validation defects and unsupported command
//! requests. Absent telemetry is deliberately *not* an error anywhere in this
//! library; missing position or state reads surface as `None` /
//! [`CoverState::Unknown`](crate::CoverState::Unknown).

use thiserror::Error;

use crate::capabilities::CoverOperation;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation or remapping.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while building a command batch.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Errors related to value validation and raw-range constraints.
///
/// These errors occur when constructing constrained types with invalid
/// values, or when a device declares a raw range that cannot be mapped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A data point declares a zero-width raw range.
    ///
    /// This is a configuration defect on the device side: a range with
    /// `min == max` cannot be mapped onto the 0-100 scale. It is fatal at
    /// bind time and aborts binding for the affected device.
    #[error("zero-width raw range [{min}, {max}]")]
    InvalidRange {
        /// Declared minimum of the raw range.
        min: i64,
        /// Declared maximum of the raw range.
        max: i64,
    },
}

/// Errors related to command batch construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// A command was requested for a capability the bound device lacks.
    #[error("cover does not support {0}")]
    UnsupportedOperation(CoverOperation),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 100,
            actual: 150,
        };
        assert_eq!(err.to_string(), "value 150 is out of range [0, 100]");
    }

    #[test]
    fn invalid_range_display() {
        let err = ValueError::InvalidRange { min: 7, max: 7 };
        assert_eq!(err.to_string(), "zero-width raw range [7, 7]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidRange { min: 0, max: 0 };
        let err: Error = value_err.into();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidRange { min: 0, max: 0 })
        ));
    }

    #[test]
    fn command_error_display() {
        let err = CommandError::UnsupportedOperation(CoverOperation::Stop);
        assert_eq!(err.to_string(), "cover does not support stop");
    }
}
