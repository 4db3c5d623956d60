// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw data-point values.
//!
//! A vendor data point carries one of three value shapes: a boolean switch,
//! a ranged integer, or an enumeration literal. This module provides the
//! [`DpValue`] type covering all three, in the `[{"code": ..., "value": ...}]`
//! shape the vendor SDK exchanges.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw value read from, or written to, a vendor data point.
///
/// # Examples
///
/// ```
/// use dpcover::types::DpValue;
///
/// let switch = DpValue::from(true);
/// assert_eq!(switch.as_bool(), Some(true));
///
/// let percent = DpValue::from(42);
/// assert_eq!(percent.as_integer(), Some(42));
///
/// let instruction = DpValue::from("open");
/// assert_eq!(instruction.as_enum(), Some("open"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DpValue {
    /// A boolean data point (e.g. a switch or door contact).
    Bool(bool),
    /// A ranged integer data point (e.g. a position percentage).
    Integer(i64),
    /// An enumeration data point (e.g. an `"open"`/`"close"`/`"stop"`
    /// instruction or a mode selector).
    Enum(String),
}

impl DpValue {
    /// Returns the boolean value, if this is a boolean data point.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an integer data point.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the enumeration literal, if this is an enum data point.
    #[must_use]
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            Self::Enum(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<bool> for DpValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for DpValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for DpValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for DpValue {
    fn from(value: &str) -> Self {
        Self::Enum(value.to_string())
    }
}

impl From<String> for DpValue {
    fn from(value: String) -> Self {
        Self::Enum(value)
    }
}

impl fmt::Display for DpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Enum(s) => f.write_str(s),
        }
    }
}
