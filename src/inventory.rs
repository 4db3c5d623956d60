// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-declared data-point inventory.
//!
//! Every device declares two sets of data points: *function* codes it
//! accepts commands on, and *status-range* codes it only reports. Each code
//! carries a [`CodeDescriptor`] with its declared kind and, where
//! applicable, its raw integer range or enumeration value set.
//!
//! The inventory is owned by the external device registry; this library
//! only reads it at bind time. Cached runtime values are read through the
//! [`StatusSource`] trait, which the host implements over whatever status
//! cache the vendor SDK maintains.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::DpValue;

/// Declared kind of a data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DpKind {
    /// True/false switch.
    Boolean,
    /// Closed set of string literals.
    Enumeration,
    /// Ranged integer.
    Integer,
}

/// Declared raw range of an integer data point.
///
/// `scale` is the vendor's decimal exponent for display purposes; `min`,
/// `max` and `step` are on the raw scale and are what position remapping
/// operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerSpec {
    /// Minimum raw value.
    pub min: i64,
    /// Maximum raw value.
    pub max: i64,
    /// Granularity of raw values; writes are rounded to a multiple.
    #[serde(default = "default_step")]
    pub step: i64,
    /// Decimal scale exponent (raw / 10^scale = display value).
    #[serde(default)]
    pub scale: u32,
}

const fn default_step() -> i64 {
    1
}

impl IntegerSpec {
    /// Creates a spec with step 1 and no decimal scaling.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            step: 1,
            scale: 0,
        }
    }
}

/// Declared value set of an enumeration data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumSpec {
    /// The literals the device accepts/reports.
    pub range: Vec<String>,
}

impl EnumSpec {
    /// Creates a spec from a list of literals.
    #[must_use]
    pub fn new<I, S>(range: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            range: range.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if the device declares the given literal.
    #[must_use]
    pub fn contains(&self, literal: &str) -> bool {
        self.range.iter().any(|v| v == literal)
    }
}

/// Declared type information for one data-point code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeDescriptor {
    /// The declared kind.
    pub kind: DpKind,
    /// Raw range, present when `kind` is [`DpKind::Integer`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integer: Option<IntegerSpec>,
    /// Value set, present when `kind` is [`DpKind::Enumeration`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<EnumSpec>,
}

impl CodeDescriptor {
    /// Creates a boolean descriptor.
    #[must_use]
    pub const fn boolean() -> Self {
        Self {
            kind: DpKind::Boolean,
            integer: None,
            enumeration: None,
        }
    }

    /// Creates an integer descriptor with the given raw spec.
    #[must_use]
    pub const fn integer(spec: IntegerSpec) -> Self {
        Self {
            kind: DpKind::Integer,
            integer: Some(spec),
            enumeration: None,
        }
    }

    /// Creates an enumeration descriptor with the given literals.
    #[must_use]
    pub fn enumeration<I, S>(range: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: DpKind::Enumeration,
            integer: None,
            enumeration: Some(EnumSpec::new(range)),
        }
    }
}

/// The data points one device declares.
///
/// A code present in both sets is treated as writable: the function
/// declaration wins on descriptor lookup.
///
/// # Examples
///
/// ```
/// use dpcover::inventory::{CodeDescriptor, DeviceInventory, DpKind, IntegerSpec};
///
/// let mut inventory = DeviceInventory::new();
/// inventory.insert_function(
///     "percent_control",
///     CodeDescriptor::integer(IntegerSpec::new(0, 100)),
/// );
/// inventory.insert_status("percent_state", CodeDescriptor::integer(IntegerSpec::new(0, 100)));
///
/// assert!(inventory.is_writable("percent_control"));
/// assert!(!inventory.is_writable("percent_state"));
/// assert_eq!(inventory.descriptor("percent_state").unwrap().kind, DpKind::Integer);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceInventory {
    /// Writable (commandable) data points.
    function: HashMap<String, CodeDescriptor>,
    /// Read-only data points.
    status_range: HashMap<String, CodeDescriptor>,
}

impl DeviceInventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an inventory from prebuilt maps.
    #[must_use]
    pub fn from_maps(
        function: HashMap<String, CodeDescriptor>,
        status_range: HashMap<String, CodeDescriptor>,
    ) -> Self {
        Self {
            function,
            status_range,
        }
    }

    /// Declares a writable data point.
    pub fn insert_function(&mut self, code: impl Into<String>, descriptor: CodeDescriptor) {
        self.function.insert(code.into(), descriptor);
    }

    /// Declares a read-only data point.
    pub fn insert_status(&mut self, code: impl Into<String>, descriptor: CodeDescriptor) {
        self.status_range.insert(code.into(), descriptor);
    }

    /// Returns `true` if the code is declared in either set.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.function.contains_key(code) || self.status_range.contains_key(code)
    }

    /// Returns `true` if the code is declared writable.
    #[must_use]
    pub fn is_writable(&self, code: &str) -> bool {
        self.function.contains_key(code)
    }

    /// Returns `true` if the code is declared read-only only.
    #[must_use]
    pub fn is_status_only(&self, code: &str) -> bool {
        !self.function.contains_key(code) && self.status_range.contains_key(code)
    }

    /// Looks up the descriptor for a code; the function declaration wins
    /// when a code appears in both sets.
    #[must_use]
    pub fn descriptor(&self, code: &str) -> Option<&CodeDescriptor> {
        self.function.get(code).or_else(|| self.status_range.get(code))
    }
}

/// Read surface over the host's cached device status.
///
/// Implementations must be pure lookups into already-cached state and must
/// never perform I/O; reads through this trait happen on every position,
/// tilt, state, and conditional-inversion evaluation.
pub trait StatusSource {
    /// Returns the cached raw value for a code, or `None` when the device
    /// has not reported it.
    fn dp_value(&self, code: &str) -> Option<DpValue>;
}

impl StatusSource for HashMap<String, DpValue> {
    fn dp_value(&self, code: &str) -> Option<DpValue> {
        self.get(code).cloned()
    }
}

impl<T: StatusSource + ?Sized> StatusSource for &T {
    fn dp_value(&self, code: &str) -> Option<DpValue> {
        (**self).dp_value(code)
    }
}
