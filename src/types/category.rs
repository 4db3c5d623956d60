// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vendor device categories with cover semantics.

use std::fmt;

/// Device categories that expose motorized-cover data points.
///
/// Categories are vendor-assigned short codes. Each category carries its own
/// set of mapping rules (see [`mapping::descriptions`](crate::mapping::descriptions)).
///
/// # Examples
///
/// ```
/// use dpcover::types::DeviceCategory;
///
/// assert_eq!(DeviceCategory::from_vendor("cl"), Some(DeviceCategory::Cl));
/// assert_eq!(DeviceCategory::Ckmkzq.as_str(), "ckmkzq");
/// assert_eq!(DeviceCategory::from_vendor("kg"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceCategory {
    /// Garage door opener.
    Ckmkzq,
    /// Curtain.
    Cl,
    /// Curtain switch.
    Clkg,
    /// Curtain robot.
    Jdcljqr,
}

impl DeviceCategory {
    /// All categories with cover mapping rules.
    pub const ALL: [Self; 4] = [Self::Ckmkzq, Self::Cl, Self::Clkg, Self::Jdcljqr];

    /// Returns the vendor category code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ckmkzq => "ckmkzq",
            Self::Cl => "cl",
            Self::Clkg => "clkg",
            Self::Jdcljqr => "jdcljqr",
        }
    }

    /// Parses a vendor category code.
    ///
    /// Returns `None` for categories without cover semantics; the caller
    /// simply does not bind covers for such devices.
    #[must_use]
    pub fn from_vendor(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
