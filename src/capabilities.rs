// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover capability derivation.
//!
//! Which abstract operations a bound cover supports depends on what the
//! concrete device declares: the kind of its instruction code, which
//! instruction literals its enumeration actually lists, and whether
//! position/tilt codes resolved. Capabilities are derived exactly once at
//! bind time and are immutable while the device stays bound; a changed
//! inventory implies a rebind by the external discovery collaborator.

use std::fmt;

use crate::inventory::{DeviceInventory, DpKind};
use crate::mapping::CoverDescription;

/// An abstract cover operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverOperation {
    /// Drive fully open.
    Open,
    /// Drive fully closed.
    Close,
    /// Halt mid-travel.
    Stop,
    /// Move to a target position.
    SetPosition,
    /// Move to a target tilt angle.
    SetTilt,
}

impl CoverOperation {
    /// Returns the operation name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Stop => "stop",
            Self::SetPosition => "set position",
            Self::SetTilt => "set tilt",
        }
    }
}

impl fmt::Display for CoverOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations a bound cover supports.
///
/// # Examples
///
/// ```
/// use dpcover::CoverCapabilities;
///
/// let caps = CoverCapabilities::default();
/// assert!(!caps.supports_open());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
// Each boolean is an independent device feature flag; there is no state
// machine to collapse them into.
#[allow(clippy::struct_excessive_bools)]
pub struct CoverCapabilities {
    /// Supports the discrete open instruction.
    pub open: bool,
    /// Supports the discrete close instruction.
    pub close: bool,
    /// Supports halting mid-travel.
    pub stop: bool,
    /// Supports driving to a target position.
    pub set_position: bool,
    /// Supports driving to a target tilt angle.
    pub set_tilt: bool,
}

impl CoverCapabilities {
    /// Derives the capability set for one description bound against one
    /// device inventory.
    ///
    /// A boolean instruction code yields open+close (true/false map to
    /// open/close). An enumeration code yields open, close, and stop each
    /// independently, gated on the configured literal actually appearing
    /// in the device's declared value set. Position and tilt capabilities
    /// follow whether the respective codes resolved.
    #[must_use]
    pub fn derive(
        description: &CoverDescription,
        inventory: &DeviceInventory,
        set_position_bound: bool,
        tilt_bound: bool,
    ) -> Self {
        let mut caps = Self::default();

        if let Some(descriptor) = inventory.descriptor(description.key) {
            match descriptor.kind {
                DpKind::Boolean => {
                    caps.open = true;
                    caps.close = true;
                }
                DpKind::Enumeration => {
                    if let Some(spec) = &descriptor.enumeration {
                        caps.open = spec.contains(description.open_instruction_value);
                        caps.close = spec.contains(description.close_instruction_value);
                        caps.stop = spec.contains(description.stop_instruction_value);
                    }
                }
                DpKind::Integer => {}
            }
        }

        caps.set_position = set_position_bound;
        caps.set_tilt = tilt_bound;
        caps
    }

    /// Returns whether the discrete open instruction is supported.
    #[must_use]
    pub const fn supports_open(&self) -> bool {
        self.open
    }

    /// Returns whether the discrete close instruction is supported.
    #[must_use]
    pub const fn supports_close(&self) -> bool {
        self.close
    }

    /// Returns whether stop is supported.
    #[must_use]
    pub const fn supports_stop(&self) -> bool {
        self.stop
    }

    /// Returns whether position targeting is supported.
    #[must_use]
    pub const fn supports_set_position(&self) -> bool {
        self.set_position
    }

    /// Returns whether tilt targeting is supported.
    #[must_use]
    pub const fn supports_set_tilt(&self) -> bool {
        self.set_tilt
    }

    /// Returns whether the given operation is supported.
    #[must_use]
    pub const fn supports(&self, operation: CoverOperation) -> bool {
        match operation {
            CoverOperation::Open => self.open,
            CoverOperation::Close => self.close,
            CoverOperation::Stop => self.stop,
            CoverOperation::SetPosition => self.set_position,
            CoverOperation::SetTilt => self.set_tilt,
        }
    }
}
