// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The bound cover facade.
//!
//! A [`Cover`] is the outcome of applying one category mapping rule to one
//! concrete device: the resolved codes, the derived capability set, and
//! the read/command surface built on them. Binding happens once, when the
//! external discovery collaborator hands over a device inventory; reads
//! and command builders are then pure functions over cached status.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//!
//! use dpcover::cover::Cover;
//! use dpcover::inventory::{CodeDescriptor, DeviceInventory, IntegerSpec};
//! use dpcover::types::{DeviceCategory, DpValue};
//!
//! # fn main() -> dpcover::Result<()> {
//! let mut inventory = DeviceInventory::new();
//! inventory.insert_function("control", CodeDescriptor::enumeration(["open", "close", "stop"]));
//! inventory.insert_function("percent_control", CodeDescriptor::integer(IntegerSpec::new(0, 100)));
//! inventory.insert_status("percent_state", CodeDescriptor::integer(IntegerSpec::new(0, 100)));
//!
//! let covers = Cover::bind_category(DeviceCategory::Cl, &inventory)?;
//! let cover = &covers[0];
//! assert!(cover.capabilities().supports_stop());
//!
//! let mut status = HashMap::new();
//! status.insert("percent_state".to_string(), DpValue::Integer(100));
//! // Vendor scale runs reversed: raw 100 is fully closed.
//! assert_eq!(cover.position(&status).unwrap().value(), 0);
//! # Ok(())
//! # }
//! ```

use crate::binding::PositionBinding;
use crate::capabilities::{CoverCapabilities, CoverOperation};
use crate::command::{CommandBatch, CommandPair};
use crate::error::{CommandError, Result};
use crate::inventory::{DeviceInventory, DpKind, StatusSource};
use crate::mapping::{self, CoverDescription, DeviceClass};
use crate::resolver::resolve;
use crate::state::{CoverState, resolve_state};
use crate::types::{DeviceCategory, DpValue, Position};

/// One cover channel bound to a concrete device.
///
/// All resolved codes and the capability set are fixed at bind time; a
/// device whose declared inventory changes must be rebound.
#[derive(Debug, Clone)]
pub struct Cover {
    description: CoverDescription,
    instruction_kind: Option<DpKind>,
    current_state: Option<String>,
    current_position: Option<PositionBinding>,
    set_position: Option<PositionBinding>,
    tilt: Option<PositionBinding>,
    capabilities: CoverCapabilities,
}

impl Cover {
    /// Binds one mapping rule against a device inventory.
    ///
    /// Returns `Ok(None)` when the rule's primary instruction code is not
    /// declared by the device; the rule then simply does not apply.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidRange`](crate::ValueError::InvalidRange)
    /// when a resolved position code declares a zero-width raw range.
    /// Binding for the device is aborted in that case.
    pub fn bind(
        description: &CoverDescription,
        inventory: &DeviceInventory,
    ) -> Result<Option<Self>> {
        if !inventory.contains(description.key) {
            return Ok(None);
        }

        let current_position = match resolve(inventory, description.current_position, false) {
            Some(code) => PositionBinding::bind(inventory, code, description.inversion)?,
            None => None,
        };
        let set_position = match description
            .set_position
            .and_then(|code| resolve(inventory, &[code], true))
        {
            Some(code) => PositionBinding::bind(inventory, code, description.inversion)?,
            None => None,
        };
        let tilt = match resolve(inventory, mapping::TILT_CANDIDATES, true) {
            Some(code) => PositionBinding::bind(inventory, code, description.inversion)?,
            None => None,
        };
        let current_state =
            resolve(inventory, description.current_state, false).map(str::to_string);

        let capabilities = CoverCapabilities::derive(
            description,
            inventory,
            set_position.is_some(),
            tilt.is_some(),
        );

        tracing::debug!(
            key = description.key,
            ?capabilities,
            state_code = ?current_state,
            "bound cover channel"
        );

        Ok(Some(Self {
            description: *description,
            instruction_kind: inventory.descriptor(description.key).map(|d| d.kind),
            current_state,
            current_position,
            set_position,
            tilt,
            capabilities,
        }))
    }

    /// Binds every applicable rule of a category, one [`Cover`] per
    /// matching channel.
    ///
    /// # Errors
    ///
    /// Propagates the first bind failure; a device with a defective
    /// declared range binds no covers at all.
    pub fn bind_category(
        category: DeviceCategory,
        inventory: &DeviceInventory,
    ) -> Result<Vec<Self>> {
        let mut covers = Vec::new();
        for description in mapping::descriptions(category) {
            if let Some(cover) = Self::bind(description, inventory)? {
                covers.push(cover);
            }
        }
        Ok(covers)
    }

    /// Returns the mapping rule this cover was bound with.
    #[must_use]
    pub const fn description(&self) -> &CoverDescription {
        &self.description
    }

    /// Returns the abstract flavor of this channel.
    #[must_use]
    pub const fn device_class(&self) -> DeviceClass {
        self.description.device_class
    }

    /// Returns the derived capability set.
    #[must_use]
    pub const fn capabilities(&self) -> CoverCapabilities {
        self.capabilities
    }

    /// Reads the current normalized position.
    ///
    /// Falls back to the set-position code when no dedicated
    /// current-position code resolved; some devices echo their position
    /// only there.
    pub fn position(&self, status: &impl StatusSource) -> Option<Position> {
        self.current_position
            .as_ref()
            .or(self.set_position.as_ref())?
            .read(status)
    }

    /// Reads the current normalized tilt.
    pub fn tilt(&self, status: &impl StatusSource) -> Option<Position> {
        self.tilt.as_ref()?.read(status)
    }

    /// Resolves the abstract open/closed state.
    ///
    /// A readable position decides alone (closed iff 0); otherwise the
    /// discrete state code decides unless it reports the transient
    /// `"stop"` sentinel; otherwise the state is unknown.
    pub fn state(&self, status: &impl StatusSource) -> CoverState {
        let discrete = self
            .current_state
            .as_deref()
            .and_then(|code| status.dp_value(code));
        resolve_state(
            self.position(status),
            discrete.as_ref(),
            self.description.current_state_inverse,
        )
    }

    /// The raw instruction value for the discrete open/close commands.
    fn instruction_value(&self, open: bool) -> DpValue {
        match self.instruction_kind {
            Some(DpKind::Enumeration) => DpValue::from(if open {
                self.description.open_instruction_value
            } else {
                self.description.close_instruction_value
            }),
            _ => DpValue::Bool(open),
        }
    }

    /// Builds the open command batch.
    ///
    /// The discrete instruction is paired with a full-open position write
    /// when a set-position code is bound; some devices only honor the
    /// position write.
    ///
    /// # Errors
    ///
    /// Returns a value error if the paired position write cannot be
    /// encoded; with a successfully bound cover this cannot occur.
    pub fn open_command(&self, status: &impl StatusSource) -> Result<CommandBatch> {
        self.drive_command(true, Position::OPEN, status)
    }

    /// Builds the close command batch.
    ///
    /// # Errors
    ///
    /// See [`open_command`](Self::open_command).
    pub fn close_command(&self, status: &impl StatusSource) -> Result<CommandBatch> {
        self.drive_command(false, Position::CLOSED, status)
    }

    fn drive_command(
        &self,
        open: bool,
        target: Position,
        status: &impl StatusSource,
    ) -> Result<CommandBatch> {
        let mut batch = CommandBatch::new();
        batch.push(CommandPair::new(
            self.description.key,
            self.instruction_value(open),
        ));
        if let Some(set_position) = &self.set_position {
            batch.push(CommandPair {
                code: set_position.code().to_string(),
                value: set_position.encode(target, status)?,
            });
        }
        Ok(batch)
    }

    /// Builds the stop command batch.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnsupportedOperation`] when the device's
    /// enumeration does not declare the stop literal.
    pub fn stop_command(&self) -> Result<CommandBatch> {
        if !self.capabilities.supports_stop() {
            return Err(CommandError::UnsupportedOperation(CoverOperation::Stop).into());
        }
        Ok(vec![CommandPair::new(
            self.description.key,
            DpValue::from(self.description.stop_instruction_value),
        )]
        .into())
    }

    /// Builds a set-position command batch.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnsupportedOperation`] when no set-position
    /// code is bound.
    pub fn set_position_command(
        &self,
        position: Position,
        status: &impl StatusSource,
    ) -> Result<CommandBatch> {
        let Some(binding) = &self.set_position else {
            return Err(CommandError::UnsupportedOperation(CoverOperation::SetPosition).into());
        };
        Ok(vec![CommandPair {
            code: binding.code().to_string(),
            value: binding.encode(position, status)?,
        }]
        .into())
    }

    /// Builds a set-tilt command batch.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnsupportedOperation`] when no tilt code is
    /// bound.
    pub fn set_tilt_command(
        &self,
        tilt: Position,
        status: &impl StatusSource,
    ) -> Result<CommandBatch> {
        let Some(binding) = &self.tilt else {
            return Err(CommandError::UnsupportedOperation(CoverOperation::SetTilt).into());
        };
        Ok(vec![CommandPair {
            code: binding.code().to_string(),
            value: binding.encode(tilt, status)?,
        }]
        .into())
    }
}
