// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resolved position bindings.
//!
//! A [`PositionBinding`] ties one resolved integer data point to the
//! normalized percentage scale: the code, its declared raw range, and the
//! channel's inversion policy. Bindings are created at device-bind time
//! and live for the device's lifetime; the inversion policy, however, is
//! re-evaluated against live status on every read and write, because a
//! conditional mode can change between calls.

use crate::error::ValueError;
use crate::inventory::{DeviceInventory, DpKind, IntegerSpec, StatusSource};
use crate::remap::{InversionPolicy, from_normalized, to_normalized};
use crate::types::{DpValue, Position};

/// One integer data point bound for percentage mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionBinding {
    code: String,
    spec: IntegerSpec,
    inversion: InversionPolicy,
}

impl PositionBinding {
    /// Binds a resolved code against the inventory.
    ///
    /// Returns `Ok(None)` when the code's descriptor is not an integer
    /// data point (the capability is then simply not available on this
    /// device).
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidRange`] when the declared range is
    /// zero-width; this aborts binding for the device rather than
    /// deferring a divide-by-zero to the first read.
    pub(crate) fn bind(
        inventory: &DeviceInventory,
        code: &str,
        inversion: InversionPolicy,
    ) -> Result<Option<Self>, ValueError> {
        let Some(descriptor) = inventory.descriptor(code) else {
            return Ok(None);
        };
        let (DpKind::Integer, Some(spec)) = (descriptor.kind, descriptor.integer) else {
            tracing::debug!(code, "resolved code is not an integer data point, skipping");
            return Ok(None);
        };
        if spec.min == spec.max {
            return Err(ValueError::InvalidRange {
                min: spec.min,
                max: spec.max,
            });
        }
        Ok(Some(Self {
            code: code.to_string(),
            spec,
            inversion,
        }))
    }

    /// Returns the bound data-point code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the declared raw range.
    #[must_use]
    pub const fn spec(&self) -> IntegerSpec {
        self.spec
    }

    /// Reads the current normalized position from cached status.
    ///
    /// Returns `None` when the device has not reported the code or
    /// reports a non-integer value.
    #[allow(clippy::cast_precision_loss)]
    pub fn read(&self, status: &impl StatusSource) -> Option<Position> {
        let raw = status.dp_value(&self.code)?.as_integer()?;
        let invert = self.inversion.evaluate(status);
        let pct = to_normalized(raw as f64, self.spec.min, self.spec.max, invert).ok()?;
        Some(Position::clamped(pct))
    }

    /// Encodes a normalized position as the raw write value.
    ///
    /// The raw result is rounded to the declared step granularity and
    /// clamped into the declared range.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidRange`] for a zero-width range; with
    /// a binding produced by [`bind`](Self::bind) this cannot occur.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn encode(
        &self,
        position: Position,
        status: &impl StatusSource,
    ) -> Result<DpValue, ValueError> {
        let invert = self.inversion.evaluate(status);
        let raw = from_normalized(position.value(), self.spec.min, self.spec.max, invert)?;
        let step = self.spec.step.max(1) as f64;
        let stepped = (raw / step).round() * step;
        let clamped = stepped.clamp(self.spec.min as f64, self.spec.max as f64);
        Ok(DpValue::Integer(clamped.round() as i64))
    }
}
