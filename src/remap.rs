// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw value remapping.
//!
//! Devices report and accept positions on arbitrary raw integer ranges.
//! This module converts between a raw range and the normalized 0-100 scale,
//! with an inversion flag for categories whose raw scale runs opposite to
//! the abstract one. The flag itself may be static or depend on a runtime
//! mode code; see [`InversionPolicy`].

use crate::error::ValueError;
use crate::inventory::StatusSource;

/// Converts a raw value to the normalized 0-100 scale.
///
/// Out-of-range raw input is clamped into `[min, max]` before scaling;
/// devices occasionally report slightly out-of-range telemetry and that
/// must not fail a read. With `invert` set the endpoints swap.
///
/// # Errors
///
/// Returns [`ValueError::InvalidRange`] when `min == max`; a zero-width
/// range is a device configuration defect, not a mappable scale.
///
/// # Examples
///
/// ```
/// use dpcover::remap::to_normalized;
///
/// assert_eq!(to_normalized(25.0, 0, 100, false).unwrap(), 25);
/// assert_eq!(to_normalized(25.0, 0, 100, true).unwrap(), 75);
/// assert_eq!(to_normalized(130.0, 0, 100, false).unwrap(), 100);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn to_normalized(raw: f64, min: i64, max: i64, invert: bool) -> Result<u8, ValueError> {
    if min == max {
        return Err(ValueError::InvalidRange { min, max });
    }
    let (min, max) = (min as f64, max as f64);
    let clamped = raw.clamp(min.min(max), min.max(max));
    let pct = ((clamped - min) / (max - min) * 100.0).round();
    // Safe: pct is in [0, 100] after clamping
    let pct = pct as u8;
    Ok(if invert { 100 - pct } else { pct })
}

/// Converts a normalized 0-100 value back to the raw scale.
///
/// This is the exact algebraic inverse of [`to_normalized`] before
/// rounding; callers round the result to the raw type's granularity.
/// Normalized input above 100 is clamped.
///
/// # Errors
///
/// Returns [`ValueError::InvalidRange`] when `min == max`.
///
/// # Examples
///
/// ```
/// use dpcover::remap::from_normalized;
///
/// assert!((from_normalized(75, 0, 100, false).unwrap() - 75.0).abs() < f64::EPSILON);
/// assert!((from_normalized(75, 0, 100, true).unwrap() - 25.0).abs() < f64::EPSILON);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn from_normalized(pct: u8, min: i64, max: i64, invert: bool) -> Result<f64, ValueError> {
    if min == max {
        return Err(ValueError::InvalidRange { min, max });
    }
    let pct = f64::from(pct.min(100));
    let pct = if invert { 100.0 - pct } else { pct };
    let (min, max) = (min as f64, max as f64);
    Ok(min + pct / 100.0 * (max - min))
}

/// Rule determining whether raw-to-normalized mapping is reversed.
///
/// Per-category tables select one variant by data; adding a category never
/// adds a type. The conditional variant is re-evaluated against the live
/// status on **every** read and write, because the mode can change between
/// calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InversionPolicy {
    /// Mapping is never reversed.
    Never,
    /// Mapping is always reversed (the common case: vendor percent scales
    /// run opposite to the abstract open=100 scale).
    Always,
    /// Mapping is reversed unless a mode code currently reports the
    /// forward value.
    ConditionalOn {
        /// The mode data-point code to consult.
        mode_code: &'static str,
        /// The mode value that selects the forward (non-reversed) mapping.
        forward_value: &'static str,
    },
}

impl InversionPolicy {
    /// Evaluates the policy against the current device status.
    ///
    /// For [`InversionPolicy::ConditionalOn`], a missing or non-matching
    /// mode value selects the reversed mapping; only an exact report of
    /// `forward_value` selects forward.
    pub fn evaluate(&self, status: &impl StatusSource) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::ConditionalOn {
                mode_code,
                forward_value,
            } => status
                .dp_value(mode_code)
                .and_then(|value| value.as_enum().map(|mode| mode != *forward_value))
                .unwrap_or(true),
        }
    }
}
