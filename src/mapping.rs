// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-category mapping rules.
//!
//! Each device category carries a static table of [`CoverDescription`]s,
//! one per cover channel the category can expose. A description names the
//! candidate data-point codes backing each abstract capability, the
//! inversion policy, and the discrete instruction literals. Adding a
//! category (or channel) is a data entry in this module, never a new type.
//!
//! Tables are transcriptions of observed vendor behavior. Where a vendor
//! percent scale runs opposite to the abstract open=100 scale, the rule
//! says [`InversionPolicy::Always`]; the curtain-switch category instead
//! follows its runtime `control_back_mode` setting.

use crate::remap::InversionPolicy;
use crate::types::{DeviceCategory, dpcode};

/// Abstract cover flavor a description maps to.
///
/// Informational hint for the hosting application (icons, semantics);
/// nothing in this library branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    /// Garage door.
    Garage,
    /// Curtain.
    Curtain,
    /// Blind.
    Blind,
}

/// Immutable mapping rule for one cover channel of a device category.
///
/// Created once in the static tables below and applied against a concrete
/// device's inventory at bind time; never mutated per device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverDescription {
    /// Primary instruction code; a device without it does not bind this
    /// description.
    pub key: &'static str,
    /// Abstract flavor of this channel.
    pub device_class: DeviceClass,
    /// Candidate codes reporting the discrete open/closed state, in
    /// preference order.
    pub current_state: &'static [&'static str],
    /// Flips the discrete state reading (e.g. door contacts report
    /// `true` when the door is *open*).
    pub current_state_inverse: bool,
    /// Candidate codes reporting the current position, in preference
    /// order.
    pub current_position: &'static [&'static str],
    /// Code accepting position writes.
    pub set_position: Option<&'static str>,
    /// Raw-to-normalized inversion rule for all position codes of this
    /// channel.
    pub inversion: InversionPolicy,
    /// Enum literal commanding open.
    pub open_instruction_value: &'static str,
    /// Enum literal commanding close.
    pub close_instruction_value: &'static str,
    /// Enum literal commanding stop.
    pub stop_instruction_value: &'static str,
}

impl CoverDescription {
    /// Baseline rule: no state or position codes, default instruction
    /// literals, reversed mapping.
    pub const DEFAULT: Self = Self {
        key: "",
        device_class: DeviceClass::Curtain,
        current_state: &[],
        current_state_inverse: false,
        current_position: &[],
        set_position: None,
        inversion: InversionPolicy::Always,
        open_instruction_value: "open",
        close_instruction_value: "close",
        stop_instruction_value: "stop",
    };
}

/// Garage door openers: boolean switch channels paired with door contact
/// sensors. The contact reports `true` for an *open* door, hence the
/// inverse flag. No position codes.
const CKMKZQ: &[CoverDescription] = &[
    CoverDescription {
        key: dpcode::SWITCH_1,
        device_class: DeviceClass::Garage,
        current_state: &[dpcode::DOORCONTACT_STATE],
        current_state_inverse: true,
        ..CoverDescription::DEFAULT
    },
    CoverDescription {
        key: dpcode::SWITCH_2,
        device_class: DeviceClass::Garage,
        current_state: &[dpcode::DOORCONTACT_STATE_2],
        current_state_inverse: true,
        ..CoverDescription::DEFAULT
    },
    CoverDescription {
        key: dpcode::SWITCH_3,
        device_class: DeviceClass::Garage,
        current_state: &[dpcode::DOORCONTACT_STATE_3],
        current_state_inverse: true,
        ..CoverDescription::DEFAULT
    },
];

/// Curtains. Position reads come from `percent_state` (the reported
/// actual position), never from the `percent_control` command echo.
const CL: &[CoverDescription] = &[
    CoverDescription {
        key: dpcode::CONTROL,
        current_state: &[dpcode::SITUATION_SET, dpcode::CONTROL],
        current_position: &[dpcode::PERCENT_STATE],
        set_position: Some(dpcode::PERCENT_CONTROL),
        ..CoverDescription::DEFAULT
    },
    CoverDescription {
        key: dpcode::CONTROL_2,
        current_position: &[dpcode::PERCENT_STATE_2],
        set_position: Some(dpcode::PERCENT_CONTROL_2),
        ..CoverDescription::DEFAULT
    },
    CoverDescription {
        key: dpcode::CONTROL_3,
        current_position: &[dpcode::PERCENT_STATE_3],
        set_position: Some(dpcode::PERCENT_CONTROL_3),
        ..CoverDescription::DEFAULT
    },
    CoverDescription {
        key: dpcode::MACH_OPERATE,
        current_position: &[dpcode::POSITION],
        set_position: Some(dpcode::POSITION),
        open_instruction_value: "FZ",
        close_instruction_value: "ZZ",
        stop_instruction_value: "STOP",
        ..CoverDescription::DEFAULT
    },
    // switch_1 is an undocumented code that behaves identically to
    // control. It is used by the Kogan Smart Blinds Driver.
    CoverDescription {
        key: dpcode::SWITCH_1,
        device_class: DeviceClass::Blind,
        current_position: &[dpcode::PERCENT_STATE],
        set_position: Some(dpcode::PERCENT_CONTROL),
        ..CoverDescription::DEFAULT
    },
];

/// Curtain switches: mapping direction follows the motor's runtime
/// `control_back_mode` setting, where `"back"` selects forward mapping.
const CLKG: &[CoverDescription] = &[
    CoverDescription {
        key: dpcode::CONTROL,
        current_position: &[dpcode::PERCENT_STATE],
        set_position: Some(dpcode::PERCENT_CONTROL),
        inversion: InversionPolicy::ConditionalOn {
            mode_code: dpcode::CONTROL_BACK_MODE,
            forward_value: "back",
        },
        ..CoverDescription::DEFAULT
    },
    CoverDescription {
        key: dpcode::CONTROL_2,
        current_position: &[dpcode::PERCENT_STATE_2],
        set_position: Some(dpcode::PERCENT_CONTROL_2),
        inversion: InversionPolicy::ConditionalOn {
            mode_code: dpcode::CONTROL_BACK_MODE,
            forward_value: "back",
        },
        ..CoverDescription::DEFAULT
    },
];

/// Curtain robots.
const JDCLJQR: &[CoverDescription] = &[CoverDescription {
    key: dpcode::CONTROL,
    current_position: &[dpcode::PERCENT_STATE],
    set_position: Some(dpcode::PERCENT_CONTROL),
    ..CoverDescription::DEFAULT
}];

/// Tilt angle candidates, shared across all categories.
pub const TILT_CANDIDATES: &[&str] = &[dpcode::ANGLE_HORIZONTAL, dpcode::ANGLE_VERTICAL];

/// Returns the mapping rules for a category, one per possible channel.
#[must_use]
pub const fn descriptions(category: DeviceCategory) -> &'static [CoverDescription] {
    match category {
        DeviceCategory::Ckmkzq => CKMKZQ,
        DeviceCategory::Cl => CL,
        DeviceCategory::Clkg => CLKG,
        DeviceCategory::Jdcljqr => JDCLJQR,
    }
}
