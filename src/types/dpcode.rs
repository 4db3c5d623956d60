// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Well-known vendor data-point code names.
//!
//! Data-point codes are plain string identifiers declared by each device.
//! The constants here cover the codes the category mapping tables refer to;
//! devices are free to declare any subset (or additional codes this library
//! never touches).

/// Primary curtain control instruction (`open`/`close`/`stop` enum).
pub const CONTROL: &str = "control";
/// Second-channel curtain control instruction.
pub const CONTROL_2: &str = "control_2";
/// Third-channel curtain control instruction.
pub const CONTROL_3: &str = "control_3";

/// First switch channel (garage doors, some blind drivers).
pub const SWITCH_1: &str = "switch_1";
/// Second switch channel.
pub const SWITCH_2: &str = "switch_2";
/// Third switch channel.
pub const SWITCH_3: &str = "switch_3";

/// Door contact sensor for the first door.
pub const DOORCONTACT_STATE: &str = "doorcontact_state";
/// Door contact sensor for the second door.
pub const DOORCONTACT_STATE_2: &str = "doorcontact_state_2";
/// Door contact sensor for the third door.
pub const DOORCONTACT_STATE_3: &str = "doorcontact_state_3";

/// Target position write for the first channel.
pub const PERCENT_CONTROL: &str = "percent_control";
/// Target position write for the second channel.
pub const PERCENT_CONTROL_2: &str = "percent_control_2";
/// Target position write for the third channel.
pub const PERCENT_CONTROL_3: &str = "percent_control_3";

/// Reported actual position for the first channel.
pub const PERCENT_STATE: &str = "percent_state";
/// Reported actual position for the second channel.
pub const PERCENT_STATE_2: &str = "percent_state_2";
/// Reported actual position for the third channel.
pub const PERCENT_STATE_3: &str = "percent_state_3";

/// Combined position code used by `mach_operate` curtains for both read
/// and write.
pub const POSITION: &str = "position";

/// Alternate curtain instruction with `FZ`/`ZZ`/`STOP` literals.
pub const MACH_OPERATE: &str = "mach_operate";

/// Curtain situation report (`fully_open`/`fully_close`).
pub const SITUATION_SET: &str = "situation_set";

/// Motor travel direction mode; `"back"` selects the forward mapping.
pub const CONTROL_BACK_MODE: &str = "control_back_mode";

/// Horizontal tilt angle.
pub const ANGLE_HORIZONTAL: &str = "angle_horizontal";
/// Vertical tilt angle.
pub const ANGLE_VERTICAL: &str = "angle_vertical";
