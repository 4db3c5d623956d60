// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the cover model.
//!
//! # Types
//!
//! - [`Position`] - Normalized cover position (0-100%)
//! - [`DpValue`] - Raw data-point value (boolean, integer, or enum literal)
//! - [`DeviceCategory`] - Vendor device category with cover semantics
//! - [`dpcode`] - Well-known data-point code name constants

mod category;
mod dp_value;
pub mod dpcode;
mod position;

pub use category::DeviceCategory;
pub use dp_value::DpValue;
pub use position::Position;
