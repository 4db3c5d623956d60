// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability resolution.
//!
//! Mapping rules name *candidate* data-point codes in preference order;
//! which one actually backs a capability depends on what the concrete
//! device declares. [`resolve`] picks the single applicable code from a
//! candidate list against a device's inventory.

use crate::inventory::DeviceInventory;

/// Picks the code backing a capability from an ordered candidate list.
///
/// With `prefer_writable` set, a writable match anywhere in the candidate
/// list takes precedence over a status-only match: the writable sets are
/// searched across all candidates first, and status-only declarations are
/// the fallback when no candidate is writable. Without it, the first
/// candidate declared in either set wins.
///
/// Returns `None` when no candidate is declared; that is a normal outcome
/// (the capability is simply not present on this device), not an error.
///
/// # Examples
///
/// ```
/// use dpcover::inventory::{CodeDescriptor, DeviceInventory, IntegerSpec};
/// use dpcover::resolver::resolve;
///
/// let mut inventory = DeviceInventory::new();
/// inventory.insert_status("percent_state", CodeDescriptor::integer(IntegerSpec::new(0, 100)));
/// inventory.insert_function("position", CodeDescriptor::integer(IntegerSpec::new(0, 100)));
///
/// let candidates = ["percent_state", "position"];
/// assert_eq!(resolve(&inventory, &candidates, true), Some("position"));
/// assert_eq!(resolve(&inventory, &candidates, false), Some("percent_state"));
/// ```
#[must_use]
pub fn resolve<'a>(
    inventory: &DeviceInventory,
    candidates: &[&'a str],
    prefer_writable: bool,
) -> Option<&'a str> {
    let resolved = if prefer_writable {
        candidates
            .iter()
            .find(|code| inventory.is_writable(code))
            .or_else(|| candidates.iter().find(|code| inventory.is_status_only(code)))
            .copied()
    } else {
        candidates
            .iter()
            .find(|code| inventory.contains(code))
            .copied()
    };

    if resolved.is_none() && !candidates.is_empty() {
        tracing::trace!(candidates = ?candidates, "no candidate code declared by device");
    }
    resolved
}
