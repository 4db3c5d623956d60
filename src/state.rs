// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Open/closed state resolution.
//!
//! A cover's abstract state is derived from two partial, sometimes
//! conflicting signals: a normalized position and a discrete state report.
//! The priority rule is fixed: position strictly dominates, the discrete
//! signal is consulted only when no position is available, and the
//! `"stop"` sentinel on the discrete code carries no endpoint information
//! at all (a cover halted mid-travel is neither open nor closed).

use crate::types::{DpValue, Position};

/// Raw discrete-state values that mean "closed" before inversion.
const CLOSED_LITERALS: [&str; 2] = ["close", "fully_close"];

/// The transient discrete value that must be treated as no information.
const STOP_SENTINEL: &str = "stop";

/// Abstract open/closed state of a cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverState {
    /// The cover is at (or reports) the closed endpoint.
    Closed,
    /// The cover is away from the closed endpoint.
    Open,
    /// Neither signal allows a conclusion.
    Unknown,
}

impl CoverState {
    /// Returns `Some(true)` for closed, `Some(false)` for open, `None`
    /// for unknown.
    #[must_use]
    pub const fn is_closed(&self) -> Option<bool> {
        match self {
            Self::Closed => Some(true),
            Self::Open => Some(false),
            Self::Unknown => None,
        }
    }
}

/// Resolves the abstract state from the available signals.
///
/// Priority order:
///
/// 1. A position, when obtainable, decides alone: closed iff it is 0.
/// 2. Otherwise a discrete state value decides, unless it is the `"stop"`
///    sentinel: closed iff the raw value is `true`, `"close"` or
///    `"fully_close"`, flipped by `inverse`.
/// 3. Otherwise the state is unknown.
pub(crate) fn resolve_state(
    position: Option<Position>,
    discrete: Option<&DpValue>,
    inverse: bool,
) -> CoverState {
    if let Some(position) = position {
        return if position.is_closed() {
            CoverState::Closed
        } else {
            CoverState::Open
        };
    }

    match discrete {
        Some(DpValue::Enum(literal)) if literal == STOP_SENTINEL => CoverState::Unknown,
        Some(value) => {
            let closed_raw = match value {
                DpValue::Bool(b) => *b,
                DpValue::Enum(literal) => CLOSED_LITERALS.contains(&literal.as_str()),
                DpValue::Integer(_) => false,
            };
            if inverse != closed_raw {
                CoverState::Closed
            } else {
                CoverState::Open
            }
        }
        None => CoverState::Unknown,
    }
}
