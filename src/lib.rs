// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `dpcover` - Rust library normalizing vendor data-point telemetry into
//! an abstract motorized-cover model.
//!
//! Vendor devices speak in keyed "data points" (DPs): per-category code
//! names with boolean, enumeration, or ranged-integer values. This library
//! maps that protocol onto a single cover model - position 0-100, tilt,
//! and discrete open/close/stop - and back:
//!
//! - **Binding**: per-category mapping rules are resolved against a
//!   device's declared inventory once, yielding the backing codes and the
//!   supported capability set
//! - **Reads**: raw values remap to the normalized 0-100 scale under
//!   per-category (and runtime-mode-dependent) inversion rules; the
//!   open/closed state resolves from partial, sometimes-conflicting
//!   signals
//! - **Commands**: open/close/stop/set-position/set-tilt produce pure
//!   `{code, value}` batches for the vendor SDK to submit
//! - **Polling**: a shared throttle lets many concurrently polling cover
//!   entities fund one bulk refresh per window
//!
//! Transport, discovery, and entity lifecycle stay with the hosting
//! application and the vendor SDK.
//!
//! # Quick Start
//!
//! ## Binding and reading
//!
//! ```
//! use std::collections::HashMap;
//!
//! use dpcover::inventory::{CodeDescriptor, DeviceInventory, IntegerSpec};
//! use dpcover::types::{DeviceCategory, DpValue};
//! use dpcover::{Cover, CoverState};
//!
//! # fn main() -> dpcover::Result<()> {
//! // The device registry supplies what the device declares.
//! let mut inventory = DeviceInventory::new();
//! inventory.insert_function("control", CodeDescriptor::enumeration(["open", "close", "stop"]));
//! inventory.insert_function("percent_control", CodeDescriptor::integer(IntegerSpec::new(0, 100)));
//! inventory.insert_status("percent_state", CodeDescriptor::integer(IntegerSpec::new(0, 100)));
//!
//! let covers = Cover::bind_category(DeviceCategory::Cl, &inventory)?;
//! let cover = &covers[0];
//!
//! // Reads are pure lookups into the host's cached status.
//! let mut status: HashMap<String, DpValue> = HashMap::new();
//! status.insert("percent_state".to_string(), DpValue::Integer(100));
//! assert_eq!(cover.state(&status), CoverState::Closed);
//!
//! // Commands are pure data for the vendor SDK.
//! let batch = cover.open_command(&status)?;
//! assert_eq!(batch.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Shared polling
//!
//! ```
//! use dpcover::refresh::{RefreshOutcome, RefreshThrottle, ScopeId};
//! use tokio::time::Instant;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), &'static str> {
//! let throttle = RefreshThrottle::default();
//!
//! // Every cover entity polls; only the first caller per window pays
//! // for the bulk refresh.
//! let outcome = throttle
//!     .request_refresh(ScopeId::new(1), Instant::now(), || async {
//!         // vendor_sdk.update_device_cache().await
//!         Ok(())
//!     })
//!     .await?;
//! assert_eq!(outcome, RefreshOutcome::Refreshed);
//! # Ok(())
//! # }
//! ```

pub mod binding;
mod capabilities;
pub mod command;
pub mod cover;
pub mod error;
pub mod inventory;
pub mod mapping;
pub mod refresh;
pub mod remap;
pub mod resolver;
pub mod state;
pub mod types;

pub use binding::PositionBinding;
pub use capabilities::{CoverCapabilities, CoverOperation};
pub use command::{CommandBatch, CommandPair};
pub use cover::Cover;
pub use error::{CommandError, Error, Result, ValueError};
pub use inventory::{
    CodeDescriptor, DeviceInventory, DpKind, EnumSpec, IntegerSpec, StatusSource,
};
pub use mapping::{CoverDescription, DeviceClass};
pub use refresh::{DEFAULT_THROTTLE_WINDOW, RefreshOutcome, RefreshThrottle, ScopeId};
pub use remap::InversionPolicy;
pub use state::CoverState;
pub use types::{DeviceCategory, DpValue, Position};
