// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared refresh throttling.
//!
//! The vendor cloud does not push status updates for some categories, so
//! every cover entity polls. The bulk refresh behind that poll updates
//! *all* devices of a manager scope at once; with dozens of entities
//! polling on the same cadence, running it once per entity would hammer
//! the backend for no benefit. [`RefreshThrottle`] ensures the refresh
//! runs at most once per window per scope: exactly one caller pays the
//! cost, everyone else observes the result through the shared status
//! cache.
//!
//! # Examples
//!
//! ```
//! use dpcover::refresh::{RefreshOutcome, RefreshThrottle, ScopeId};
//! use tokio::time::Instant;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), &'static str> {
//! let throttle = RefreshThrottle::default();
//! let scope = ScopeId::new(1);
//!
//! let outcome = throttle
//!     .request_refresh(scope, Instant::now(), || async { Ok(()) })
//!     .await?;
//! assert_eq!(outcome, RefreshOutcome::Refreshed);
//!
//! // A second caller inside the window skips without touching the
//! // backend.
//! let outcome = throttle
//!     .request_refresh(scope, Instant::now(), || async { Ok(()) })
//!     .await?;
//! assert_eq!(outcome, RefreshOutcome::Skipped);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

/// Identifies one device-manager scope (e.g. one vendor account).
///
/// All entities under the same scope share one throttled refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u64);

impl ScopeId {
    /// Creates a scope identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ScopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scope({})", self.0)
    }
}

/// Outcome of a refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// This caller performed the refresh.
    Refreshed,
    /// A refresh ran recently enough; nothing was done.
    Skipped,
}

/// Default throttle window: five seconds under the typical 30-second host
/// poll cadence, so a window never straddles two poll cycles.
pub const DEFAULT_THROTTLE_WINDOW: Duration = Duration::from_secs(25);

/// Per-scope timestamp of the last refresh attempt.
///
/// The per-scope async mutex serializes the whole read-decide-invoke-write
/// sequence: two callers racing on a stale "due" decision cannot both
/// invoke the refresh.
type ScopeSlot = Arc<tokio::sync::Mutex<Option<Instant>>>;

/// Coordinates the shared bulk refresh across concurrently polling
/// entities.
///
/// One instance lives per process (or per hosting integration); scopes are
/// created lazily on first request and dropped via
/// [`forget_scope`](Self::forget_scope) when their manager goes away.
#[derive(Debug)]
pub struct RefreshThrottle {
    window: Duration,
    scopes: Mutex<HashMap<ScopeId, ScopeSlot>>,
}

impl Default for RefreshThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_WINDOW)
    }
}

impl RefreshThrottle {
    /// Creates a throttle with a custom window.
    ///
    /// Choose a window shorter than the cadence driving the callers;
    /// otherwise a window can straddle two poll cycles and an update is
    /// missed.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            scopes: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the configured window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Requests a refresh for a scope, running `do_refresh` only when the
    /// window has elapsed since the last attempt.
    ///
    /// The timestamp advances on every attempt, successful or not, so a
    /// failing backend is retried once per window rather than once per
    /// poll.
    ///
    /// # Errors
    ///
    /// Propagates the error of `do_refresh`; the caller learns the
    /// refresh ran and failed, never a false `Refreshed`.
    pub async fn request_refresh<F, Fut, E>(
        &self,
        scope: ScopeId,
        now: Instant,
        do_refresh: F,
    ) -> Result<RefreshOutcome, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let slot = Arc::clone(self.scopes.lock().entry(scope).or_default());

        let mut last = slot.lock().await;
        if let Some(previous) = *last
            && now.duration_since(previous) < self.window
        {
            tracing::trace!(%scope, "refresh skipped, window not yet elapsed");
            return Ok(RefreshOutcome::Skipped);
        }

        // Claim the window before invoking; a failure must not reopen it.
        *last = Some(now);
        tracing::debug!(%scope, "performing shared device refresh");
        do_refresh().await?;
        Ok(RefreshOutcome::Refreshed)
    }

    /// Drops the throttle state for a scope.
    ///
    /// Call when the corresponding device manager is torn down; a later
    /// request recreates the scope with no history.
    pub fn forget_scope(&self, scope: ScopeId) {
        self.scopes.lock().remove(&scope);
    }
}
