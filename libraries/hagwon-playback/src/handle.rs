//! Live handle to one audio playback attempt
//!
//! A handle is created per attempt and resolved exactly once with a
//! [`PlayOutcome`]. The controller keeps a clone so it can stop the attempt
//! when interrupted; the player backend keeps a clone to report the outcome.
//! Stopping is synchronous, idempotent, and releases any waiter promptly.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::FailureKind;

/// Tagged result of one playback attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// Playback reached the natural end of the resource
    Completed,

    /// The attempt failed to start or aborted with an error
    Failed(FailureKind),
}

#[derive(Debug, Clone, Copy, Default)]
struct AttemptState {
    stop_requested: bool,
    outcome: Option<PlayOutcome>,
}

/// Handle to one in-flight playback attempt
///
/// Cheap to clone; all clones refer to the same attempt. The attempt
/// resolves exactly once: the first of `resolve` or `stop` wins and later
/// calls are ignored.
#[derive(Debug, Clone)]
pub struct AudioHandle {
    inner: Arc<watch::Sender<AttemptState>>,
}

impl AudioHandle {
    /// Create a handle for a new, unresolved attempt
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(AttemptState::default());
        Self {
            inner: Arc::new(tx),
        }
    }

    /// Request stop
    ///
    /// Synchronous and idempotent. A still-pending attempt is resolved as
    /// `Completed` so that waiters are released immediately; an attempt that
    /// already resolved keeps its outcome.
    pub fn stop(&self) {
        self.inner.send_modify(|state| {
            state.stop_requested = true;
            if state.outcome.is_none() {
                state.outcome = Some(PlayOutcome::Completed);
            }
        });
    }

    /// True once stop has been requested
    pub fn is_stopped(&self) -> bool {
        self.inner.borrow().stop_requested
    }

    /// Resolve the attempt (player backend side)
    ///
    /// Only the first resolution takes effect.
    pub fn resolve(&self, outcome: PlayOutcome) {
        self.inner.send_modify(|state| {
            if state.outcome.is_none() {
                state.outcome = Some(outcome);
            }
        });
    }

    /// True once the attempt has resolved
    pub fn is_resolved(&self) -> bool {
        self.inner.borrow().outcome.is_some()
    }

    /// Wait for the attempt to resolve
    pub async fn outcome(&self) -> PlayOutcome {
        let mut rx = self.inner.subscribe();
        let outcome = match rx.wait_for(|state| state.outcome.is_some()).await {
            Ok(state) => state
                .outcome
                .unwrap_or(PlayOutcome::Failed(FailureKind::PlaybackError)),
            Err(_) => PlayOutcome::Failed(FailureKind::PlaybackError),
        };
        outcome
    }

    /// Wait for a stop request (player backend side)
    ///
    /// Backends that play for real should race this against their own
    /// end-of-resource signal and silence the resource when stop wins.
    pub async fn stopped(&self) {
        let mut rx = self.inner.subscribe();
        let _ = rx.wait_for(|state| state.stop_requested).await;
    }
}

impl Default for AudioHandle {
    fn default() -> Self {
        Self::new()
    }
}
