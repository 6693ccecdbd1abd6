//! Playback events
//!
//! Event-based communication for UI synchronization. Events are emitted at
//! key points:
//! - State changes (mode and active-item highlight)
//! - Playback failures (one notification per failed attempt)

use serde::{Deserialize, Serialize};

use crate::error::FailureKind;
use crate::state::PlaybackState;

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Observable state changed
    ///
    /// Carries the full new state so late subscribers can render from any
    /// single event.
    StateChanged {
        /// The new controller state
        state: PlaybackState,
    },

    /// One playback attempt failed
    ///
    /// Emitted at most once per attempted item. The sequence (or the
    /// single-item call) proceeds as if the item had completed.
    PlaybackFailed {
        /// Sequence position of the failed item
        index: usize,

        /// Failure classification
        kind: FailureKind,

        /// User-facing notice, ready for display as a transient toast
        message: String,
    },
}
