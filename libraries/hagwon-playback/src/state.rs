//! Observable controller state
//!
//! The view renders exactly two things from the controller: which playback
//! mode is active and which item is highlighted. Both live in
//! `PlaybackState`, snapshot-able at any time and carried by every
//! `StateChanged` event.

use serde::{Deserialize, Serialize};

/// Playback mode of the controller
///
/// Exactly one mode is active at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackMode {
    /// Nothing is playing
    #[default]
    Idle,

    /// One item is playing on its own
    SingleItem,

    /// An ordered sequence of items is playing back-to-back
    Sequence,
}

/// Observable playback state: mode plus the active item highlight
///
/// Invariant: `active_index` is `Some` exactly when `mode != Idle`. The
/// constructors below are the only ways state is built, which keeps the
/// invariant by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Active playback mode
    pub mode: PlaybackMode,

    /// Sequence position of the item currently playing, if any
    pub active_index: Option<usize>,
}

impl PlaybackState {
    /// State with nothing playing
    pub fn idle() -> Self {
        Self {
            mode: PlaybackMode::Idle,
            active_index: None,
        }
    }

    /// State for a lone item being played
    pub fn single_item(index: usize) -> Self {
        Self {
            mode: PlaybackMode::SingleItem,
            active_index: Some(index),
        }
    }

    /// State for a sequence currently at `index`
    pub fn sequence(index: usize) -> Self {
        Self {
            mode: PlaybackMode::Sequence,
            active_index: Some(index),
        }
    }

    /// True when nothing is playing
    pub fn is_idle(&self) -> bool {
        self.mode == PlaybackMode::Idle
    }
}
