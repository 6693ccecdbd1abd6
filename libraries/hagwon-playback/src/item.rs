//! Playable item supplied by the content layer

use serde::{Deserialize, Serialize};

/// One unit of audio-bearing content (a sentence or a word)
///
/// Items are produced by the content layer and consumed by the controller;
/// the controller never mutates them. `index` is the item's stable position
/// within its own sequence and is what the view highlights while the item
/// plays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayableItem {
    /// Position within the item's sequence (0-based)
    pub index: usize,

    /// Audio resource locator; may be empty when the unit has no recording
    pub audio_ref: String,
}

impl PlayableItem {
    /// Create a new playable item
    pub fn new(index: usize, audio_ref: impl Into<String>) -> Self {
        Self {
            index,
            audio_ref: audio_ref.into(),
        }
    }

    /// True if the item carries an audio resource locator
    ///
    /// The controller only ever checks emptiness; it does not validate the
    /// locator format.
    pub fn has_audio(&self) -> bool {
        !self.audio_ref.is_empty()
    }
}
