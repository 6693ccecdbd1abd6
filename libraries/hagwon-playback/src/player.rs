//! Audio player seam
//!
//! The controller does not decode or output audio itself; it drives an
//! [`AudioPlayer`], the platform capability that turns an audio resource
//! locator into sound. Real backends live outside this crate; a silent
//! backend ships here for headless use and tests.

use crate::handle::{AudioHandle, PlayOutcome};

/// Platform capability for starting audio playback attempts
///
/// `start` must return promptly: the attempt itself runs in the background
/// and reports through the returned handle, which resolves exactly once with
/// natural completion, a load failure, or a runtime error. Backends should
/// watch [`AudioHandle::stopped`] and silence the resource when a stop is
/// requested; the handle itself already releases waiters on stop.
///
/// `start` is never called with an empty `audio_ref`; the controller
/// reports those as failures without involving the player.
pub trait AudioPlayer: Send + Sync {
    /// Begin a playback attempt for `audio_ref`
    fn start(&self, audio_ref: &str) -> AudioHandle;
}

/// Player that completes every attempt immediately, producing no sound
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl AudioPlayer for SilentPlayer {
    fn start(&self, _audio_ref: &str) -> AudioHandle {
        let handle = AudioHandle::new();
        handle.resolve(PlayOutcome::Completed);
        handle
    }
}
