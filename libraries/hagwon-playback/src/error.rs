//! Playback failure taxonomy
//!
//! Playback failures are never propagated as `Err` to command callers; they
//! are classified, reported once as a user-visible notification, and the
//! controller proceeds as if the item had completed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-facing notice emitted once per failed playback attempt
///
/// The viewer UI is Chinese; localization is out of scope, so the notice is
/// a fixed string regardless of failure kind.
pub const AUDIO_FAILURE_NOTICE: &str = "音频加载失败，请检查文件或重试";

/// Classification of a failed playback attempt
///
/// The `Display` form is the diagnostic (log-facing) description; the
/// user-facing text is [`AUDIO_FAILURE_NOTICE`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// The item's `audio_ref` was empty or absent
    #[error("audio reference is empty")]
    MissingAudio,

    /// The resource player reported a runtime error mid-play
    #[error("audio playback failed")]
    PlaybackError,

    /// The resource player could not start playback at all
    #[error("audio resource failed to load")]
    LoadFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_diagnostic_not_user_facing() {
        assert_eq!(
            FailureKind::MissingAudio.to_string(),
            "audio reference is empty"
        );
        assert_ne!(FailureKind::LoadFailure.to_string(), AUDIO_FAILURE_NOTICE);
    }
}
