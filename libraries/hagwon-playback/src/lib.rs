//! Hagwon - Playback Control
//!
//! Sequential audio playback for the e-textbook viewer.
//!
//! This crate provides:
//! - Single-item playback (one sentence or word at a time)
//! - Ordered sequence playback ("play all" for a lesson tab)
//! - Cooperative pause/cancel with immediate resource stop
//! - Last-writer-wins interruption (no queuing of play requests)
//! - Failure notifications that never halt a sequence
//!
//! # Architecture
//!
//! `hagwon-playback` is completely platform-agnostic:
//! - No dependency on any audio backend
//! - No dependency on the content layer (items arrive ready-made)
//! - No dependency on any UI framework
//!
//! Platform-specific audio output is provided via the [`AudioPlayer`] trait;
//! each attempt reports through an [`AudioHandle`] that resolves exactly
//! once. The controller guarantees that at most one handle is ever live and
//! that a superseded attempt's resolution is ignored.
//!
//! # Example: Sequence Playback
//!
//! ```rust
//! use std::sync::Arc;
//! use hagwon_playback::{PlayableItem, PlaybackController, SilentPlayer};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let controller = PlaybackController::new(Arc::new(SilentPlayer));
//!
//! // Play a lesson's sentences in order; the second one has no recording,
//! // so it is reported once and skipped.
//! let items = vec![
//!     PlayableItem::new(0, "resources/audio/book1/lesson1/s1.mp3"),
//!     PlayableItem::new(1, ""),
//!     PlayableItem::new(2, "resources/audio/book1/lesson1/s3.mp3"),
//! ];
//! controller.play_sequence(items).await;
//!
//! assert!(controller.is_idle());
//! # }
//! ```
//!
//! # Example: Observing State and Failures
//!
//! ```rust
//! use std::sync::Arc;
//! use hagwon_playback::{PlayableItem, PlaybackController, PlaybackEvent, SilentPlayer};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let controller = PlaybackController::new(Arc::new(SilentPlayer));
//! let mut events = controller.subscribe();
//!
//! controller.play_item(PlayableItem::new(3, "")).await;
//!
//! while let Ok(event) = events.try_recv() {
//!     match event {
//!         PlaybackEvent::StateChanged { state } => {
//!             println!("highlight: {:?}", state.active_index);
//!         }
//!         PlaybackEvent::PlaybackFailed { message, .. } => {
//!             println!("toast: {message}");
//!         }
//!     }
//! }
//! # }
//! ```

mod controller;
mod error;
mod events;
mod handle;
mod item;
mod player;
mod state;
mod token;

// Public exports
pub use controller::PlaybackController;
pub use error::{FailureKind, AUDIO_FAILURE_NOTICE};
pub use events::PlaybackEvent;
pub use handle::{AudioHandle, PlayOutcome};
pub use item::PlayableItem;
pub use player::{AudioPlayer, SilentPlayer};
pub use state::{PlaybackMode, PlaybackState};
pub use token::CancelToken;
