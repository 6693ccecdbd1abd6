//! Playback controller - core orchestration
//!
//! Serializes every audio playback request into a single active stream:
//! one item at a time, last writer wins, failures reported as notifications
//! instead of errors. All state transitions happen inside short synchronous
//! critical sections; the only suspension point is awaiting the current
//! attempt's outcome.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::error::{FailureKind, AUDIO_FAILURE_NOTICE};
use crate::events::PlaybackEvent;
use crate::handle::{AudioHandle, PlayOutcome};
use crate::item::PlayableItem;
use crate::player::AudioPlayer;
use crate::state::{PlaybackMode, PlaybackState};
use crate::token::CancelToken;

/// Capacity of the broadcast event channel
const EVENT_CHANNEL_CAPACITY: usize = 128;

/// Mutable controller state
///
/// Guarded by a plain mutex; never locked across an await.
#[derive(Debug, Default)]
struct ControllerState {
    /// Observable state (mode + active-item highlight)
    state: PlaybackState,

    /// Generation of the most recently begun playback operation
    ///
    /// Every operation records the generation it began under and re-checks
    /// it before touching state after an await, so resolutions from a
    /// superseded attempt are ignored.
    generation: u64,

    /// The live audio handle, if an attempt is in flight
    current: Option<AudioHandle>,

    /// Cancellation token of the in-flight sequence, if any
    sequence_token: Option<CancelToken>,
}

/// Sequential audio playback controller
///
/// Owns the "what is currently playing" state machine. Commands may be
/// issued concurrently from any task; the most recently issued command
/// always wins, interrupting whatever was active first (no queuing).
///
/// One controller is constructed per lesson view and dropped on view exit;
/// dropping stops any live playback.
pub struct PlaybackController {
    player: Arc<dyn AudioPlayer>,
    shared: Mutex<ControllerState>,
    events: broadcast::Sender<PlaybackEvent>,
}

impl PlaybackController {
    /// Create an idle controller on top of an audio player backend
    pub fn new(player: Arc<dyn AudioPlayer>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            player,
            shared: Mutex::new(ControllerState::default()),
            events,
        }
    }

    // ===== Playback Control =====

    /// Play a single item, interrupting whatever is active
    ///
    /// Sets `SingleItem` mode with the item's index highlighted, plays the
    /// item to resolution, then returns to idle. An empty `audio_ref` or a
    /// failed attempt emits one failure notification and still returns to
    /// idle; this method never reports an error to the caller.
    ///
    /// The returned future resolves when the attempt has settled; callers
    /// that want fire-and-forget semantics can spawn it.
    pub async fn play_item(&self, item: PlayableItem) {
        info!("Playing item {}", item.index);

        let (generation, pending) = {
            let mut shared = self.lock();
            let generation = Self::interrupt(&mut shared);
            self.set_state(&mut shared, PlaybackState::single_item(item.index));
            let pending = self.begin_attempt(&mut shared, &item);
            (generation, pending)
        };

        let outcome = match pending {
            Some(handle) => handle.outcome().await,
            None => PlayOutcome::Failed(FailureKind::MissingAudio),
        };

        let mut shared = self.lock();
        if shared.generation != generation {
            debug!("Ignoring stale resolution for item {}", item.index);
            return;
        }
        shared.current = None;
        if let PlayOutcome::Failed(kind) = outcome {
            self.emit_failure(item.index, kind);
        }
        self.set_state(&mut shared, PlaybackState::idle());
    }

    /// Play an ordered sequence of items back-to-back
    ///
    /// Interrupts whatever is active, then plays each item to resolution
    /// before advancing; no two items' playback windows ever overlap. A
    /// failed or audio-less item emits one failure notification and counts
    /// as completed. The cancellation token installed here is checked at
    /// every iteration boundary; `pause_sequence` cancels it.
    ///
    /// An empty `items` is a no-op: no state change, no events.
    pub async fn play_sequence(&self, items: Vec<PlayableItem>) {
        let Some(first) = items.first() else {
            debug!("Ignoring empty sequence");
            return;
        };
        info!("Playing sequence of {} items", items.len());

        let (generation, token) = {
            let mut shared = self.lock();
            let generation = Self::interrupt(&mut shared);
            let token = CancelToken::new();
            shared.sequence_token = Some(token.clone());
            self.set_state(&mut shared, PlaybackState::sequence(first.index));
            (generation, token)
        };

        for item in &items {
            let pending = {
                let mut shared = self.lock();
                if shared.generation != generation {
                    debug!("Sequence superseded before item {}", item.index);
                    return;
                }
                if token.is_cancelled() {
                    return;
                }
                self.set_state(&mut shared, PlaybackState::sequence(item.index));
                self.begin_attempt(&mut shared, item)
            };

            let outcome = match pending {
                Some(handle) => handle.outcome().await,
                None => PlayOutcome::Failed(FailureKind::MissingAudio),
            };

            {
                let mut shared = self.lock();
                if shared.generation != generation {
                    debug!("Ignoring stale resolution for item {}", item.index);
                    return;
                }
                shared.current = None;
                if token.is_cancelled() {
                    // Paused mid-item; the stopped attempt's outcome is not
                    // surfaced.
                    return;
                }
                if let PlayOutcome::Failed(kind) = outcome {
                    self.emit_failure(item.index, kind);
                }
            }
        }

        let mut shared = self.lock();
        if shared.generation != generation || token.is_cancelled() {
            return;
        }
        shared.sequence_token = None;
        self.set_state(&mut shared, PlaybackState::idle());
        debug!("Sequence finished");
    }

    /// Cancel the in-flight sequence and stop the current item immediately
    ///
    /// Synchronous: by the time this returns the mode is `Idle` and no
    /// further items from the sequence will begin. Calling outside
    /// `Sequence` mode is a no-op (no state change, no notification).
    pub fn pause_sequence(&self) {
        let mut shared = self.lock();
        if shared.state.mode != PlaybackMode::Sequence {
            debug!("Pause outside sequence playback is a no-op");
            return;
        }
        info!("Pausing sequence at item {:?}", shared.state.active_index);

        if let Some(token) = shared.sequence_token.take() {
            token.cancel();
        }
        if let Some(handle) = shared.current.take() {
            handle.stop();
        }
        self.set_state(&mut shared, PlaybackState::idle());
    }

    /// Release the current audio handle, if any
    ///
    /// Interruption primitive shared by the play commands: ends the current
    /// attempt without touching the mode or cancelling a sequence (a
    /// sequence advances past an item stopped this way; `pause_sequence`
    /// ends the whole sequence). Always safe to call when nothing is
    /// playing.
    pub fn stop_all(&self) {
        let mut shared = self.lock();
        if let Some(handle) = shared.current.take() {
            handle.stop();
        }
    }

    // ===== State Queries =====

    /// Snapshot of the observable state
    pub fn state(&self) -> PlaybackState {
        self.lock().state
    }

    /// True when nothing is playing
    pub fn is_idle(&self) -> bool {
        self.state().is_idle()
    }

    /// Subscribe to controller events
    ///
    /// Subscribers receive `StateChanged` and `PlaybackFailed` events from
    /// the point of subscription onward; use [`Self::state`] for the
    /// current snapshot.
    pub fn subscribe(&self) -> broadcast::Receiver<PlaybackEvent> {
        self.events.subscribe()
    }

    // ===== Internals =====

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.shared.lock().unwrap()
    }

    /// Supersede whatever is in flight
    ///
    /// Bumps the generation (staling every older attempt), cancels any
    /// sequence token, and stops the live handle. Returns the new
    /// generation. The stop happens before the caller starts its own
    /// attempt, so no two handles are ever live at once.
    fn interrupt(shared: &mut ControllerState) -> u64 {
        shared.generation += 1;
        if let Some(token) = shared.sequence_token.take() {
            token.cancel();
        }
        if let Some(handle) = shared.current.take() {
            handle.stop();
        }
        shared.generation
    }

    /// Start the item's playback attempt and install its handle
    ///
    /// Returns `None` for items without audio; those are settled as
    /// `MissingAudio` failures without involving the player.
    fn begin_attempt(
        &self,
        shared: &mut ControllerState,
        item: &PlayableItem,
    ) -> Option<AudioHandle> {
        if !item.has_audio() {
            return None;
        }
        let handle = self.player.start(&item.audio_ref);
        shared.current = Some(handle.clone());
        Some(handle)
    }

    // ===== Events =====

    /// Apply and broadcast a state change, skipping no-op transitions
    fn set_state(&self, shared: &mut ControllerState, state: PlaybackState) {
        if shared.state != state {
            shared.state = state;
            let _ = self.events.send(PlaybackEvent::StateChanged { state });
        }
    }

    /// Broadcast one failure notification
    fn emit_failure(&self, index: usize, kind: FailureKind) {
        warn!("Playback attempt for item {} failed: {}", index, kind);
        let _ = self.events.send(PlaybackEvent::PlaybackFailed {
            index,
            kind,
            message: AUDIO_FAILURE_NOTICE.to_string(),
        });
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        if let Ok(mut shared) = self.shared.lock() {
            if let Some(token) = shared.sequence_token.take() {
                token.cancel();
            }
            if let Some(handle) = shared.current.take() {
                handle.stop();
            }
        }
    }
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::SilentPlayer;

    fn controller() -> PlaybackController {
        PlaybackController::new(Arc::new(SilentPlayer))
    }

    #[tokio::test]
    async fn starts_idle() {
        let controller = controller();
        assert!(controller.is_idle());
        assert_eq!(controller.state(), PlaybackState::idle());
    }

    #[tokio::test]
    async fn single_item_returns_to_idle() {
        let controller = controller();
        controller.play_item(PlayableItem::new(4, "a.mp3")).await;
        assert!(controller.is_idle());
    }

    #[tokio::test]
    async fn empty_audio_ref_notifies_and_idles() {
        let controller = controller();
        let mut events = controller.subscribe();

        controller.play_item(PlayableItem::new(0, "")).await;
        assert!(controller.is_idle());

        let mut failures = 0;
        while let Ok(event) = events.try_recv() {
            if let PlaybackEvent::PlaybackFailed { index, kind, message } = event {
                failures += 1;
                assert_eq!(index, 0);
                assert_eq!(kind, FailureKind::MissingAudio);
                assert_eq!(message, AUDIO_FAILURE_NOTICE);
            }
        }
        assert_eq!(failures, 1);
    }

    #[tokio::test]
    async fn empty_sequence_is_a_no_op() {
        let controller = controller();
        let mut events = controller.subscribe();

        controller.play_sequence(Vec::new()).await;

        assert!(controller.is_idle());
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn pause_when_idle_is_a_no_op() {
        let controller = controller();
        let mut events = controller.subscribe();

        controller.pause_sequence();
        controller.stop_all();

        assert_eq!(controller.state(), PlaybackState::idle());
        assert!(events.try_recv().is_err());
    }
}
