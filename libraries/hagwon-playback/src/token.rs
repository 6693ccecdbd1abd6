//! Cooperative cancellation token
//!
//! A sequence run owns one token; `pause_sequence` cancels it and the
//! sequencing loop checks it at every iteration boundary. Cancellation takes
//! effect at the next boundary, never mid-item (the current item is ended by
//! stopping its handle instead).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation token shared between a sequence run and its canceller
///
/// Clones observe the same flag. Cancelling is idempotent and never blocks.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// True once cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
