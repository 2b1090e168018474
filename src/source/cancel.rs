//! Cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A flag that asks in-flight hash computations to stop.
///
/// Clones share the same flag. Sources check it before every chunk read; a
/// cancelled computation discards its partial state and reports
/// [`HashError::Cancelled`](crate::HashError::Cancelled) instead of a value.
///
/// # Example
///
/// ```
/// use hashrs::{CancellationToken, Crc, HashError, HashFunction};
///
/// let token = CancellationToken::new();
/// token.cancel();
///
/// let crc = Crc::default();
/// let result = crc.compute_hash_reader_with(&b"data"[..], &token);
/// assert!(matches!(result, Err(HashError::Cancelled)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of every computation observing this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns true once [`cancel`](Self::cancel) was called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
