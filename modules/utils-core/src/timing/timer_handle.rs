//! Cancellation handle for scheduled timers.

use portable_atomic::{AtomicBool, Ordering};

use crate::sync::ArcShared;

/// Handle to a pending one-shot timer.
#[derive(Clone)]
pub struct TimerHandle {
  cancelled: ArcShared<AtomicBool>,
}

impl TimerHandle {
  /// Creates a handle around a shared cancellation flag.
  #[must_use]
  pub fn new(cancelled: ArcShared<AtomicBool>) -> Self {
    Self { cancelled }
  }

  /// Prevents the timer task from running if it has not fired yet.
  pub fn cancel(&self) {
    self.cancelled.store(true, Ordering::Release);
  }

  /// Returns `true` when the timer has been cancelled.
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    self.cancelled.load(Ordering::Acquire)
  }
}
