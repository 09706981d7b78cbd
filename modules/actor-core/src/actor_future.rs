//! Single-completion future primitive used by the ask machinery.

use core::hint::spin_loop;

use cygnet_utils_core_rs::sync::{ArcShared, SpinSyncMutex};

struct ActorFutureState<T> {
  value:     Option<T>,
  completed: bool,
}

impl<T> ActorFutureState<T> {
  const fn new() -> Self {
    Self { value: None, completed: false }
  }
}

/// Cooperative future completed at most once.
///
/// The first completion wins; every later completion attempt is discarded.
/// This is what makes late ask replies after a timeout disappear silently.
pub struct ActorFuture<T> {
  state: ArcShared<SpinSyncMutex<ActorFutureState<T>>>,
}

impl<T> ActorFuture<T> {
  /// Creates a pending future.
  #[must_use]
  pub fn pending() -> Self {
    Self { state: ArcShared::new(SpinSyncMutex::new(ActorFutureState::new())) }
  }

  /// Completes the future, returning `true` when this call won the race.
  pub fn complete(&self, value: T) -> bool {
    let mut guard = self.state.lock();
    if guard.completed {
      return false;
    }
    guard.value = Some(value);
    guard.completed = true;
    true
  }

  /// Returns `true` when a value has been written.
  #[must_use]
  pub fn is_completed(&self) -> bool {
    self.state.lock().completed
  }

  /// Attempts to take the value; returns `None` while still pending.
  pub fn try_take(&self) -> Option<T> {
    let mut guard = self.state.lock();
    if guard.completed { guard.value.take() } else { None }
  }

  /// Busy waits until the value is available and then consumes it.
  pub fn wait(&self) -> T {
    loop {
      if let Some(value) = self.try_take() {
        return value;
      }
      spin_loop();
    }
  }
}

impl<T> Default for ActorFuture<T> {
  fn default() -> Self {
    Self::pending()
  }
}

impl<T> Clone for ActorFuture<T> {
  fn clone(&self) -> Self {
    Self { state: self.state.clone() }
  }
}

#[cfg(test)]
mod tests;
