//! Hand-driven timer for deterministic tests.

use alloc::vec::Vec;
use core::time::Duration;

use portable_atomic::{AtomicBool, Ordering};

use crate::sync::{ArcShared, SpinSyncMutex};

use super::{
  timer_driver::{TimerDriver, TimerTask},
  timer_handle::TimerHandle,
};

struct ManualTimerEntry {
  remaining: Duration,
  cancelled: ArcShared<AtomicBool>,
  task: TimerTask,
}

/// Timer whose entries only fire when a test advances it.
pub struct ManualTimer {
  entries: SpinSyncMutex<Vec<ManualTimerEntry>>,
}

impl ManualTimer {
  /// Creates an empty timer.
  #[must_use]
  pub const fn new() -> Self {
    Self { entries: SpinSyncMutex::new(Vec::new()) }
  }

  /// Advances the timer by `delta`, running every due, uncancelled task in
  /// scheduling order.
  pub fn advance(&self, delta: Duration) {
    let due = {
      let mut entries = self.entries.lock();
      let mut due = Vec::new();
      let mut index = 0;
      while index < entries.len() {
        if entries[index].remaining <= delta {
          due.push(entries.remove(index));
        } else {
          entries[index].remaining -= delta;
          index += 1;
        }
      }
      due
    };

    for entry in due {
      if !entry.cancelled.load(Ordering::Acquire) {
        (entry.task)();
      }
    }
  }

  /// Returns the number of pending entries, cancelled ones included.
  #[must_use]
  pub fn pending(&self) -> usize {
    self.entries.lock().len()
  }
}

impl TimerDriver for ManualTimer {
  fn schedule_once(&self, delay: Duration, task: TimerTask) -> TimerHandle {
    let cancelled = ArcShared::new(AtomicBool::new(false));
    let entry = ManualTimerEntry { remaining: delay, cancelled: cancelled.clone(), task };
    self.entries.lock().push(entry);
    TimerHandle::new(cancelled)
  }
}

impl Default for ManualTimer {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests;
