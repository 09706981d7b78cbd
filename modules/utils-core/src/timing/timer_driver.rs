//! One-shot timer abstraction.

use alloc::boxed::Box;
use core::time::Duration;

use super::timer_handle::TimerHandle;

/// Callback invoked when a scheduled timer fires.
pub type TimerTask = Box<dyn FnOnce() + Send>;

/// Schedules one-shot callbacks after a delay.
///
/// Firing order between timers with identical deadlines follows scheduling
/// order. A cancelled handle guarantees the task never runs; it does not
/// guarantee the task has not already run.
pub trait TimerDriver: Send + Sync {
  /// Schedules `task` to run once after `delay` and returns a cancellation
  /// handle.
  fn schedule_once(&self, delay: Duration, task: TimerTask) -> TimerHandle;
}
