//! Retry accounting for the restart protocol.

use core::time::Duration;

/// Tracks restart attempts against a rolling window.
///
/// Each reference owns one instance; siblings restarted by an all-for-one
/// incident are charged on their own counters.
#[derive(Clone, Copy, Debug, Default)]
pub struct RestartStatistics {
  retry_count:  u32,
  window_start: Option<Duration>,
}

impl RestartStatistics {
  /// Creates empty statistics.
  #[must_use]
  pub const fn new() -> Self {
    Self { retry_count: 0, window_start: None }
  }

  /// Records a restart attempt at `now` and returns the attempt count for
  /// the active window.
  ///
  /// Without a window the count accumulates over the actor's lifetime; an
  /// expired window resets the count to one and opens a new window at `now`.
  pub fn record_failure(&mut self, now: Duration, window: Option<Duration>) -> u32 {
    match window {
      | Some(window) => match self.window_start {
        | Some(start) if now.saturating_sub(start) <= window => {
          self.retry_count += 1;
        },
        | _ => {
          self.retry_count = 1;
          self.window_start = Some(now);
        },
      },
      | None => {
        self.retry_count += 1;
      },
    }
    self.retry_count
  }

  /// Returns the attempt count recorded for the active window.
  #[must_use]
  pub const fn retry_count(&self) -> u32 {
    self.retry_count
  }

  /// Returns the instant the active window opened at.
  #[must_use]
  pub const fn window_start(&self) -> Option<Duration> {
    self.window_start
  }
}
