//! Instant-backed monotonic clock.

use std::time::{Duration, Instant};

use cygnet_utils_core_rs::timing::Clock;

/// Clock reporting time elapsed since its construction.
///
/// Every component of one runtime shares a single instance, so all
/// durations land on the same epoch.
pub struct MonotonicClock {
  origin: Instant,
}

impl MonotonicClock {
  /// Creates a clock whose epoch is now.
  #[must_use]
  pub fn new() -> Self {
    Self { origin: Instant::now() }
  }
}

impl Clock for MonotonicClock {
  fn now(&self) -> Duration {
    self.origin.elapsed()
  }
}

impl Default for MonotonicClock {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests;
