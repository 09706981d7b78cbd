//! Monotonic time source abstraction.

use core::time::Duration;

/// Provides monotonic time as a duration since the clock's own epoch.
///
/// Implementations must be monotonic; wall-clock adjustments must not move
/// the reported value backwards.
pub trait Clock: Send + Sync {
  /// Returns the elapsed time since the clock's epoch.
  fn now(&self) -> Duration;
}
