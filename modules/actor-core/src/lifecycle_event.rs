//! Lifecycle transition notification.

use alloc::string::String;
use core::time::Duration;

use crate::{lifecycle_stage::LifecycleStage, pid::Pid};

/// Published whenever a reference starts, restarts, or stops.
#[derive(Clone, Debug)]
pub struct LifecycleEvent {
  pid:       Pid,
  name:      String,
  stage:     LifecycleStage,
  timestamp: Duration,
}

impl LifecycleEvent {
  /// Creates a new lifecycle event.
  #[must_use]
  pub const fn new(pid: Pid, name: String, stage: LifecycleStage, timestamp: Duration) -> Self {
    Self { pid, name, stage, timestamp }
  }

  /// Returns the reference the transition happened on.
  #[must_use]
  pub const fn pid(&self) -> Pid {
    self.pid
  }

  /// Returns the registry name of the reference.
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Returns the stage that was entered.
  #[must_use]
  pub const fn stage(&self) -> LifecycleStage {
    self.stage
  }

  /// Returns the system-clock instant of the transition.
  #[must_use]
  pub const fn timestamp(&self) -> Duration {
    self.timestamp
  }
}
