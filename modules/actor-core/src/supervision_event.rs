//! Supervision decision notification.

use core::time::Duration;

use crate::pid::Pid;

/// Action the supervision engine took for a failing reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupervisionAction {
  /// The reference was restarted in place.
  Restarted,
  /// The reference was stopped.
  Stopped,
  /// The reference exhausted its restart budget and escalated.
  Escalated,
}

/// Published for every supervision decision, so operators can watch the
/// engine work.
#[derive(Clone, Copy, Debug)]
pub struct SupervisionEvent {
  pid:       Pid,
  action:    SupervisionAction,
  timestamp: Duration,
}

impl SupervisionEvent {
  /// Creates a new supervision event.
  #[must_use]
  pub const fn new(pid: Pid, action: SupervisionAction, timestamp: Duration) -> Self {
    Self { pid, action, timestamp }
  }

  /// Returns the reference the decision applied to.
  #[must_use]
  pub const fn pid(&self) -> Pid {
    self.pid
  }

  /// Returns the decision.
  #[must_use]
  pub const fn action(&self) -> SupervisionAction {
    self.action
  }

  /// Returns the system-clock instant of the decision.
  #[must_use]
  pub const fn timestamp(&self) -> Duration {
    self.timestamp
  }
}
