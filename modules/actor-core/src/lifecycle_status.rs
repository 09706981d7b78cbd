//! Lifecycle status tracked by each actor reference.

use core::fmt;

/// Lifecycle states of an actor reference.
///
/// Transitions are monotonic except for the `Running` ↔ `BeingRestarted`
/// alternation driven by the supervision engine. `Shutdown` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LifecycleStatus {
  /// Created but not yet started.
  Unstarted      = 0,
  /// Started and processing messages.
  Running        = 1,
  /// Temporarily halted while the restart protocol runs.
  BeingRestarted = 2,
  /// Permanently stopped.
  Shutdown       = 3,
}

impl LifecycleStatus {
  /// Returns the numeric representation stored in the status atomic.
  #[must_use]
  pub const fn as_u8(self) -> u8 {
    self as u8
  }

  /// Decodes a status previously encoded with [`Self::as_u8`].
  #[must_use]
  pub const fn from_u8(value: u8) -> Self {
    match value {
      | 0 => Self::Unstarted,
      | 1 => Self::Running,
      | 2 => Self::BeingRestarted,
      | _ => Self::Shutdown,
    }
  }

  /// Returns `true` when messages may be enqueued for this reference.
  #[must_use]
  pub const fn accepts_messages(self) -> bool {
    matches!(self, Self::Running | Self::BeingRestarted)
  }

  /// Returns `true` when the reference has been permanently stopped.
  #[must_use]
  pub const fn is_shutdown(self) -> bool {
    matches!(self, Self::Shutdown)
  }
}

impl fmt::Display for LifecycleStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      | Self::Unstarted => "unstarted",
      | Self::Running => "running",
      | Self::BeingRestarted => "being-restarted",
      | Self::Shutdown => "shutdown",
    };
    f.write_str(label)
  }
}
