//! Notification emitted when a restart budget is consumed.

use core::time::Duration;

use crate::{actor_error::ActorError, actor_ref::ActorRef};

/// Escalation payload delivered to a supervisor when a linked child used up
/// its restart budget and stopped itself.
///
/// The supervisor's behavior receives this value as an ordinary message and
/// can downcast to it.
#[derive(Clone, Debug)]
pub struct MaxRestartsExceeded {
  child:       ActorRef,
  max_retries: Option<u32>,
  window:      Option<Duration>,
  reason:      ActorError,
}

impl MaxRestartsExceeded {
  /// Creates a new escalation payload.
  #[must_use]
  pub const fn new(child: ActorRef, max_retries: Option<u32>, window: Option<Duration>, reason: ActorError) -> Self {
    Self { child, max_retries, window, reason }
  }

  /// Returns the child reference that exhausted its budget.
  #[must_use]
  pub const fn child(&self) -> &ActorRef {
    &self.child
  }

  /// Returns the restart limit that was exceeded.
  #[must_use]
  pub const fn max_retries(&self) -> Option<u32> {
    self.max_retries
  }

  /// Returns the rolling window the limit applied to.
  #[must_use]
  pub const fn window(&self) -> Option<Duration> {
    self.window
  }

  /// Returns the failure that triggered the final restart attempt.
  #[must_use]
  pub const fn reason(&self) -> &ActorError {
    &self.reason
  }
}
