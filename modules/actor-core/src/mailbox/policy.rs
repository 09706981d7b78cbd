//! Mailbox construction policy.

use core::num::NonZeroUsize;
use core::time::Duration;

use super::capacity::MailboxCapacity;

/// Capacity and producer-blocking configuration for one mailbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MailboxPolicy {
  capacity:     MailboxCapacity,
  push_timeout: Option<Duration>,
}

impl MailboxPolicy {
  /// Creates a policy for an unbounded mailbox.
  #[must_use]
  pub const fn unbounded() -> Self {
    Self { capacity: MailboxCapacity::Unbounded, push_timeout: None }
  }

  /// Creates a policy for a bounded mailbox.
  ///
  /// Producers hitting a full mailbox block for up to `push_timeout`; with
  /// no timeout the append fails immediately.
  #[must_use]
  pub const fn bounded(capacity: NonZeroUsize, push_timeout: Option<Duration>) -> Self {
    Self { capacity: MailboxCapacity::Bounded(capacity), push_timeout }
  }

  /// Returns the configured capacity.
  #[must_use]
  pub const fn capacity(&self) -> MailboxCapacity {
    self.capacity
  }

  /// Returns the configured push timeout.
  #[must_use]
  pub const fn push_timeout(&self) -> Option<Duration> {
    self.push_timeout
  }
}

impl Default for MailboxPolicy {
  fn default() -> Self {
    Self::unbounded()
  }
}
