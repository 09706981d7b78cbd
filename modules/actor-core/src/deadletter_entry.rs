//! Record of an undeliverable message.

use core::time::Duration;

use crate::{message_payload::MessagePayload, pid::Pid};

/// Captures a message that could not be delivered.
///
/// Published when a send hits a shut-down reference and for every envelope
/// dropped while a stopping actor drains its mailbox.
#[derive(Clone, Debug)]
pub struct DeadletterEntry {
  pid:       Option<Pid>,
  payload:   MessagePayload,
  timestamp: Duration,
}

impl DeadletterEntry {
  /// Creates a new dead letter record.
  #[must_use]
  pub const fn new(pid: Option<Pid>, payload: MessagePayload, timestamp: Duration) -> Self {
    Self { pid, payload, timestamp }
  }

  /// Returns the intended receiver, if known.
  #[must_use]
  pub const fn pid(&self) -> Option<Pid> {
    self.pid
  }

  /// Returns the undeliverable payload.
  #[must_use]
  pub const fn payload(&self) -> &MessagePayload {
    &self.payload
  }

  /// Returns the system-clock instant the drop was recorded at.
  #[must_use]
  pub const fn timestamp(&self) -> Duration {
    self.timestamp
  }
}
