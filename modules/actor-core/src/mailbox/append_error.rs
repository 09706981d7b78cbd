//! Error produced when a bounded mailbox rejects an envelope.

use core::fmt;

use crate::envelope::Envelope;

/// A bounded mailbox could not accept the envelope.
pub enum MailboxAppendError {
  /// The mailbox was full and no push timeout was configured.
  Full(Envelope),
  /// The mailbox stayed full for the whole push timeout.
  TimedOut(Envelope),
}

impl MailboxAppendError {
  /// Consumes the error and returns the rejected envelope.
  #[must_use]
  pub fn into_envelope(self) -> Envelope {
    match self {
      | Self::Full(envelope) | Self::TimedOut(envelope) => envelope,
    }
  }
}

impl fmt::Debug for MailboxAppendError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Full(_) => f.debug_tuple("Full").finish(),
      | Self::TimedOut(_) => f.debug_tuple("TimedOut").finish(),
    }
  }
}

impl fmt::Display for MailboxAppendError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Full(_) => f.write_str("mailbox is full"),
      | Self::TimedOut(_) => f.write_str("mailbox stayed full past the push timeout"),
    }
  }
}
