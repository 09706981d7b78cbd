//! Contract every mailbox implementation fulfils.

use crate::envelope::Envelope;

use super::append_error::MailboxAppendError;

/// FIFO queue of envelopes bound to exactly one reference.
///
/// Producers may enqueue concurrently; the dispatcher is the sole dequeuer.
/// The total order across producers is the order in which enqueue calls
/// complete successfully, and implementations never reorder envelopes.
pub trait Mailbox: Send + Sync {
  /// Appends an envelope.
  ///
  /// Bounded implementations block the producer for up to their push
  /// timeout.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxAppendError`] when a bounded mailbox could not accept
  /// the envelope.
  fn enqueue(&self, envelope: Envelope) -> Result<(), MailboxAppendError>;

  /// Removes and returns the head envelope.
  fn dequeue(&self) -> Option<Envelope>;

  /// Returns the number of queued envelopes.
  fn len(&self) -> usize;

  /// Returns `true` when no envelopes are queued.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
