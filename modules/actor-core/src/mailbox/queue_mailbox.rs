//! In-memory mailbox implementation.

use alloc::collections::VecDeque;
use core::hint::spin_loop;

use cygnet_utils_core_rs::{
  sync::{ArcShared, SpinSyncMutex},
  timing::Clock,
};

use crate::envelope::Envelope;

use super::{append_error::MailboxAppendError, base::Mailbox, policy::MailboxPolicy};

/// Ring-buffer mailbox guarded by a spinlock.
///
/// Bounded instances consult the system clock while a producer waits for
/// space, so the push timeout works without an OS scheduler.
pub struct QueueMailbox {
  queue:  SpinSyncMutex<VecDeque<Envelope>>,
  policy: MailboxPolicy,
  clock:  ArcShared<dyn Clock>,
}

impl QueueMailbox {
  /// Creates a mailbox following `policy`.
  #[must_use]
  pub fn new(policy: MailboxPolicy, clock: ArcShared<dyn Clock>) -> Self {
    Self { queue: SpinSyncMutex::new(VecDeque::new()), policy, clock }
  }

  /// Returns the policy the mailbox was built with.
  #[must_use]
  pub const fn policy(&self) -> &MailboxPolicy {
    &self.policy
  }

  fn try_push(&self, envelope: Envelope) -> Result<(), Envelope> {
    let mut queue = self.queue.lock();
    if let Some(limit) = self.policy.capacity().limit() {
      if queue.len() >= limit {
        return Err(envelope);
      }
    }
    queue.push_back(envelope);
    Ok(())
  }
}

impl Mailbox for QueueMailbox {
  fn enqueue(&self, envelope: Envelope) -> Result<(), MailboxAppendError> {
    let mut pending = match self.try_push(envelope) {
      | Ok(()) => return Ok(()),
      | Err(envelope) => envelope,
    };

    let Some(timeout) = self.policy.push_timeout() else {
      return Err(MailboxAppendError::Full(pending));
    };

    let deadline = self.clock.now().saturating_add(timeout);
    loop {
      pending = match self.try_push(pending) {
        | Ok(()) => return Ok(()),
        | Err(envelope) => envelope,
      };
      if self.clock.now() >= deadline {
        return Err(MailboxAppendError::TimedOut(pending));
      }
      spin_loop();
    }
  }

  fn dequeue(&self) -> Option<Envelope> {
    self.queue.lock().pop_front()
  }

  fn len(&self) -> usize {
    self.queue.lock().len()
  }
}
