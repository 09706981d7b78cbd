//! Public dispatcher handle.

use cygnet_utils_core_rs::sync::ArcShared;

use crate::{envelope::Envelope, mailbox::{Mailbox, MailboxAppendError}, message_invoker::MessageInvoker, pid::Pid};

use super::{caller_executor::CallerExecutor, dispatch_executor::DispatchExecutor, dispatcher_core::DispatcherCore};

/// Envelopes processed per drain batch unless configured otherwise.
pub const DEFAULT_THROUGHPUT: u32 = 16;

/// Scheduler delivering envelopes with at most one concurrent drain per
/// attached reference.
///
/// Handles are cheap clones over shared state; every reference attached to
/// the same dispatcher shares its executor and throughput quota.
#[derive(Clone)]
pub struct Dispatcher {
  core: ArcShared<DispatcherCore>,
}

impl Dispatcher {
  /// Creates a dispatcher submitting drain batches to `executor`.
  #[must_use]
  pub fn new(executor: ArcShared<dyn DispatchExecutor>, throughput: u32) -> Self {
    Self { core: ArcShared::new(DispatcherCore::new(executor, throughput)) }
  }

  /// Creates a dispatcher that drains on the sending thread.
  #[must_use]
  pub fn with_caller_executor() -> Self {
    Self::new(ArcShared::new(CallerExecutor::new()), DEFAULT_THROUGHPUT)
  }

  /// Registers a reference and begins scheduling its mailbox. Attaching an
  /// already-attached reference is a no-op.
  pub fn attach(&self, pid: Pid, mailbox: ArcShared<dyn Mailbox>, invoker: ArcShared<dyn MessageInvoker>) {
    DispatcherCore::attach(&self.core, pid, mailbox, invoker);
  }

  /// Deregisters a reference; queued envelopes stay in its mailbox.
  pub fn detach(&self, pid: Pid) {
    self.core.detach(pid);
  }

  /// Enqueues the envelope on the destination's mailbox and ensures a drain
  /// batch gets scheduled. Envelopes for unattached references are dropped.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxAppendError`] when the destination's bounded mailbox
  /// rejected the envelope.
  pub fn dispatch(&self, envelope: Envelope) -> Result<(), MailboxAppendError> {
    let Some(pid) = envelope.receiver().pid() else {
      return Ok(());
    };
    let Some(line) = self.core.line(pid) else {
      return Ok(());
    };
    line.mailbox().enqueue(envelope)?;
    DispatcherCore::schedule(&self.core, &line);
    Ok(())
  }

  /// Halts dequeuing for the reference; producers keep enqueuing.
  pub fn suspend(&self, pid: Pid) {
    if let Some(line) = self.core.line(pid) {
      line.suspend();
    }
  }

  /// Resumes dequeuing for the reference and schedules pending work.
  pub fn resume(&self, pid: Pid) {
    if let Some(line) = self.core.line(pid) {
      line.resume();
      DispatcherCore::schedule(&self.core, &line);
    }
  }

  /// Returns the number of envelopes queued for the reference.
  #[must_use]
  pub fn mailbox_size(&self, pid: Pid) -> usize {
    self.core.line(pid).map_or(0, |line| line.mailbox().len())
  }

  /// Returns `true` when no envelopes are queued for the reference.
  #[must_use]
  pub fn mailbox_is_empty(&self, pid: Pid) -> bool {
    self.mailbox_size(pid) == 0
  }

  /// Returns the number of attached references.
  #[must_use]
  pub fn attached_count(&self) -> usize {
    self.core.count()
  }
}
