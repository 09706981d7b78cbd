//! Per-reference dispatch bookkeeping.

use portable_atomic::{AtomicBool, Ordering};

use cygnet_utils_core_rs::sync::ArcShared;

use crate::{mailbox::Mailbox, message_invoker::MessageInvoker, pid::Pid};

use super::schedule_state::ScheduleState;

/// Mailbox, invoker, and scheduling state for one attached reference.
pub(crate) struct DispatchLine {
  pid:       Pid,
  mailbox:   ArcShared<dyn Mailbox>,
  invoker:   ArcShared<dyn MessageInvoker>,
  suspended: AtomicBool,
  state:     ScheduleState,
}

impl DispatchLine {
  pub(crate) fn new(pid: Pid, mailbox: ArcShared<dyn Mailbox>, invoker: ArcShared<dyn MessageInvoker>) -> Self {
    Self { pid, mailbox, invoker, suspended: AtomicBool::new(false), state: ScheduleState::new() }
  }

  pub(crate) const fn pid(&self) -> Pid {
    self.pid
  }

  pub(crate) fn mailbox(&self) -> &ArcShared<dyn Mailbox> {
    &self.mailbox
  }

  pub(crate) fn invoker(&self) -> &ArcShared<dyn MessageInvoker> {
    &self.invoker
  }

  pub(crate) fn is_suspended(&self) -> bool {
    self.suspended.load(Ordering::Acquire)
  }

  pub(crate) fn suspend(&self) {
    self.suspended.store(true, Ordering::Release);
  }

  pub(crate) fn resume(&self) {
    self.suspended.store(false, Ordering::Release);
  }

  pub(crate) const fn state(&self) -> &ScheduleState {
    &self.state
  }
}
