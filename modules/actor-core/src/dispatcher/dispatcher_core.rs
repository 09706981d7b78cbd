//! Shared dispatcher state.

use hashbrown::HashMap;

use cygnet_utils_core_rs::sync::{ArcShared, SpinSyncMutex};

use crate::{mailbox::Mailbox, message_invoker::MessageInvoker, pid::Pid};

use super::{dispatch_executor::DispatchExecutor, dispatch_line::DispatchLine, dispatch_task::DispatchTask};

pub(crate) struct DispatcherCore {
  lines:      SpinSyncMutex<HashMap<Pid, ArcShared<DispatchLine>>>,
  executor:   ArcShared<dyn DispatchExecutor>,
  throughput: u32,
}

impl DispatcherCore {
  pub(crate) fn new(executor: ArcShared<dyn DispatchExecutor>, throughput: u32) -> Self {
    Self { lines: SpinSyncMutex::new(HashMap::new()), executor, throughput }
  }

  pub(crate) const fn throughput(&self) -> u32 {
    self.throughput
  }

  pub(crate) fn line(&self, pid: Pid) -> Option<ArcShared<DispatchLine>> {
    self.lines.lock().get(&pid).cloned()
  }

  pub(crate) fn attach(
    core: &ArcShared<Self>,
    pid: Pid,
    mailbox: ArcShared<dyn Mailbox>,
    invoker: ArcShared<dyn MessageInvoker>,
  ) {
    let line = {
      let mut lines = core.lines.lock();
      if lines.contains_key(&pid) {
        return;
      }
      let line = ArcShared::new(DispatchLine::new(pid, mailbox, invoker));
      lines.insert(pid, line.clone());
      line
    };
    Self::schedule(core, &line);
  }

  pub(crate) fn detach(&self, pid: Pid) {
    self.lines.lock().remove(&pid);
  }

  pub(crate) fn count(&self) -> usize {
    self.lines.lock().len()
  }

  /// Claims the line and submits a drain task when work is pending.
  pub(crate) fn schedule(core: &ArcShared<Self>, line: &ArcShared<DispatchLine>) {
    if line.is_suspended() || line.mailbox().is_empty() {
      return;
    }
    if line.state().try_claim() {
      core.executor.execute(DispatchTask::new(core.clone(), line.clone()));
    }
  }
}
