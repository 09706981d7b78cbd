//! One drain batch for a claimed dispatch line.

use cygnet_utils_core_rs::sync::ArcShared;

use super::{dispatch_line::DispatchLine, dispatcher_core::DispatcherCore};

/// Unit of work submitted to a dispatch executor.
///
/// The task owns the line's schedule claim: it drains up to the throughput
/// quota, releases the claim, and resubmits itself through the executor when
/// envelopes remain. Yielding between batches keeps one busy actor from
/// starving its siblings.
pub struct DispatchTask {
  core: ArcShared<DispatcherCore>,
  line: ArcShared<DispatchLine>,
}

impl DispatchTask {
  pub(crate) const fn new(core: ArcShared<DispatcherCore>, line: ArcShared<DispatchLine>) -> Self {
    Self { core, line }
  }

  /// Drains one batch of envelopes from the claimed line.
  pub fn run(self) {
    let quota = self.core.throughput();
    let mut processed = 0_u32;

    while processed < quota {
      if self.line.is_suspended() {
        break;
      }
      let Some(envelope) = self.line.mailbox().dequeue() else {
        break;
      };
      self.line.invoker().invoke(envelope);
      processed += 1;
    }

    self.line.state().release();

    // Producers that lost the claim race while we were draining rely on this
    // re-check; without it their envelopes would wait for the next send.
    if !self.line.is_suspended() && !self.line.mailbox().is_empty() {
      DispatcherCore::schedule(&self.core, &self.line);
    }
  }
}
