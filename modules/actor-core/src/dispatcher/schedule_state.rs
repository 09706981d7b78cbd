//! Per-line scheduling flag enforcing the single-writer guarantee.

use portable_atomic::{AtomicU8, Ordering};

const IDLE: u8 = 0;
const SCHEDULED: u8 = 1;

/// Claim flag deciding which caller submits the next drain task.
///
/// Exactly one claim can be outstanding per line; holding it is what makes
/// mailbox processing single-writer.
pub(crate) struct ScheduleState(AtomicU8);

impl ScheduleState {
  pub(crate) const fn new() -> Self {
    Self(AtomicU8::new(IDLE))
  }

  /// Attempts to claim the line for execution.
  pub(crate) fn try_claim(&self) -> bool {
    self.0.compare_exchange(IDLE, SCHEDULED, Ordering::AcqRel, Ordering::Acquire).is_ok()
  }

  /// Releases the claim after a drain batch finishes.
  pub(crate) fn release(&self) {
    self.0.store(IDLE, Ordering::Release);
  }
}
