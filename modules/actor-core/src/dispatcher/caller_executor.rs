//! Executor running drain tasks on the calling thread.

use super::{dispatch_executor::DispatchExecutor, dispatch_task::DispatchTask};

/// Runs every submitted task immediately on the caller.
///
/// Useful for deterministic tests and single-threaded embeddings; sends
/// become synchronous with message processing.
#[derive(Clone, Copy, Debug, Default)]
pub struct CallerExecutor;

impl CallerExecutor {
  /// Creates the executor.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl DispatchExecutor for CallerExecutor {
  fn execute(&self, task: DispatchTask) {
    task.run();
  }
}
