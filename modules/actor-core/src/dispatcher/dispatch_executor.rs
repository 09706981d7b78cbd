//! Abstraction for schedulers to run drain tasks.

use super::dispatch_task::DispatchTask;

/// Execution resource the dispatcher submits drain tasks to.
///
/// Implementations decide where `task.run()` happens: the calling thread, a
/// worker pool, or an async runtime's blocking pool.
pub trait DispatchExecutor: Send + Sync {
  /// Runs the submitted drain task.
  fn execute(&self, task: DispatchTask);
}
