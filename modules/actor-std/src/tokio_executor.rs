//! Dispatch executor backed by a Tokio runtime.

use cygnet_actor_core_rs::{DispatchExecutor, DispatchTask};
use tokio::runtime::Handle;

/// Runs drain batches on a Tokio runtime's blocking pool.
///
/// Useful when the host application already owns a runtime and does not
/// want a second thread pool for actors.
pub struct TokioExecutor {
  handle: Handle,
}

impl TokioExecutor {
  /// Creates an executor over the provided runtime handle.
  #[must_use]
  pub const fn new(handle: Handle) -> Self {
    Self { handle }
  }

  /// Creates an executor over the ambient runtime.
  ///
  /// # Panics
  ///
  /// Panics when called outside a Tokio runtime context.
  #[must_use]
  pub fn current() -> Self {
    Self::new(Handle::current())
  }
}

impl DispatchExecutor for TokioExecutor {
  fn execute(&self, task: DispatchTask) {
    let _ = self.handle.spawn_blocking(move || task.run());
  }
}
