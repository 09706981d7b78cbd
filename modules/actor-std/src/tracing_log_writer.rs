//! Bridge from the event stream logger onto `tracing`.

use cygnet_actor_core_rs::{LogEvent, LogLevel, LoggerWriter};

/// Writer forwarding event stream log events to the `tracing` subscribers
/// installed in the host application.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogWriter;

impl TracingLogWriter {
  /// Creates the writer.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl LoggerWriter for TracingLogWriter {
  fn write(&self, event: &LogEvent) {
    let pid = event.pid().map(|pid| pid.to_string());
    let pid = pid.as_deref().unwrap_or("-");
    match event.level() {
      | LogLevel::Trace => tracing::trace!(actor = pid, "{}", event.message()),
      | LogLevel::Debug => tracing::debug!(actor = pid, "{}", event.message()),
      | LogLevel::Info => tracing::info!(actor = pid, "{}", event.message()),
      | LogLevel::Warn => tracing::warn!(actor = pid, "{}", event.message()),
      | LogLevel::Error => tracing::error!(actor = pid, "{}", event.message()),
    }
  }
}
