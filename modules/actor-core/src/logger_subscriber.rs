//! Rendering of event stream traffic into log sinks.

use alloc::format;

use cygnet_utils_core_rs::sync::ArcShared;

use crate::{
  event_stream::EventStreamSubscriber,
  event_stream_event::EventStreamEvent,
  log_event::{LogEvent, LogLevel},
};

/// Sink receiving rendered log events.
///
/// Implementations live in the runtime crates so the core stays free of
/// I/O. A writer must tolerate being called from whichever thread published
/// the event.
pub trait LoggerWriter: Send + Sync {
  /// Hands one event to the sink.
  fn write(&self, event: &LogEvent);
}

/// Event stream subscriber turning runtime events into writer calls.
///
/// Log events at or above the threshold pass straight through. Dead letters
/// are rendered as debug-level lines, which is how dropped-message reports
/// reach the log without a second bookkeeping path.
pub struct LoggerSubscriber {
  threshold: LogLevel,
  writer:    ArcShared<dyn LoggerWriter>,
}

impl LoggerSubscriber {
  /// Creates a subscriber forwarding events at or above `threshold`.
  #[must_use]
  pub fn new(threshold: LogLevel, writer: ArcShared<dyn LoggerWriter>) -> Self {
    Self { threshold, writer }
  }

  /// Returns the minimum severity this subscriber forwards.
  #[must_use]
  pub const fn threshold(&self) -> LogLevel {
    self.threshold
  }

  fn passes(&self, level: LogLevel) -> bool {
    level >= self.threshold
  }
}

impl EventStreamSubscriber for LoggerSubscriber {
  fn notify(&self, event: &EventStreamEvent) {
    match event {
      | EventStreamEvent::Log(entry) => {
        if self.passes(entry.level()) {
          self.writer.write(entry);
        }
      },
      | EventStreamEvent::Deadletter(entry) => {
        if self.passes(LogLevel::Debug) {
          let line = LogEvent::new(
            LogLevel::Debug,
            entry.pid(),
            format!("dropped undeliverable message: {:?}", entry.payload()),
            entry.timestamp(),
          );
          self.writer.write(&line);
        }
      },
      | EventStreamEvent::Lifecycle(_) | EventStreamEvent::Supervision(_) => {},
    }
  }
}
