//! Log lines travelling over the event stream.

use alloc::string::String;
use core::fmt;
use core::time::Duration;

use crate::pid::Pid;

/// Severity attached to a runtime log line.
///
/// The ordering follows severity, so a threshold comparison such as
/// `level >= LogLevel::Warn` selects warnings and errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
  /// Fine-grained execution tracing.
  Trace,
  /// Diagnostics, including dropped-message reports.
  Debug,
  /// Routine runtime milestones.
  Info,
  /// Suspicious conditions the runtime recovered from.
  Warn,
  /// Failures that need operator attention.
  Error,
}

impl LogLevel {
  /// Returns the lowercase label used when rendering log lines.
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      | Self::Trace => "trace",
      | Self::Debug => "debug",
      | Self::Info => "info",
      | Self::Warn => "warn",
      | Self::Error => "error",
    }
  }
}

impl fmt::Display for LogLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// One log line emitted by the runtime or an actor.
#[derive(Clone, Debug)]
pub struct LogEvent {
  level:     LogLevel,
  pid:       Option<Pid>,
  message:   String,
  timestamp: Duration,
}

impl LogEvent {
  /// Creates a new log event.
  #[must_use]
  pub const fn new(level: LogLevel, pid: Option<Pid>, message: String, timestamp: Duration) -> Self {
    Self { level, pid, message, timestamp }
  }

  /// Returns the severity of the event.
  #[must_use]
  pub const fn level(&self) -> LogLevel {
    self.level
  }

  /// Returns the actor the event concerns, if any.
  #[must_use]
  pub const fn pid(&self) -> Option<Pid> {
    self.pid
  }

  /// Returns the log message.
  #[must_use]
  pub fn message(&self) -> &str {
    &self.message
  }

  /// Returns the system-clock instant the event was recorded at.
  #[must_use]
  pub const fn timestamp(&self) -> Duration {
    self.timestamp
  }
}

impl fmt::Display for LogEvent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.pid {
      | Some(pid) => write!(f, "[{}] {} {}", self.level, pid, self.message),
      | None => write!(f, "[{}] {}", self.level, self.message),
    }
  }
}
