//! Event variants delivered through the event stream.

use crate::{
  deadletter_entry::DeadletterEntry, lifecycle_event::LifecycleEvent, log_event::LogEvent,
  supervision_event::SupervisionEvent,
};

/// Event selected for publication on the event stream.
#[derive(Clone, Debug)]
pub enum EventStreamEvent {
  /// Actor lifecycle transition notification.
  Lifecycle(LifecycleEvent),
  /// Dead letter capture describing an undeliverable message.
  Deadletter(DeadletterEntry),
  /// Structured log event.
  Log(LogEvent),
  /// Supervision decision notification.
  Supervision(SupervisionEvent),
}
