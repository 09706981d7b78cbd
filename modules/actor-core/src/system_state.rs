//! Shared state behind an actor system handle.

use alloc::{string::String, vec::Vec};
use core::time::Duration;

use portable_atomic::{AtomicBool, AtomicU64, Ordering};

use cygnet_utils_core_rs::{
  sync::{ArcShared, SpinSyncMutex},
  timing::{Clock, TimerDriver},
};

use crate::{
  actor_ref::ActorRef,
  deadletter_entry::DeadletterEntry,
  dispatcher::Dispatcher,
  event_stream::EventStream,
  event_stream_event::EventStreamEvent,
  lifecycle_event::LifecycleEvent,
  lifecycle_stage::LifecycleStage,
  log_event::{LogEvent, LogLevel},
  message_payload::MessagePayload,
  name_registry::NameRegistry,
  name_registry_error::NameRegistryError,
  pid::Pid,
  supervision_event::{SupervisionAction, SupervisionEvent},
  system_config::ActorSystemConfig,
};

/// Captures the process-wide services every cell reaches through its system
/// handle: the registry, the event stream, the clock, the timer, and the
/// default dispatcher.
pub struct SystemState {
  clock:              ArcShared<dyn Clock>,
  timer:              ArcShared<dyn TimerDriver>,
  default_dispatcher: Dispatcher,
  event_stream:       ArcShared<EventStream>,
  registry:           SpinSyncMutex<NameRegistry>,
  next_pid:           AtomicU64,
  terminated:         AtomicBool,
}

impl SystemState {
  /// Creates system state from the provided configuration.
  #[must_use]
  pub fn new(config: &ActorSystemConfig) -> Self {
    Self {
      clock: config.clock().clone(),
      timer: config.timer().clone(),
      default_dispatcher: config.build_dispatcher(),
      event_stream: ArcShared::new(EventStream::new()),
      registry: SpinSyncMutex::new(NameRegistry::new()),
      next_pid: AtomicU64::new(0),
      terminated: AtomicBool::new(false),
    }
  }

  /// Returns the system clock.
  #[must_use]
  pub const fn clock(&self) -> &ArcShared<dyn Clock> {
    &self.clock
  }

  /// Returns the system timer driver.
  #[must_use]
  pub const fn timer(&self) -> &ArcShared<dyn TimerDriver> {
    &self.timer
  }

  /// Returns the current instant on the system clock.
  #[must_use]
  pub fn monotonic_now(&self) -> Duration {
    self.clock.now()
  }

  /// Returns the dispatcher references use unless overridden via props.
  #[must_use]
  pub const fn default_dispatcher(&self) -> &Dispatcher {
    &self.default_dispatcher
  }

  /// Returns the event stream.
  #[must_use]
  pub const fn event_stream(&self) -> &ArcShared<EventStream> {
    &self.event_stream
  }

  /// Allocates the next process identifier.
  #[must_use]
  pub fn allocate_pid(&self) -> Pid {
    Pid::from_raw(self.next_pid.fetch_add(1, Ordering::AcqRel) + 1)
  }

  /// Registers a reference, optionally under a display name.
  ///
  /// # Errors
  ///
  /// Returns [`NameRegistryError::DuplicateName`] when the name is taken.
  pub fn register(&self, pid: Pid, name: Option<String>, reference: ActorRef) -> Result<(), NameRegistryError> {
    self.registry.lock().register(pid, name, reference)
  }

  /// Removes a reference from the registry.
  pub fn unregister(&self, pid: Pid) {
    self.registry.lock().unregister(pid);
  }

  /// Looks a reference up by display name.
  #[must_use]
  pub fn lookup(&self, name: &str) -> Option<ActorRef> {
    self.registry.lock().lookup(name)
  }

  /// Looks a reference up by identifier.
  #[must_use]
  pub fn lookup_pid(&self, pid: Pid) -> Option<ActorRef> {
    self.registry.lock().lookup_pid(pid)
  }

  /// Enumerates every registered reference.
  #[must_use]
  pub fn actor_refs(&self) -> Vec<ActorRef> {
    self.registry.lock().actor_refs()
  }

  /// Returns the number of registered references.
  #[must_use]
  pub fn registered_count(&self) -> usize {
    self.registry.lock().len()
  }

  /// Returns `true` once the system has been shut down.
  #[must_use]
  pub fn is_terminated(&self) -> bool {
    self.terminated.load(Ordering::Acquire)
  }

  pub(crate) fn mark_terminated(&self) {
    self.terminated.store(true, Ordering::Release);
  }

  /// Publishes an event on the event stream.
  pub fn publish(&self, event: &EventStreamEvent) {
    self.event_stream.publish(event);
  }

  /// Emits a structured log event.
  pub fn log(&self, level: LogLevel, pid: Option<Pid>, message: String) {
    let event = LogEvent::new(level, pid, message, self.monotonic_now());
    self.publish(&EventStreamEvent::Log(event));
  }

  /// Records an undeliverable payload as a dead letter.
  pub fn deadletter(&self, pid: Option<Pid>, payload: MessagePayload) {
    let entry = DeadletterEntry::new(pid, payload, self.monotonic_now());
    self.publish(&EventStreamEvent::Deadletter(entry));
  }

  pub(crate) fn publish_lifecycle(&self, pid: Pid, name: String, stage: LifecycleStage) {
    let event = LifecycleEvent::new(pid, name, stage, self.monotonic_now());
    self.publish(&EventStreamEvent::Lifecycle(event));
  }

  pub(crate) fn publish_supervision(&self, pid: Pid, action: SupervisionAction) {
    let event = SupervisionEvent::new(pid, action, self.monotonic_now());
    self.publish(&EventStreamEvent::Supervision(event));
  }
}
