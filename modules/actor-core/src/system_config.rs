//! Runtime wiring injected into an actor system.

use cygnet_utils_core_rs::{
  sync::ArcShared,
  timing::{Clock, ManualClock, ManualTimer, TimerDriver},
};

use crate::dispatcher::{CallerExecutor, DispatchExecutor, Dispatcher, DEFAULT_THROUGHPUT};

/// Clock, timer, and executor wiring for one [`crate::ActorSystem`].
pub struct ActorSystemConfig {
  clock:      ArcShared<dyn Clock>,
  timer:      ArcShared<dyn TimerDriver>,
  executor:   ArcShared<dyn DispatchExecutor>,
  throughput: u32,
}

impl ActorSystemConfig {
  /// Creates a configuration from explicit runtime services.
  #[must_use]
  pub fn new(
    clock: ArcShared<dyn Clock>,
    timer: ArcShared<dyn TimerDriver>,
    executor: ArcShared<dyn DispatchExecutor>,
  ) -> Self {
    Self { clock, timer, executor, throughput: DEFAULT_THROUGHPUT }
  }

  /// Creates a fully deterministic configuration: hand-driven clock and
  /// timer, message processing on the sending thread.
  #[must_use]
  pub fn manual() -> Self {
    Self::new(
      ArcShared::new(ManualClock::new()),
      ArcShared::new(ManualTimer::new()),
      ArcShared::new(CallerExecutor::new()),
    )
  }

  /// Overrides the dispatcher throughput quota.
  #[must_use]
  pub fn with_throughput(mut self, throughput: u32) -> Self {
    self.throughput = throughput;
    self
  }

  /// Returns the configured clock.
  #[must_use]
  pub const fn clock(&self) -> &ArcShared<dyn Clock> {
    &self.clock
  }

  /// Returns the configured timer driver.
  #[must_use]
  pub const fn timer(&self) -> &ArcShared<dyn TimerDriver> {
    &self.timer
  }

  pub(crate) fn build_dispatcher(&self) -> Dispatcher {
    Dispatcher::new(self.executor.clone(), self.throughput)
  }
}
